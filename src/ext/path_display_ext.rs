use std::path::{Component, Path, PathBuf};

/// Renders a path for messages: canonical when it exists, otherwise made
/// absolute against the working directory with `.` and `..` folded away.
pub fn best_effort_path_display(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    lexically_normalize(&absolute).display().to_string()
}

fn lexically_normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }

    components.iter().collect()
}

pub trait PathDisplayExt {
    fn best_effort_display(&self) -> String;

    /// Final component as UTF-8, if there is one and it is valid.
    fn base_name(&self) -> Option<&str>;
}

impl PathDisplayExt for Path {
    fn best_effort_display(&self) -> String {
        best_effort_path_display(self)
    }

    fn base_name(&self) -> Option<&str> {
        self.file_name().and_then(|name| name.to_str())
    }
}

impl PathDisplayExt for PathBuf {
    fn best_effort_display(&self) -> String {
        best_effort_path_display(self)
    }

    fn base_name(&self) -> Option<&str> {
        self.as_path().base_name()
    }
}
