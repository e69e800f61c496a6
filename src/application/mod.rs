mod application;
mod completion;
pub mod data;
mod prompt;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use runtime_config::RuntimeConfig;
