// Public modules
pub mod cleos;
pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod run_log;
pub mod steps;

// Re-export common types for convenience
pub use config::{Config, ConfigInput};
pub use dispatch::{dispatch, RunReport, Selection};
pub use error::{Error, ErrorCode, Result};
pub use run_log::RunLog;
pub use steps::{Step, STEPS};
