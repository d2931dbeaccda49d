//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! signal handling, and the command runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{run_show, run_since, run_video_id, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, ShowArgs};
pub use config_cmd::handle_config_command;
pub use logging::init_logging;
pub use presenter::Presenter;
