mod command;
mod mock_hierarchy;
#[cfg(unix)] pub mod predicates;

pub use command::{new_configured_command, run_ok, CommandOutput};
pub use mock_hierarchy::{setup_basic_config, CONFIG_PATH, DATA_PATH, WIDGET_PATH};
