use assert_fs::prelude::*;
use assert_fs::TempDir;

pub const CONFIG_PATH: &str = "etc/jotter/jotter.toml";
pub const DATA_PATH: &str = "var/jotter";
pub const WIDGET_PATH: &str = "var/jotter-widget";

/// A config file pointing at fresh data and widget directories, followed by
/// `extra` verbatim. Put tables such as `[preferences]` in `extra`.
pub fn setup_basic_config(extra: &str) -> TempDir {
    let root = TempDir::new().unwrap();
    let config_file = root.child(CONFIG_PATH);
    let data_dir = root.child(DATA_PATH);
    data_dir.create_dir_all().unwrap();
    let widget_dir = root.child(WIDGET_PATH);
    widget_dir.create_dir_all().unwrap();

    let config = format!(
        r#"data_directory = "{}"
widget_directory = "{}"
{extra}"#,
        data_dir.to_str().unwrap(),
        widget_dir.to_str().unwrap(),
    );
    config_file.write_str(&config).unwrap();

    root
}
