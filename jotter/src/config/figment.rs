use std::path::Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use log::{debug, trace};
use thiserror::Error;

use crate::config::app_config::AppConfig;
use crate::lib_constants::APP_CONFIG_ENV_PREFIX;

pub trait FigmentExt {
    fn setup_app_config(
        self,
        config_file: impl AsRef<Path>,
    ) -> Figment;
}

impl FigmentExt for Figment {
    fn setup_app_config(self, config_file: impl AsRef<Path>) -> Figment {
        self.merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file_exact(config_file))
            .merge(Env::prefixed(APP_CONFIG_ENV_PREFIX).split("__"))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Figment(Box::new(e))
    }
}

pub fn read_app_config(
    config_file: impl AsRef<Path>,
    figment: Figment,
) -> Result<AppConfig, ConfigError> {
    debug!("reading configuration from \"{}\"", config_file.as_ref().display());
    let app_config: AppConfig = figment
        .setup_app_config(config_file)
        .extract()?;
    trace!("read configuration: {app_config:?}");
    Ok(app_config)
}
