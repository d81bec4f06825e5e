use config::{Config, ConfigError, Environment, File};
use log::info;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct ApiSettings {
    pub target_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct PayTraceSettings {
    pub base_url: String,
    pub batches_path: String,
    pub access_token: String,
    pub timeout_ms: u64,
}

impl std::fmt::Debug for PayTraceSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayTraceSettings")
            .field("base_url", &self.base_url)
            .field("batches_path", &self.batches_path)
            .field("access_token", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub paytrace: PayTraceSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name("settings"))
            .add_source(File::with_name("settings.local").required(false))
            .add_source(Environment::with_prefix("paytrace").separator("__"))
            .build()?;

        Self::from_config(s)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings = config.try_deserialize()?;

        info!("Loaded settings. {:#?}", settings);

        Ok(settings)
    }
}
