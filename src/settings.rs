use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RelaySettings {
    pub application: ApplicationSettings,
    pub callbacks: CallbackSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

/// Client web application callback URLs
///
/// The error callback is required: the relay's whole purpose is reporting
/// failures there, so loading fails fast when it is missing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CallbackSettings {
    pub client_web_error_callback: String,
    pub client_web_success_callback: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl RelaySettings {
    /// Load settings from configuration files and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Settings.toml in the current directory (if it exists)
    /// 3. Default settings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Logger initialization fails
    /// - Settings.toml cannot be read or parsed
    /// - No error callback URL is configured after all sources are applied
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::initialize_environment()?;

        let mut settings = Self::load_base_settings()?;
        Self::apply_env_overrides(&mut settings);
        settings.validate()?;

        Ok(settings)
    }

    /// Load the .env file and initialize logging
    fn initialize_environment() -> Result<(), Box<dyn std::error::Error>> {
        Self::load_env_file();
        env_logger::try_init()?;
        Ok(())
    }

    /// Load environment variables from .env file
    fn load_env_file() {
        if let Ok(contents) = fs::read_to_string(".env") {
            for line in contents.lines() {
                if let Some((key, value)) = line.split_once('=') {
                    std::env::set_var(key.trim(), value.trim());
                }
            }
        }
    }

    /// Load base settings from Settings.toml or use defaults
    fn load_base_settings() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::path::PathBuf::from("Settings.toml");
        if config_path.exists() {
            let toml_content = fs::read_to_string(&config_path)?;
            let settings = basic_toml::from_str(&toml_content)?;
            log::info!("Loaded base settings from {}", config_path.display());
            return Ok(settings);
        }
        Ok(Self::default())
    }

    /// Apply environment variable overrides to settings
    pub fn apply_env_overrides(settings: &mut Self) {
        Self::apply_application_env_overrides(&mut settings.application);
        Self::apply_callback_env_overrides(&mut settings.callbacks);
    }

    fn apply_application_env_overrides(app_settings: &mut ApplicationSettings) {
        if let Ok(host) = std::env::var("HOST") {
            app_settings.host = host;
        }
        if let Ok(port_str) = std::env::var("PORT") {
            if let Ok(port) = port_str.parse::<u16>() {
                app_settings.port = port;
            }
        }
    }

    /// Apply environment overrides for callback URLs
    pub fn apply_callback_env_overrides(callback_settings: &mut CallbackSettings) {
        if let Ok(error_callback) = std::env::var("CLIENT_WEB_ERROR_CALLBACK") {
            callback_settings.client_web_error_callback = error_callback;
        }
        if let Ok(success_callback) = std::env::var("CLIENT_WEB_SUCCESS_CALLBACK") {
            callback_settings.client_web_success_callback = success_callback;
        }
    }

    /// Reject configurations the relay cannot operate with
    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.callbacks.client_web_error_callback.is_empty() {
            return Err("CLIENT_WEB_ERROR_CALLBACK is not configured".into());
        }
        Ok(())
    }

    /// Get the bind address for the server
    #[must_use]
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }
}
