use crate::{domain::SignupField, mailchimp_client::MailchimpClient};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub mailchimp: MailchimpSettings,
    pub signup_field: SignupField,
}

#[derive(Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Clone, Deserialize)]
pub struct MailchimpSettings {
    pub api_key: Secret<String>,
    /// Overrides the endpoint derived from the API key's datacenter.
    pub base_url: Option<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl MailchimpSettings {
    pub fn base_url(&self) -> Result<String, String> {
        if let Some(base_url) = self.base_url.as_deref().filter(|url| !url.is_empty()) {
            return Ok(base_url.to_string());
        }

        // Keys look like `<hex>-us6`; the suffix names the datacenter serving the account.
        match self.api_key.expose_secret().rsplit_once('-') {
            Some((_, datacenter))
                if !datacenter.is_empty()
                    && datacenter.chars().all(|c| c.is_ascii_alphanumeric()) =>
            {
                Ok(format!("https://{datacenter}.api.mailchimp.com/3.0"))
            }
            _ => Err("Mailchimp API key does not name a datacenter".into()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(&self) -> Result<MailchimpClient, anyhow::Error> {
        let base_url = self.base_url().map_err(anyhow::Error::msg)?;
        let client = MailchimpClient::new(&base_url, self.api_key.clone(), self.timeout())?;

        Ok(client)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let config_dir = std::env::current_dir()
        .map(|dir| dir.join("configuration"))
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let env_config = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")))
        .add_source(config::File::from(config_dir.join(env_config)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "`{other}` is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
