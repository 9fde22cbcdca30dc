use super::constants::{DEFAULT_OWNER_EMAIL, DEFAULT_OWNER_NAME};

pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const ENV_OWNER_NAME: &str = "FOLIO_OWNER_NAME";
pub const ENV_OWNER_EMAIL: &str = "FOLIO_OWNER_EMAIL";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration value `{0}`")]
    Missing(&'static str),
}

/// Values baked in at build time, looked up by name.
pub fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_SERVICE_ID => option_env!("EMAILJS_SERVICE_ID"),
        ENV_TEMPLATE_ID => option_env!("EMAILJS_TEMPLATE_ID"),
        ENV_PUBLIC_KEY => option_env!("EMAILJS_PUBLIC_KEY"),
        ENV_OWNER_NAME => option_env!("FOLIO_OWNER_NAME"),
        ENV_OWNER_EMAIL => option_env!("FOLIO_OWNER_EMAIL"),
        _ => None,
    };
    value.map(str::to_string)
}

fn non_blank<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

/// EmailJS credentials. All three values are opaque secrets.
#[derive(Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

// Secrets stay out of logs.
impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("service_id", &"<redacted>")
            .field("template_id", &"<redacted>")
            .field("public_key", &"<redacted>")
            .finish()
    }
}

impl EmailConfig {
    /// Resolve through an arbitrary key lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |key: &'static str| non_blank(&lookup, key).ok_or(ConfigError::Missing(key));
        Ok(Self {
            service_id: required(ENV_SERVICE_ID)?,
            template_id: required(ENV_TEMPLATE_ID)?,
            public_key: required(ENV_PUBLIC_KEY)?,
        })
    }

    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }
}

/// Who contact messages are addressed to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

impl Default for Recipient {
    fn default() -> Self {
        Self {
            name: DEFAULT_OWNER_NAME.to_string(),
            email: DEFAULT_OWNER_EMAIL.to_string(),
        }
    }
}

impl Recipient {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let fallback = Self::default();
        Self {
            name: non_blank(&lookup, ENV_OWNER_NAME).unwrap_or(fallback.name),
            email: non_blank(&lookup, ENV_OWNER_EMAIL).unwrap_or(fallback.email),
        }
    }

    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env)
    }
}
