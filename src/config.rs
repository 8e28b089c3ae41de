use std::{ffi::OsString, fmt};

use serde::Deserialize;

use crate::error::TagCheckError;

pub const ENV_PREFIX: &str = "DOCKER_REGISTRY_";

/// Settings read once from the `DOCKER_REGISTRY_*` environment variables.
///
/// Credentials stay optional here so that a missing username or password can
/// be reported as [`TagCheckError::MissingCredentials`] rather than as a
/// deserialization failure.
#[derive(Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub address: String,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub image_name: String,
    #[serde(default)]
    pub image_tag: String,
}

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, TagCheckError> {
        Self::from_vars_os(std::env::vars_os())
    }

    /// Keeps only `DOCKER_REGISTRY_*` entries, so unrelated variables that are
    /// not valid unicode are skipped rather than rejected.
    pub fn from_vars_os<I>(vars: I) -> Result<Self, TagCheckError>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut registry_vars = Vec::new();
        for (key, value) in vars {
            let key = match key.into_string() {
                Ok(key) if key.starts_with(ENV_PREFIX) => key,
                _ => continue,
            };
            let value = value
                .into_string()
                .map_err(|_| TagCheckError::NonUnicodeEnv(key.clone()))?;
            registry_vars.push((key, value));
        }

        Self::from_vars(registry_vars)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, TagCheckError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }

    pub fn credentials(&self) -> Result<Credentials, TagCheckError> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok(Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => Err(TagCheckError::MissingCredentials),
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://{}", self.address)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("image_name", &self.image_name)
            .field("image_tag", &self.image_tag)
            .finish()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
