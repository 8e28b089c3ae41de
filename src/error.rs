use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagCheckError {
    #[error("Error: Environment variables for username and/or password are not set.")]
    MissingCredentials,
    #[error("environment variable {0} is not valid unicode")]
    NonUnicodeEnv(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] envy::Error),
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("malformed tag list: {0}")]
    Serde(#[from] serde_json::Error),
}
