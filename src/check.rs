use log::info;

use crate::{config::Config, error::TagCheckError, registry::Registry};

/// Answers whether `config.image_tag` is listed for `config.image_name` on
/// `https://{config.address}`.
///
/// Credentials are validated before anything touches the network.
pub async fn check(config: &Config) -> Result<bool, TagCheckError> {
    check_at(config, &config.base_url()).await
}

/// Same as [`check`] against an explicit `base_url` instead of the one derived
/// from `config.address`.
pub async fn check_at(config: &Config, base_url: &str) -> Result<bool, TagCheckError> {
    let credentials = config.credentials()?;

    let registry = Registry::new(base_url, credentials);
    let exists = registry
        .tag_exists(&config.image_name, &config.image_tag)
        .await?;

    info!(
        "{}/{}:{} exists: {}",
        base_url, config.image_name, config.image_tag, exists
    );

    Ok(exists)
}
