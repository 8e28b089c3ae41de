use log::{debug, warn};
use reqwest::{header::ACCEPT, Client, Request, StatusCode};

use crate::{config::Credentials, error::TagCheckError, tag_list::TagList};

pub struct Registry {
    base_url: String,
    client: Client,
    credentials: Credentials,
}

impl Registry {
    /// `base_url` is the scheme and authority, e.g. `https://registry.example.com`.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        let base_url = format!("{}/v2", base_url.into());

        let client = Client::new();

        Self {
            base_url,
            client,
            credentials,
        }
    }

    pub fn tags_url(&self, image: &str) -> String {
        format!("{}/{}/tags/list", self.base_url, image)
    }

    fn get_request(&self, url: &str) -> Result<Request, TagCheckError> {
        let request = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .build()?;

        Ok(request)
    }

    /// Fetches the tag list of `image` with a single GET.
    ///
    /// Any status other than 200 yields an empty list.
    pub async fn tag_list(&self, image: &str) -> Result<TagList, TagCheckError> {
        let url = self.tags_url(image);
        debug!("GET {}", url);

        let response = self.client.execute(self.get_request(&url)?).await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                Ok(serde_json::from_str::<TagList>(&body)?)
            }
            status => {
                warn!("{} answered {}, treating tag list as empty", url, status);
                Ok(TagList::default())
            }
        }
    }

    pub async fn tag_exists(&self, image: &str, tag: &str) -> Result<bool, TagCheckError> {
        Ok(self.tag_list(image).await?.contains(tag))
    }
}
