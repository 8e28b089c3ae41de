use serde::Deserialize;

/// Body of `GET /v2/<name>/tags/list`. Only `tags` is read.
///
/// Some registries send `"tags": null` for a repository without tags, so the
/// list is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagList {
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl TagList {
    pub fn contains(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .map_or(false, |tags| tags.iter().any(|t| t == tag))
    }
}
