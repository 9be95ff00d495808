//! Learning resource model.

use serde::{Deserialize, Serialize};

/// Kind of a learning resource.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResourceType {
    Article,
    Video,
    PDF,
    Link,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Article => "Article",
            ResourceType::Video => "Video",
            ResourceType::PDF => "PDF",
            ResourceType::Link => "Link",
        }
    }
}

/// An external article, video, document or link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub url: String,
    pub tag: String,
}

/// Request body for creating a new resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub url: String,
    pub tag: String,
}

impl NewResource {
    pub fn into_resource(self, id: String) -> Resource {
        Resource {
            id,
            title: self.title,
            description: self.description,
            kind: self.kind,
            url: self.url,
            tag: self.tag,
        }
    }
}
