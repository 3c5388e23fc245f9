use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creator {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    #[serde(rename = "total_likes")]
    pub like_count: Option<u64>,
    #[serde(rename = "total_photos")]
    pub photo_count: Option<u64>,
}
