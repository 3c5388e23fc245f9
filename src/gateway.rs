use async_trait::async_trait;

use crate::unsplash::{Client, Photo, Result};

/// Capability interface over the photo API. Presentation code holds a
/// `dyn PhotoGateway` so tests can substitute canned responses for the
/// real client.
#[async_trait]
pub trait PhotoGateway: Send + Sync {
    async fn fetch_random(&self, count: u32) -> Result<Vec<Photo>>;

    async fn search(&self, query: &str) -> Result<Vec<Photo>>;
}

#[async_trait]
impl PhotoGateway for Client {
    async fn fetch_random(&self, count: u32) -> Result<Vec<Photo>> {
        Client::fetch_random(self, count).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Photo>> {
        Client::search(self, query).await
    }
}
