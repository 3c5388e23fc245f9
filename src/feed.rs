use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use crate::gateway::PhotoGateway;
use crate::unsplash::{Photo, Result};

/// Holder for the photo list currently on display. Overlapping fetches are
/// allowed to race; every request is stamped with a monotonically increasing
/// ticket, and a response is committed only while its ticket is still the
/// latest issued. The last-issued request wins regardless of completion
/// order.
pub struct Feed {
    gateway: Arc<dyn PhotoGateway>,
    photos: Mutex<Vec<Photo>>,
    latest: AtomicU64,
}

impl Feed {
    pub fn new(gateway: Arc<dyn PhotoGateway>) -> Self {
        Self {
            gateway,
            photos: Mutex::new(Vec::new()),
            latest: AtomicU64::new(0),
        }
    }

    /// Replaces the feed with random photos. `Ok(false)` means the response
    /// arrived stale and was discarded; an error leaves the previous list
    /// intact.
    pub async fn refresh(&self, count: u32) -> Result<bool> {
        let ticket = self.issue();
        let photos = self.gateway.fetch_random(count).await?;

        Ok(self.commit(ticket, photos))
    }

    /// Replaces the feed with search results; same staleness rule as
    /// [`Feed::refresh`].
    pub async fn search(&self, query: &str) -> Result<bool> {
        let ticket = self.issue();
        let photos = self.gateway.search(query).await?;

        Ok(self.commit(ticket, photos))
    }

    pub fn photos(&self) -> Vec<Photo> {
        self.photos.lock().unwrap().clone()
    }

    fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn commit(&self, ticket: u64, photos: Vec<Photo>) -> bool {
        let mut current = self.photos.lock().unwrap();

        if self.latest.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "discarding stale photo response");
            return false;
        }

        *current = photos;
        true
    }
}
