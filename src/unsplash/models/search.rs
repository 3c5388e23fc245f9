use serde::Deserialize;

use super::Photo;

/// Envelope returned by the search endpoint; only `results` is of interest.
#[derive(Debug, Deserialize)]
pub struct SearchResults {
    pub results: Vec<Photo>,
}
