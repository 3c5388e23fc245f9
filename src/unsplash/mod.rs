use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client as HttpClient, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

pub mod error;
pub mod models;
pub mod result;

pub use error::Error;
pub use models::{Creator, Location, Photo, Place, Position, SearchResults};
pub use result::Result;

const API_ROOT: &str = "https://api.unsplash.com";

/// RFC 3986 unreserved characters pass through; everything else is escaped,
/// so a space in a search query becomes `%20`.
const QUERY_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    root: Url,
    access_key: String,
}

impl Client {
    pub fn new<T: AsRef<str>>(access_key: T) -> Result<Self> {
        Self::with_root(API_ROOT, access_key)
    }

    /// Point the client at an alternate API root.
    pub fn with_root<U: AsRef<str>, T: AsRef<str>>(root: U, access_key: T) -> Result<Self> {
        let root = Url::parse(root.as_ref()).map_err(|_| Error::InvalidRequest)?;

        Ok(Self {
            http: HttpClient::new(),
            root,
            access_key: access_key.as_ref().to_owned(),
        })
    }

    pub fn new_from_env() -> Result<Self> {
        let access_key =
            std::env::var("UNSPLASH_API_KEY").map_err(|_| Error::InvalidAccessKey)?;

        Self::new(access_key)
    }

    pub async fn fetch_random(&self, count: u32) -> Result<Vec<Photo>> {
        let url = self.random_url(count)?;

        tracing::debug!(count, "fetching random photos");
        self.fetch_json(url).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Photo>> {
        let url = self.search_url(query)?;

        tracing::debug!(query, "searching photos");
        let search: SearchResults = self.fetch_json(url).await?;

        Ok(search.results)
    }

    fn random_url(&self, count: u32) -> Result<Url> {
        let mut url = self
            .root
            .join("photos/random/")
            .map_err(|_| Error::InvalidRequest)?;

        url.set_query(Some(&format!(
            "count={}&client_id={}",
            count,
            utf8_percent_encode(&self.access_key, QUERY_ESCAPES),
        )));

        Ok(url)
    }

    fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self
            .root
            .join("search/photos/")
            .map_err(|_| Error::InvalidRequest)?;

        url.set_query(Some(&format!(
            "query={}&client_id={}",
            utf8_percent_encode(query, QUERY_ESCAPES),
            utf8_percent_encode(&self.access_key, QUERY_ESCAPES),
        )));

        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = Self::send_request(self.http.get(url)).await?;

        response.json().await.map_err(|err| {
            tracing::debug!(error = %err, "response body did not match the expected shape");
            Error::Decode
        })
    }

    async fn send_request(request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|_| Error::Network)?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }

        Ok(response)
    }
}
