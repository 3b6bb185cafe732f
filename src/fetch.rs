use crate::{
    error::{Error, Result},
    response::ResponseExt,
};
use log::{debug, warn};
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// Issues GET requests. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// `timeout` bounds connecting and each read of a response, never a whole
    /// transfer, so a slow but steady download is not cut off. `None` waits forever.
    pub fn new(timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.connect_timeout(timeout).read_timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Returns the response for `url` once it is known to be a 200 OK.
    ///
    /// The body is left unread; dropping the response on any path releases the
    /// connection.
    pub async fn get(&self, url: &Url) -> Result<Response> {
        debug!("GET {url}");
        self.client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| Error::Network {
                url: url.to_string(),
                source,
            })?
            .verify()
    }

    /// Returns the body of the page at `url` as text.
    pub async fn html(&self, url: &Url) -> Result<String> {
        let response = self.get(url).await?;
        if !response.is_html() {
            warn!("{url} responded without content type text/html");
        }
        let body = response.bytes().await.map_err(|source| Error::Read {
            url: url.to_string(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
