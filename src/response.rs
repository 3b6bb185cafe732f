use crate::error::{Error, Result};
use reqwest::{header::CONTENT_TYPE, Response, StatusCode};

/// Adds extra functionality to `reqwest::Response`.
pub trait ResponseExt: Sized {
    /// Returns the `Content-Type` header without its parameters.
    fn content_type(&self) -> Option<&str>;

    /// Returns true if the response has a `Content-Type` header indicating it is HTML.
    fn is_html(&self) -> bool;

    /// Returns true if the response has an `image/*` `Content-Type` header.
    fn is_image(&self) -> bool;

    /// Passes the response through if its status is 200 OK.
    fn verify(self) -> Result<Self>;
}

impl ResponseExt for Response {
    fn content_type(&self) -> Option<&str> {
        self.headers()
            .get(CONTENT_TYPE)
            .and_then(|content_type| content_type.to_str().ok())
            .map(|t| t.split(';').next().unwrap_or(t).trim())
    }

    fn is_html(&self) -> bool {
        self.content_type()
            .map(|t| t.eq_ignore_ascii_case("text/html"))
            .unwrap_or(false)
    }

    fn is_image(&self) -> bool {
        self.content_type()
            .map(|t| t.to_ascii_lowercase().starts_with("image/"))
            .unwrap_or(false)
    }

    fn verify(self) -> Result<Self> {
        let status = self.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                url: self.url().to_string(),
                status,
            });
        }
        Ok(self)
    }
}
