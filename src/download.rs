use crate::{
    error::{Error, Result},
    fetch::Fetcher,
    path,
    response::ResponseExt,
};
use futures::StreamExt;
use log::warn;
use std::path::{Path, PathBuf};
use tokio::{fs::File, io::AsyncWriteExt};
use url::Url;

/// One image to fetch and the file it ends up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// 1-based position of the reference on the page.
    pub position: usize,
    pub url: Url,
    pub path: PathBuf,
}

impl Target {
    pub fn new(base: &Url, directory: &Path, position: usize, reference: &str) -> Result<Self> {
        let url = path::resolve(base, reference)?;
        let path = match path::suffix(&url) {
            Some(suffix) => directory.join(format!("{position}.{suffix}")),
            None => return Err(Error::SuffixExtraction(reference.to_string())),
        };
        Ok(Target { position, url, path })
    }
}

/// Builds one target per reference, numbered in the order they were found.
pub fn plan<S: AsRef<str>>(base: &Url, directory: &Path, references: &[S]) -> Result<Vec<Target>> {
    references
        .iter()
        .enumerate()
        .map(|(index, reference)| Target::new(base, directory, index + 1, reference.as_ref()))
        .collect()
}

/// Downloads a single target and returns the number of bytes written.
///
/// A failure after the file was created leaves the partial file behind.
pub async fn single(fetcher: &Fetcher, target: &Target) -> Result<u64> {
    let response = fetcher.get(&target.url).await?;
    if !response.is_image() {
        warn!(
            "{} responded with content type {}",
            target.url,
            response.content_type().unwrap_or("<none>")
        );
    }

    let mut file = File::create(&target.path)
        .await
        .map_err(|source| Error::FileCreate {
            path: target.path.clone(),
            source,
        })?;
    let write_error = |source: std::io::Error| Error::Write {
        path: target.path.clone(),
        source,
    };

    let mut written = 0;
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|source| Error::Read {
            url: target.url.to_string(),
            source,
        })?;
        file.write_all(&chunk).await.map_err(write_error)?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(write_error)?;
    Ok(written)
}
