use crate::{
    error::{Error, Result},
    expression,
};
use url::Url;

/// Parses the URL typed at the prompt.
pub fn parse(input: &str) -> Result<Url> {
    let url = Url::parse(input).map_err(|e| Error::invalid_input(input, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_input(input, "only http and https are supported"));
    }
    if url.host_str().is_none() {
        return Err(Error::invalid_input(input, "missing host"));
    }
    Ok(url)
}

/// Returns `scheme://host/<directory>/` of a page, the prefix its relative image
/// references resolve against.
pub fn base_path(page: &Url) -> Result<Url> {
    let directory = expression::DIRECTORY
        .find(page.path())
        .ok_or_else(|| Error::invalid_input(page.as_str(), "no / in path"))?;

    let mut base = page.clone();
    base.set_path(directory.as_str());
    base.set_query(None);
    base.set_fragment(None);
    // Both only fail for URLs without a host, which `parse` rejects.
    let _ = base.set_username("");
    let _ = base.set_password(None);
    Ok(base)
}

/// Resolves an image reference found on the page against its base path.
pub fn resolve(base: &Url, reference: &str) -> Result<Url> {
    base.join(reference)
        .map_err(|e| Error::invalid_input(reference, e))
}

/// Returns the final dot-segment of the last path segment of a resolved image URL.
/// Query and fragment never take part.
pub fn suffix(url: &Url) -> Option<&str> {
    let name = url.path_segments()?.last()?;
    match name.rsplit_once('.') {
        Some((_, suffix)) if !suffix.is_empty() => Some(suffix),
        _ => None,
    }
}
