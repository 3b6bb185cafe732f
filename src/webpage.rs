use crate::{
    error::{Error, Result},
    expression,
};

/// Returns the image references of an HTML document in document order, with any
/// query string removed. Duplicates are kept.
///
/// A page without a single image is an error rather than an empty list.
pub fn list(html: &str) -> Result<Vec<String>> {
    let links = expression::IMG_SRC
        .captures_iter(html)
        .filter_map(|matched| matched.get(1).or_else(|| matched.get(2)))
        .map(|src| strip_query(src.as_str()).to_string())
        .collect::<Vec<_>>();

    if links.is_empty() {
        return Err(Error::NoMatchesFound);
    }
    Ok(links)
}

fn strip_query(reference: &str) -> &str {
    reference
        .split_once('?')
        .map_or(reference, |(path, _)| path)
}
