use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The source attribute of an `img` tag. The value is captured by group 1 when
    /// double-quoted and by group 2 when single-quoted.
    pub static ref IMG_SRC: Regex =
        Regex::new(r#"(?i)<img\b[^>]*?\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
    /// Everything from the first to the last slash of a URL path.
    pub static ref DIRECTORY: Regex = Regex::new(r"/.*/").unwrap();
}
