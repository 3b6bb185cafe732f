//! Fetch a web page, find its `img` tags and download every image concurrently
//! into a freshly created directory.
//!
//! The [`runner::Runner`] drives one prompt-fetch-extract-download cycle at a time.
//! Any failure ends the run; [`diagnostic::Recorder`] snapshots the
//! [`diagnostic::RunState`] of the failed cycle to `error_<unix seconds>.json`.

pub mod args;
pub mod console;
pub mod diagnostic;
pub mod download;
pub mod error;
pub mod expression;
pub mod fetch;
pub mod logging;
pub mod path;
pub mod response;
pub mod runner;
pub mod webpage;
