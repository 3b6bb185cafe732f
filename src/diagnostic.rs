use crate::error::Error;
use color_eyre::eyre::{Result, WrapErr};
use log::{debug, error};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::PathBuf;

/// The step of a cycle that is currently executing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Phase {
    #[default]
    AwaitingInput,
    ResolvingBasePath,
    FetchingHtml,
    ExtractingLinks,
    AwaitingDestinationName,
    CreatingDirectory,
    Downloading,
    Cycling,
}

/// What the current cycle was attempting, written out when it fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunState {
    #[serde(rename = "Input")]
    pub input: String,
    #[serde(rename = "CurrentPhase")]
    pub phase: Phase,
    #[serde(rename = "Html")]
    pub html: String,
    /// URL last handed to a download task, or the one whose task failed.
    #[serde(rename = "DownloadUrl")]
    pub last_download_url: String,
    #[serde(rename = "Error")]
    pub last_error: String,
}

impl RunState {
    pub fn reset(&mut self) {
        *self = RunState::default();
    }

    pub fn enter(&mut self, phase: Phase) {
        debug!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

/// Writes `error_<unix seconds>.json` snapshots of a failed cycle.
#[derive(Debug, Clone)]
pub struct Recorder {
    directory: PathBuf,
}

impl Recorder {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Recorder {
            directory: directory.into(),
        }
    }

    /// Stores the error in `state` and writes the whole state to a new file.
    /// Two failures within the same second write to the same file.
    pub fn record(&self, state: &mut RunState, error: &Error) -> Result<PathBuf> {
        state.last_error = error.to_string();
        let path = self
            .directory
            .join(format!("error_{}.json", chrono::Utc::now().timestamp()));

        let mut snapshot = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut snapshot, PrettyFormatter::with_indent(b" "));
        state
            .serialize(&mut serializer)
            .wrap_err("Failed to serialize the run state")?;
        std::fs::write(&path, snapshot)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Records the failure, tells the user where to find it and exits with status 1.
    pub fn abort(&self, state: &mut RunState, error: &Error) -> ! {
        error!("{error}");
        println!("Error occurred!");
        match self.record(state, error) {
            Ok(path) => println!("Error details are in file: {}", path.display()),
            Err(report) => eprintln!("{report:?}"),
        }
        std::process::exit(1)
    }
}
