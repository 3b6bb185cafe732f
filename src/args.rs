use clap::{ArgAction::Count, Parser, ValueEnum};
use std::path::PathBuf;
use tokio::time::Duration;

/// What happens to the other downloads of a cycle once one of them fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Cancel the remaining downloads right away
    #[default]
    Abort,
    /// Let the remaining downloads finish, then fail
    Drain,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Directory in which each run's image directory is created
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub output: PathBuf,

    /// Directory to write error reports to
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub diagnostics: PathBuf,

    /// What to do with in-flight downloads when one fails
    #[arg(long, value_enum, default_value_t = FailurePolicy::Abort)]
    pub on_failure: FailurePolicy,

    /// Turn debugging information on
    #[arg(short, long, action = Count)]
    pub verbose: u8,

    /// Longest wait for a connection or for more response data, 0 to wait forever
    #[arg(short, long, default_value = "30", value_parser = parse_seconds, value_name = "SECONDS")]
    pub timeout: Duration,
}

impl Args {
    pub fn timeout(&self) -> Option<Duration> {
        (!self.timeout.is_zero()).then_some(self.timeout)
    }
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_seconds(arg: &str) -> Result<std::time::Duration, std::num::ParseIntError> {
    let seconds = arg.parse()?;
    Ok(Duration::from_secs(seconds))
}
