use crate::{
    args::{Args, FailurePolicy},
    console::Console,
    diagnostic::{Phase, RunState},
    download::{self, Target},
    error::{Error, Result},
    fetch::Fetcher,
    path, webpage,
};
use log::{debug, error, info};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::{
    fs,
    io::{AsyncBufRead, AsyncWrite},
    task::JoinSet,
};

/// Typed at the first prompt to leave.
pub const EXIT: &str = "q";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Parent of every cycle's destination directory.
    pub output: PathBuf,
    pub on_failure: FailurePolicy,
}

/// How a single cycle ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Cycle {
    Exit,
    Completed(Summary),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    pub directory: PathBuf,
    pub images: usize,
    pub bytes: u64,
}

pub struct Runner {
    fetcher: Fetcher,
    settings: Settings,
}

impl TryFrom<Args> for Runner {
    type Error = reqwest::Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Ok(Runner::new(
            Fetcher::new(args.timeout())?,
            Settings {
                output: args.output,
                on_failure: args.on_failure,
            },
        ))
    }
}

impl Runner {
    pub fn new(fetcher: Fetcher, settings: Settings) -> Self {
        Runner { fetcher, settings }
    }

    /// Runs cycles until the user asks to exit. The first failure ends the loop,
    /// leaving `state` as it was when the failing step started.
    pub async fn run<R, W>(&self, state: &mut RunState, console: &mut Console<R, W>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        loop {
            state.reset();
            match self.cycle(state, console).await? {
                Cycle::Exit => return Ok(()),
                Cycle::Completed(summary) => {
                    console
                        .say(&format!(
                            "downloaded {} images into {}\n",
                            summary.images,
                            summary.directory.display()
                        ))
                        .await?;
                }
            }
        }
    }

    /// Asks for a page, downloads all of its images and returns once every
    /// download has finished.
    pub async fn cycle<R, W>(
        &self,
        state: &mut RunState,
        console: &mut Console<R, W>,
    ) -> Result<Cycle>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        state.enter(Phase::AwaitingInput);
        state.input = console.prompt("paste url (or q to exit): ").await?;
        if state.input.is_empty() {
            return Err(Error::InputEmpty);
        }
        if state.input == EXIT {
            return Ok(Cycle::Exit);
        }

        state.enter(Phase::ResolvingBasePath);
        let page = path::parse(&state.input)?;
        let base = path::base_path(&page)?;
        debug!("resolving images against {base}");

        state.enter(Phase::FetchingHtml);
        info!("getting HTML...");
        state.html = self.fetcher.html(&page).await?;

        state.enter(Phase::ExtractingLinks);
        info!("extracting img tags from HTML...");
        let links = webpage::list(&state.html)?;

        state.enter(Phase::AwaitingDestinationName);
        let name = console
            .prompt(&format!("found {} images. Enter name: ", links.len()))
            .await?;
        let name = if name.is_empty() { default_name() } else { name };

        state.enter(Phase::CreatingDirectory);
        let directory = self.create_directory(&name).await?;

        state.enter(Phase::Downloading);
        let targets = download::plan(&base, &directory, &links)?;
        let summary = self.download_all(state, &directory, targets).await?;

        state.enter(Phase::Cycling);
        Ok(Cycle::Completed(summary))
    }

    /// Creates `name` under the output directory. Never reuses an existing one.
    pub async fn create_directory(&self, name: &str) -> Result<PathBuf> {
        let path = self.settings.output.join(name);
        match fs::create_dir(&path).await {
            Ok(()) => Ok(path),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(Error::DirectoryAlreadyExists(path))
            }
            Err(source) => Err(Error::DirectoryCreate { path, source }),
        }
    }

    /// Spawns one task per target and waits for all of them.
    ///
    /// The first failure wins. Under [`FailurePolicy::Abort`] the remaining tasks
    /// are cancelled as soon as it arrives; under [`FailurePolicy::Drain`] they are
    /// allowed to finish first. Either way no task is still running on return.
    pub async fn download_all(
        &self,
        state: &mut RunState,
        directory: &Path,
        targets: Vec<Target>,
    ) -> Result<Summary> {
        let mut tasks = JoinSet::new();
        for target in targets {
            state.last_download_url = target.url.to_string();
            let fetcher = self.fetcher.clone();
            tasks.spawn(async move {
                let result = download::single(&fetcher, &target).await;
                (target, result)
            });
        }

        let mut summary = Summary {
            directory: directory.to_path_buf(),
            images: 0,
            bytes: 0,
        };
        let mut failure = None;
        while let Some(joined) = tasks.join_next().await {
            let (url, error) = match joined {
                Ok((target, Ok(bytes))) => {
                    info!(
                        "downloaded image {} as {}",
                        target.position,
                        target.path.display()
                    );
                    summary.images += 1;
                    summary.bytes += bytes;
                    continue;
                }
                Ok((target, Err(e))) => (Some(target.url), e),
                Err(e) => (None, Error::Task(e.to_string())),
            };

            if failure.is_some() {
                error!("{error}");
                continue;
            }
            if let Some(url) = url {
                state.last_download_url = url.to_string();
            }
            failure = Some(error);

            if self.settings.on_failure == FailurePolicy::Abort {
                tasks.abort_all();
                while tasks.join_next().await.is_some() {}
                break;
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(summary),
        }
    }
}

fn default_name() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H-%M-%S").to_string()
}
