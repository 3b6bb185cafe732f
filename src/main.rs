use color_eyre::eyre::{Result, WrapErr};
use imgdump::{
    args, console,
    diagnostic::{Recorder, RunState},
    logging,
    runner::Runner,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = args::parse();
    logging::init(args.verbose)?;

    let recorder = Recorder::new(&args.diagnostics);
    let runner = Runner::try_from(args).wrap_err("Failed to build the HTTP client")?;

    let mut state = RunState::default();
    let mut console = console::stdio();
    match runner.run(&mut state, &mut console).await {
        Ok(()) => {
            println!("exiting");
            Ok(())
        }
        Err(error) => recorder.abort(&mut state, &error),
    }
}
