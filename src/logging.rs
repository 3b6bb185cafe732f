use color_eyre::{eyre::bail, Result};

pub fn init(verbosity: u8) -> Result<()> {
    simple_logger::init_with_level(match verbosity {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        2 => log::Level::Trace,
        _ => bail!("-vv is already everything there is to see"),
    })?;
    Ok(())
}
