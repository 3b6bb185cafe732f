use crate::error::{Error, Result};
use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

/// Line-oriented prompts over any async reader and writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

/// A console on the process's standard input and output.
pub fn stdio() -> Console<BufReader<Stdin>, Stdout> {
    Console::new(BufReader::new(io::stdin()), io::stdout())
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Prints `message` and reads one line without its terminator.
    /// End of input reads as an empty line.
    pub async fn prompt(&mut self, message: &str) -> Result<String> {
        self.write(message).await?;
        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .await
            .map_err(Error::Console)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub async fn say(&mut self, message: &str) -> Result<()> {
        self.write(message).await?;
        self.write("\n").await
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .map_err(Error::Console)?;
        self.writer.flush().await.map_err(Error::Console)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
