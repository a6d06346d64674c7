//! The read-eval-print loop.

use std::borrow::Cow;
use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::app::Detective;
use crate::command::Command;

/// Read commands from `input` until end of input or `quit`, writing every
/// prompt and response to `out`.
///
/// Lines are decoded lossily, so input that is not valid UTF-8 becomes an
/// unknown command instead of ending the session.
pub async fn run<R, W>(detective: &mut Detective, mut input: R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("Input line was not valid UTF-8");
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        if command == Command::Quit {
            writeln!(out, "Case files closed. Goodbye.")?;
            break;
        }

        match detective.execute(command).await {
            Ok(output) => writeln!(out, "{}\n", output)?,
            Err(e) => writeln!(out, "Error: {}\n", e)?,
        }
    }

    Ok(())
}
