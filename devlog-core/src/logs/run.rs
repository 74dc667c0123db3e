use crate::conf::FormatConfig;
use crate::logs::formatter::LogFormatter;
use crate::logs::split::LineSplitter;
use anyhow::{Context, Result};
use std::time::Instant;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufWriter};

/// Formats NDJSON from `input` onto `output` until the input ends.
///
/// Only I/O failures end the run early. A write failure on `output`
/// (a closed pipe, say) is returned to the caller.
pub async fn run_logs<R, W>(input: R, output: W, config: &FormatConfig) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut formatter = LogFormatter::new(config);
    let mut lines = LineSplitter::new(input);
    let mut output = BufWriter::new(output);
    let mut rendered = Vec::new();

    loop {
        let deadline = formatter.next_deadline();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read input")? else {
                    break;
                };

                rendered.clear();
                formatter.process_line(&line, clock_now(), &mut rendered);

                if !rendered.is_empty() {
                    output
                        .write_all(&rendered)
                        .await
                        .context("failed to write output")?;
                    output.flush().await.context("failed to write output")?;
                }
            }
            _ = tokio::time::sleep_until(wake_at(deadline)), if deadline.is_some() => {
                formatter.evict_expired(clock_now());
            }
        }
    }

    let unfinished = formatter.tracker().open_groups();
    if unfinished > 0 {
        tracing::debug!(unfinished, "input ended with groups still open");
    }

    output.flush().await.context("failed to write output")?;
    Ok(())
}

// tokio's clock, paused under test
fn clock_now() -> Instant {
    tokio::time::Instant::now().into_std()
}

fn wake_at(deadline: Option<Instant>) -> tokio::time::Instant {
    deadline
        .map(tokio::time::Instant::from_std)
        .unwrap_or_else(tokio::time::Instant::now)
}
