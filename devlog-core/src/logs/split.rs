use tokio::io::{self, AsyncBufReadExt, AsyncRead, BufReader, Split};

/// Splits a byte stream on `\n`, dropping a trailing `\r`.
///
/// Lines are handed out as raw bytes so invalid UTF-8 can be echoed untouched.
pub struct LineSplitter<R> {
    segments: Split<BufReader<R>>,
}

impl<R: AsyncRead + Unpin> LineSplitter<R> {
    pub fn new(input: R) -> Self {
        Self {
            segments: BufReader::new(input).split(b'\n'),
        }
    }

    /// Cancel safe, so it can sit in a `select!` next to a timer.
    pub async fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let Some(mut line) = self.segments.next_segment().await? else {
            return Ok(None);
        };

        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
