//! Internal utilities.

use std::io::{self, Read};

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{Error, Result};

fn unexpected_eof(filled: usize, wanted: usize) -> io::Error {
    io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("source ended after {} of {} bytes", filled, wanted),
    )
}

/// Fill `buf` completely from `reader`.
///
/// A single `read` may return fewer bytes than asked for, so this loops
/// until the buffer is full. `Interrupted` is retried. End of input or any
/// other I/O error yields [`Error::Io`] carrying the number of bytes that
/// were read before the failure.
pub(crate) fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => return Err(Error::io(filled, unexpected_eof(filled, buf.len()))),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::io(filled, e)),
        }
    }

    Ok(())
}

/// Async counterpart of [`read_full`].
pub(crate) async fn read_full_async<R: AsyncRead + Unpin + ?Sized>(
    reader: &mut R,
    buf: &mut [u8],
) -> Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]).await {
            Ok(0) => return Err(Error::io(filled, unexpected_eof(filled, buf.len()))),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::io(filled, e)),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out at most `chunk` bytes per call and interrupts every other call.
    struct Trickle<'a> {
        data: &'a [u8],
        chunk: usize,
        interrupt: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::ErrorKind::Interrupted.into());
            }
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    struct Broken {
        remaining: usize,
    }

    impl Read for Broken {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            let n = self.remaining.min(buf.len());
            buf[..n].fill(0x01);
            self.remaining -= n;
            Ok(n)
        }
    }

    #[test]
    fn test_read_full_loops_over_short_reads() {
        let data = [1, 2, 3, 4, 5, 6, 7];
        let mut source = Trickle {
            data: &data,
            chunk: 2,
            interrupt: false,
        };
        let mut buf = [0u8; 7];
        read_full(&mut source, &mut buf).unwrap();
        assert_eq!(buf, data);
    }

    #[test]
    fn test_read_full_reports_count_on_eof() {
        let mut source: &[u8] = &[1, 2, 3];
        let mut buf = [0u8; 5];
        match read_full(&mut source, &mut buf) {
            Err(Error::Io { consumed, source }) => {
                assert_eq!(consumed, 3);
                assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_full_reports_count_on_error() {
        let mut source = Broken { remaining: 4 };
        let mut buf = [0u8; 8];
        match read_full(&mut source, &mut buf) {
            Err(Error::Io { consumed, source }) => {
                assert_eq!(consumed, 4);
                assert_eq!(source.kind(), io::ErrorKind::ConnectionReset);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_full_empty_buffer() {
        let mut source: &[u8] = &[];
        read_full(&mut source, &mut []).unwrap();
    }

    #[tokio::test]
    async fn test_read_full_async_across_chunks() {
        let data = [1u8, 2, 3, 4, 5];
        let mut source = AsyncReadExt::chain(&data[..2], &data[2..]);
        let mut buf = [0u8; 5];
        read_full_async(&mut source, &mut buf).await.unwrap();
        assert_eq!(buf, data);
    }

    #[tokio::test]
    async fn test_read_full_async_reports_count_on_eof() {
        let mut source: &[u8] = &[9, 9];
        let mut buf = [0u8; 4];
        let err = read_full_async(&mut source, &mut buf).await.unwrap_err();
        assert_eq!(err.consumed(), Some(2));
    }
}
