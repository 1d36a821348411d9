use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::io::{AsyncRead, Cursor};

/// Reads at most `per_read` bytes per call from the inner reader.
///
/// Useful for simulating a network connection that delivers a message in
/// arbitrarily small pieces.
#[pin_project::pin_project]
#[derive(Debug)]
pub struct Trickle<R> {
    #[pin]
    inner: R,
    per_read: usize,
}

impl<R> Trickle<R> {
    pub fn new(inner: R, per_read: usize) -> Self {
        Self { inner, per_read }
    }
}

impl Trickle<Cursor<Vec<u8>>> {
    #[allow(dead_code)]
    pub fn chunks(data: &str, per_read: usize) -> Self {
        Self::new(Cursor::new(data.as_bytes().to_vec()), per_read)
    }
}

impl<R: AsyncRead> AsyncRead for Trickle<R> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.project();
        let len = buf.len().min(*this.per_read);
        this.inner.poll_read(cx, &mut buf[..len])
    }
}

/// Fails every read with the given message.
#[derive(Debug)]
pub struct ErrorReader(pub &'static str);

impl AsyncRead for ErrorReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Err(io::Error::new(io::ErrorKind::Other, self.0)))
    }
}

/// Yields its prefix, then never produces another byte.
#[derive(Debug)]
pub struct Stalled {
    prefix: Cursor<Vec<u8>>,
}

impl Stalled {
    #[allow(dead_code)]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: Cursor::new(prefix.as_bytes().to_vec()),
        }
    }
}

impl AsyncRead for Stalled {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        match Pin::new(&mut self.prefix).poll_read(cx, buf) {
            Poll::Ready(Ok(0)) => Poll::Pending,
            other => other,
        }
    }
}

/// Fails the first read with `Interrupted`, then reads from `inner`.
#[derive(Debug)]
pub struct InterruptOnce<R> {
    inner: R,
    interrupted: bool,
}

impl<R> InterruptOnce<R> {
    #[allow(dead_code)]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            interrupted: false,
        }
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for InterruptOnce<R> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        if !self.interrupted {
            self.interrupted = true;
            return Poll::Ready(Err(io::ErrorKind::Interrupted.into()));
        }
        Pin::new(&mut self.inner).poll_read(cx, buf)
    }
}
