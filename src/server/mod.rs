//! Decode request heads on the server.

use std::time::Duration;

use async_io::Timer;
use futures_lite::io::AsyncRead;
use futures_lite::FutureExt;
use log::debug;

use crate::request::RequestHead;
use crate::{Error, Result, INITIAL_CAPACITY, MAX_LINE_LENGTH};

mod decode;

pub use decode::{decode, decode_with_opts};

/// Configure the server.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Most bytes buffered while waiting for a line ending. Defaults to 8kb.
    pub max_line_length: usize,
    /// Size of the first read buffer, doubled as needed. Defaults to 1kb.
    pub initial_capacity: usize,
    /// Timeout to receive the whole head. Defaults to 60s.
    pub headers_timeout: Option<Duration>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            max_line_length: MAX_LINE_LENGTH,
            initial_capacity: INITIAL_CAPACITY,
            headers_timeout: Some(Duration::from_secs(60)),
        }
    }
}

/// Accept the head of a new incoming HTTP/1.1 request.
pub async fn accept<RW>(io: RW) -> Result<RequestHead>
where
    RW: AsyncRead + Unpin,
{
    accept_with_opts(io, ServerOptions::default()).await
}

/// Accept the head of a new incoming HTTP/1.1 request.
///
/// Fails with [`Error::Timeout`] if the head is not complete within
/// `opts.headers_timeout`.
pub async fn accept_with_opts<RW>(io: RW, opts: ServerOptions) -> Result<RequestHead>
where
    RW: AsyncRead + Unpin,
{
    let fut = decode_with_opts(io, &opts);

    match opts.headers_timeout {
        Some(timeout) => {
            let expired = async {
                Timer::after(timeout).await;
                debug!("no request head after {:?}", timeout);
                Err(Error::Timeout)
            };
            fut.or(expired).await
        }
        None => fut.await,
    }
}
