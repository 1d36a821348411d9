//! Drive the request parser from an async byte source.

use std::io;

use futures_lite::io::{AsyncRead, AsyncReadExt};
use log::trace;

use crate::buffer::ParseBuffer;
use crate::request::{Request, RequestHead};
use crate::{Error, Result};

use super::ServerOptions;

/// Decode a request head using the default limits.
pub async fn decode<R>(reader: R) -> Result<RequestHead>
where
    R: AsyncRead + Unpin,
{
    decode_with_opts(reader, &ServerOptions::default()).await
}

/// Decode a request head, reading from `reader` until the blank line.
///
/// Reads stop as soon as the head is complete; bytes after it are dropped.
pub async fn decode_with_opts<R>(mut reader: R, opts: &ServerOptions) -> Result<RequestHead>
where
    R: AsyncRead + Unpin,
{
    let mut buf = ParseBuffer::new(opts.initial_capacity, opts.max_line_length);
    let mut request = Request::new();

    while !request.is_done() {
        let spare = buf.spare_mut()?;

        let n = match reader.read(spare).await {
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(Error::Io(err)),
        };

        // No more bytes are yielded from the stream.
        if n == 0 {
            trace!("stream closed in state {:?}", request.state());
            return Err(Error::UnexpectedEndOfStream);
        }

        buf.commit(n);
        request.parse(&mut buf)?;
    }

    // The loop only exits once the parser reached `Done`.
    request.into_head().ok_or(Error::UnexpectedEndOfStream)
}
