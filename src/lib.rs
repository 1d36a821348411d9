//! Incremental HTTP 1.1 request head parser.
//!
//! Bytes may arrive in any chunk size. The parser keeps what it has not
//! consumed yet in a bounded [`ParseBuffer`] and resumes where it left off
//! every time more input shows up.
//!
//! ```txt
//!   bytes -> ParseBuffer -> request line -> header fields -> blank line
//!                 ^               |               |
//!                 +---- consume --+---------------+
//! ```
//!
//! - [`Request`] is the sans-I/O state machine.
//! - [`server`] drives it from any `AsyncRead` source.
//!
//! # Example
//!
//! ```
//! use h1_head::{ParseBuffer, Request};
//!
//! let mut buf = ParseBuffer::new(16, 8192);
//! let mut req = Request::new();
//!
//! buf.append(b"GET /coffee HTTP/1.1\r\nHo")?;
//! req.parse(&mut buf)?;
//! buf.append(b"st: localhost:42069\r\n\r\n")?;
//! req.parse(&mut buf)?;
//!
//! let head = req.into_head().unwrap();
//! assert_eq!(head.request_line.target(), b"/coffee");
//! assert_eq!(head.headers.get_str("Host"), Some("localhost:42069"));
//! # Ok::<(), h1_head::Error>(())
//! ```

#![forbid(unsafe_code, future_incompatible, rust_2018_idioms)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

/// The most bytes buffered while waiting for a line ending.
const MAX_LINE_LENGTH: usize = 8192;

/// Size of the first read buffer.
const INITIAL_CAPACITY: usize = 1024;

mod buffer;
mod error;
mod request;
mod token;

pub mod headers;
pub mod request_line;
pub mod server;

pub use buffer::ParseBuffer;
pub use error::{Error, Result};
pub use headers::{Headers, Progress};
pub use request::{Request, RequestHead, State};
pub use request_line::RequestLine;

/// The result of a parser that may need more input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<T> {
    /// The value was parsed in full.
    Complete(T),
    /// More bytes are needed.
    Partial,
}
