//! Resumable sequencing of the start-line and header parsers.

use log::{debug, trace};

use crate::buffer::ParseBuffer;
use crate::headers::{Headers, Progress};
use crate::request_line::{self, RequestLine};
use crate::{Result, Status};

/// Where a [`Request`] is in the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Waiting for the CRLF ending the request line.
    AwaitingStartLine,
    /// Reading header fields until the blank line.
    AwaitingHeaders,
    /// The head is complete.
    Done,
}

/// A fully parsed request head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    /// The start-line.
    pub request_line: RequestLine,
    /// The header fields.
    pub headers: Headers,
}

/// Sans-I/O request head parser.
///
/// Feed it a [`ParseBuffer`] every time more bytes have arrived; it drains
/// every complete line and leaves partial input in place.
#[derive(Debug)]
pub struct Request {
    request_line: Option<RequestLine>,
    headers: Headers,
    state: State,
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Create a parser awaiting the start-line.
    pub fn new() -> Self {
        Self {
            request_line: None,
            headers: Headers::new(),
            state: State::AwaitingStartLine,
        }
    }

    /// Current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether the blank line ending the head has been consumed.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Consume as many complete lines from `buf` as possible.
    ///
    /// Returns `Ok(())` when done or when more input is needed. Any error
    /// leaves the request unusable.
    pub fn parse(&mut self, buf: &mut ParseBuffer) -> Result<()> {
        let max = buf.max();
        loop {
            match self.state {
                State::AwaitingStartLine => {
                    match request_line::try_parse(buf.as_slice(), max)? {
                        Status::Complete((consumed, line)) => {
                            trace!("request line: {}", line);
                            buf.consume(consumed);
                            self.request_line = Some(line);
                            self.state = State::AwaitingHeaders;
                        }
                        Status::Partial => return Ok(()),
                    }
                }
                State::AwaitingHeaders => {
                    let progress = self.headers.parse_one(buf.as_slice(), max)?;
                    buf.consume(progress.consumed());
                    match progress {
                        Progress::Partial => return Ok(()),
                        Progress::Field(_) => {}
                        Progress::End(_) => {
                            debug!("request head complete, {} headers", self.headers.len());
                            self.state = State::Done;
                        }
                    }
                }
                State::Done => return Ok(()),
            }
        }
    }

    /// The parsed start-line, once past [`State::AwaitingStartLine`].
    pub fn request_line(&self) -> Option<&RequestLine> {
        self.request_line.as_ref()
    }

    /// Header fields parsed so far.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Take the parsed head. `None` unless [`State::Done`].
    pub fn into_head(self) -> Option<RequestHead> {
        match (self.state, self.request_line) {
            (State::Done, Some(request_line)) => Some(RequestHead {
                request_line,
                headers: self.headers,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn feed(req: &mut Request, buf: &mut ParseBuffer, bytes: &[u8]) -> Result<()> {
        buf.append(bytes)?;
        req.parse(buf)
    }

    #[test]
    fn sequences_start_line_then_headers() {
        let mut req = Request::new();
        let mut buf = ParseBuffer::new(16, 8192);
        assert_eq!(req.state(), State::AwaitingStartLine);

        feed(&mut req, &mut buf, b"GET / HTTP/1.1\r\nHo").unwrap();
        assert_eq!(req.state(), State::AwaitingHeaders);
        assert_eq!(req.request_line().unwrap().method(), "GET");
        assert_eq!(buf.as_slice(), b"Ho");

        feed(&mut req, &mut buf, b"st: localhost:42069\r\n").unwrap();
        assert_eq!(req.state(), State::AwaitingHeaders);
        assert_eq!(req.headers().get_str("host"), Some("localhost:42069"));

        feed(&mut req, &mut buf, b"\r\n").unwrap();
        assert!(req.is_done());
        assert!(buf.is_empty());

        let head = req.into_head().unwrap();
        assert_eq!(head.request_line.target(), b"/");
        assert_eq!(head.headers.len(), 1);
    }

    #[test]
    fn drains_every_complete_line_in_one_pass() {
        let mut req = Request::new();
        let mut buf = ParseBuffer::new(1024, 8192);
        feed(
            &mut req,
            &mut buf,
            b"POST /submit HTTP/1.0\r\nA: 1\r\nB: 2\r\n\r\nbody",
        )
        .unwrap();

        assert!(req.is_done());
        assert_eq!(buf.as_slice(), b"body");

        req.parse(&mut buf).unwrap();
        assert_eq!(buf.as_slice(), b"body");
    }

    #[test]
    fn unfinished_head_yields_nothing() {
        let mut req = Request::new();
        let mut buf = ParseBuffer::new(1024, 8192);
        feed(&mut req, &mut buf, b"GET / HTTP/1.1\r\nHost: x\r\n").unwrap();
        assert!(!req.is_done());
        assert!(req.into_head().is_none());
    }

    #[test]
    fn errors_surface_from_either_stage() {
        let mut req = Request::new();
        let mut buf = ParseBuffer::new(1024, 8192);
        let err = feed(&mut req, &mut buf, b"G@T / HTTP/1.1\r\n").unwrap_err();
        assert!(matches!(err, Error::InvalidMethod(_)));

        let mut req = Request::new();
        let mut buf = ParseBuffer::new(1024, 8192);
        let err = feed(&mut req, &mut buf, b"GET / HTTP/1.1\r\nBad Name: x\r\n").unwrap_err();
        assert!(matches!(err, Error::InvalidHeaderName(_)));
    }

    #[test]
    fn non_utf8_target_and_value_pass_through() {
        let mut req = Request::new();
        let mut buf = ParseBuffer::new(1024, 8192);
        feed(
            &mut req,
            &mut buf,
            b"GET /caf\xe9 HTTP/1.1\r\nX-Name: caf\xe9\r\n\r\n",
        )
        .unwrap();

        let head = req.into_head().unwrap();
        assert_eq!(head.request_line.target(), b"/caf\xe9");
        assert_eq!(head.headers.get("x-name"), Some(&b"caf\xe9"[..]));
    }

    #[test]
    fn oversized_header_line() {
        let mut req = Request::new();
        let mut buf = ParseBuffer::new(8, 32);
        feed(&mut req, &mut buf, b"GET / HTTP/1.1\r\n").unwrap();

        let err = feed(&mut req, &mut buf, &[b'x'; 32]).unwrap_err();
        assert!(matches!(err, Error::BufferLimitExceeded));
    }
}
