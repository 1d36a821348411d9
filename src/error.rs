use std::error;
use std::fmt;
use std::io;

/// A specialized `Result` for request head parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors when parsing an incoming request head.
///
/// Every variant is fatal to the parse attempt that produced it.
#[derive(Debug)]
pub enum Error {
    /// The request line does not have exactly three fields.
    MalformedRequestLine,
    /// The method contains bytes outside the token set.
    InvalidMethod(String),
    /// The version is not `HTTP/` followed by a dotted number.
    InvalidHttpVersion(String),
    /// A header line has a missing, empty, or non-token name.
    InvalidHeaderName(String),
    /// The request line grew past the configured limit without a CRLF.
    RequestLineTooLarge,
    /// A header line grew past the configured limit without a CRLF.
    BufferLimitExceeded,
    /// The source closed before the blank line ending the head arrived.
    UnexpectedEndOfStream,
    /// The head did not arrive within the configured timeout.
    Timeout,
    /// Reading from the source failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedRequestLine => write!(f, "invalid request line format"),
            Error::InvalidMethod(method) => write!(f, "invalid method token: {:?}", method),
            Error::InvalidHttpVersion(version) => write!(f, "invalid http version: {:?}", version),
            Error::InvalidHeaderName(name) => write!(f, "invalid header name: {:?}", name),
            Error::RequestLineTooLarge => write!(f, "request line exceeds maximum length"),
            Error::BufferLimitExceeded => write!(f, "header line exceeds maximum length"),
            Error::UnexpectedEndOfStream => write!(f, "unexpected end of stream"),
            Error::Timeout => write!(f, "timed out waiting for the request head"),
            Error::Io(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl Error {
    /// Lossily render offending bytes for an error message.
    pub(crate) fn invalid_method(bytes: &[u8]) -> Self {
        Error::InvalidMethod(String::from_utf8_lossy(bytes).into_owned())
    }

    pub(crate) fn invalid_version(bytes: &[u8]) -> Self {
        Error::InvalidHttpVersion(String::from_utf8_lossy(bytes).into_owned())
    }

    pub(crate) fn invalid_header_name(bytes: &[u8]) -> Self {
        Error::InvalidHeaderName(String::from_utf8_lossy(bytes).into_owned())
    }
}
