//! Parse the start-line of a request.

use std::fmt;

use crate::token::{self, CRLF, HTTP_VERSION_PREFIX};
use crate::{Error, Result, Status};

/// The first line of a request: `METHOD SP TARGET SP HTTP/VERSION`.
///
/// Only ever constructed fully validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: String,
    target: Vec<u8>,
    http_version: String,
}

impl RequestLine {
    /// The method token, e.g. `GET`.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request target as sent, e.g. `/coffee`. Not necessarily UTF-8.
    pub fn target(&self) -> &[u8] {
        &self.target
    }

    /// The request target as text. `None` if it is not valid UTF-8.
    pub fn target_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.target).ok()
    }

    /// The version number without its `HTTP/` prefix, e.g. `1.1`.
    pub fn http_version(&self) -> &str {
        &self.http_version
    }

    /// Parse a single line, without its CRLF.
    pub fn parse(line: &[u8]) -> Result<Self> {
        let mut fields = token::fields(line);
        let (method, target, version) = match (fields.next(), fields.next(), fields.next()) {
            (Some(method), Some(target), Some(version)) => (method, target, version),
            _ => return Err(Error::MalformedRequestLine),
        };
        if fields.next().is_some() {
            return Err(Error::MalformedRequestLine);
        }

        if !token::is_token(method) {
            return Err(Error::invalid_method(method));
        }

        if !version.starts_with(HTTP_VERSION_PREFIX) {
            return Err(Error::invalid_version(version));
        }
        let number = &version[HTTP_VERSION_PREFIX.len()..];
        if !token::is_version_number(number) {
            return Err(Error::invalid_version(version));
        }

        // Both were checked to be ASCII above.
        let method = std::str::from_utf8(method).map_err(|_| Error::invalid_method(method))?;
        let http_version =
            std::str::from_utf8(number).map_err(|_| Error::invalid_version(version))?;

        Ok(Self {
            method: method.to_owned(),
            target: target.to_vec(),
            http_version: http_version.to_owned(),
        })
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} HTTP/{}",
            self.method,
            String::from_utf8_lossy(&self.target),
            self.http_version
        )
    }
}

/// Try to parse a request line from the front of `data`.
///
/// Returns the number of bytes consumed (line plus CRLF) with the parsed
/// line, or [`Status::Partial`] if no CRLF has arrived yet. Once `data`
/// holds `max` bytes without a CRLF this fails with
/// [`Error::RequestLineTooLarge`].
pub fn try_parse(data: &[u8], max: usize) -> Result<Status<(usize, RequestLine)>> {
    let idx = match token::find_crlf(data) {
        Some(idx) => idx,
        None if data.len() >= max => return Err(Error::RequestLineTooLarge),
        None => return Ok(Status::Partial),
    };

    let line = RequestLine::parse(&data[..idx])?;
    Ok(Status::Complete((idx + CRLF.len(), line)))
}
