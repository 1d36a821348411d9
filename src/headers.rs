//! Header fields of a request head.

use std::collections::hash_map::{self, HashMap};
use std::iter::FusedIterator;

use crate::token::{self, CRLF};
use crate::{Error, Result};

/// Outcome of feeding one line to [`Headers::parse_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// No complete line is buffered yet.
    Partial,
    /// A header field was stored; this many bytes were consumed.
    Field(usize),
    /// The blank line ending the head was found; this many bytes were consumed.
    End(usize),
}

impl Progress {
    /// Bytes the caller should drop from the front of its buffer.
    pub fn consumed(self) -> usize {
        match self {
            Progress::Partial => 0,
            Progress::Field(n) | Progress::End(n) => n,
        }
    }
}

/// Header fields keyed by lower-cased name.
///
/// Names are unique. When a name repeats, the last value wins. Values are
/// kept as the raw bytes sent, which need not be UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    headers: HashMap<String, Vec<u8>>,
}

impl Headers {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    /// Look up a value as text. `None` if absent or not valid UTF-8.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|value| std::str::from_utf8(value).ok())
    }

    /// Whether a field with this name is present, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(&name.to_ascii_lowercase())
    }

    /// Set a field, replacing any previous value for the same name.
    pub fn insert(&mut self, name: &str, value: impl Into<Vec<u8>>) -> Option<Vec<u8>> {
        self.headers.insert(name.to_ascii_lowercase(), value.into())
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Whether no field has been stored.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterate over `(name, value)` pairs in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.headers.iter(),
        }
    }

    /// Parse one CRLF terminated line from the front of `data`.
    ///
    /// An empty line ends the head and stores nothing. Once `data` holds
    /// `max` bytes without a CRLF this fails with
    /// [`Error::BufferLimitExceeded`].
    pub fn parse_one(&mut self, data: &[u8], max: usize) -> Result<Progress> {
        let idx = match token::find_crlf(data) {
            Some(idx) => idx,
            None if data.len() >= max => return Err(Error::BufferLimitExceeded),
            None => return Ok(Progress::Partial),
        };

        if idx == 0 {
            return Ok(Progress::End(CRLF.len()));
        }

        let (name, value) = parse_field(&data[..idx])?;
        self.insert(name, value);
        Ok(Progress::Field(idx + CRLF.len()))
    }
}

fn parse_field(line: &[u8]) -> Result<(&str, &[u8])> {
    let colon = match line.iter().position(|&b| b == b':') {
        Some(colon) if colon > 0 => colon,
        _ => return Err(Error::invalid_header_name(line)),
    };

    let name = &line[..colon];
    if !token::is_token(name) {
        return Err(Error::invalid_header_name(name));
    }
    let name = std::str::from_utf8(name).map_err(|_| Error::invalid_header_name(name))?;

    Ok((name, token::trim_ows(&line[colon + 1..])))
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a [u8]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the fields of [`Headers`].
#[derive(Debug)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, Vec<u8>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}
