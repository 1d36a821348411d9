//! Byte-level validators shared by the start-line and header parsers.

pub(crate) const CRLF: &[u8] = b"\r\n";

/// Prefix every version field of a request line starts with.
pub(crate) const HTTP_VERSION_PREFIX: &[u8] = b"HTTP/";

/// Returns true for the `tchar` set of RFC 7230.
pub(crate) fn is_tchar(b: u8) -> bool {
    match b {
        b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' => true,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_'
        | b'`' | b'|' | b'~' => true,
        _ => false,
    }
}

/// A token is one or more `tchar`s.
pub(crate) fn is_token(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().copied().all(is_tchar)
}

/// Offset of the first `\r\n` in `bytes`.
pub(crate) fn find_crlf(bytes: &[u8]) -> Option<usize> {
    bytes.windows(CRLF.len()).position(|w| w == CRLF)
}

/// Version numbers are digits around exactly one dot, for example `1.1`.
///
/// Either side may be empty as long as there is at least one digit.
pub(crate) fn is_version_number(bytes: &[u8]) -> bool {
    let mut dots = 0;
    let mut digits = 0;
    for &b in bytes {
        match b {
            b'.' => dots += 1,
            b'0'..=b'9' => digits += 1,
            _ => return false,
        }
    }
    dots == 1 && digits > 0
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Split on runs of ASCII whitespace, skipping empty fields.
pub(crate) fn fields(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|&b| is_whitespace(b)).filter(|f| !f.is_empty())
}

/// Strip leading and trailing spaces and tabs.
pub(crate) fn trim_ows(mut bytes: &[u8]) -> &[u8] {
    while let [b' ' | b'\t', rest @ ..] = bytes {
        bytes = rest;
    }
    while let [rest @ .., b' ' | b'\t'] = bytes {
        bytes = rest;
    }
    bytes
}
