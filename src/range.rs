//! Single byte-range resolution for `Range: bytes=<start>-[<end>]`.
//!
//! Only the open-ended and closed forms are accepted. Suffix ranges
//! (`bytes=-500`) and multi-range lists are rejected as invalid rather than
//! partially honored.

/// Why a `Range` header could not be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Not of the form `bytes=<digits>-[<digits>]`.
    #[error("malformed or unsupported range")]
    Invalid,
    /// Well-formed, but no byte of the range lies inside the file.
    #[error("range not satisfiable")]
    NotSatisfiable,
}

/// Parsed but unvalidated client intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRequest {
    pub start: Option<u64>,
    pub end: Option<u64>,
}

/// A byte interval `[start, end]` (inclusive) inside a file of `total` bytes.
///
/// Invariant: `start <= end < total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

impl RangeRequest {
    pub fn parse(header: &str) -> Result<Self, RangeError> {
        let (unit, spec) = header.trim().split_once('=').ok_or(RangeError::Invalid)?;
        if !unit.trim().eq_ignore_ascii_case("bytes") {
            return Err(RangeError::Invalid);
        }
        if spec.contains(',') {
            return Err(RangeError::Invalid);
        }

        let (start, end) = spec.split_once('-').ok_or(RangeError::Invalid)?;
        Ok(RangeRequest {
            start: parse_position(start)?,
            end: parse_position(end)?,
        })
    }

    /// Validate against a file of `total` bytes.
    pub fn resolve(self, total: u64) -> Result<ResolvedRange, RangeError> {
        let start = self.start.ok_or(RangeError::Invalid)?;
        if total == 0 || start >= total {
            return Err(RangeError::NotSatisfiable);
        }

        let last = total - 1;
        let end = self.end.map_or(last, |end| end.min(last));
        if start > end {
            return Err(RangeError::NotSatisfiable);
        }

        Ok(ResolvedRange { start, end, total })
    }
}

/// Empty is `None`; anything other than plain ASCII digits is invalid.
fn parse_position(raw: &str) -> Result<Option<u64>, RangeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeError::Invalid);
    }
    raw.parse().map(Some).map_err(|_| RangeError::Invalid)
}

/// Parse and validate a `Range` header value in one step.
pub fn resolve(header: &str, total: u64) -> Result<ResolvedRange, RangeError> {
    RangeRequest::parse(header)?.resolve(total)
}

impl ResolvedRange {
    /// Number of bytes in the interval.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Always false; a resolved range holds at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `Content-Range` value for a 206 response.
    pub fn content_range(&self) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, self.total)
    }
}

/// `Content-Range` value for a 416 response.
pub fn unsatisfied_content_range(total: u64) -> String {
    format!("bytes */{}", total)
}
