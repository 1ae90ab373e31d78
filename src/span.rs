//! Character offset spans.
//!
//! A [`Span`] is a closed range of character offsets (both ends inclusive),
//! optionally carrying the covered text for debugging. Equality and hashing
//! only look at the offsets, so a span read from a response file compares
//! equal to the same span read from an annotation with different text.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{AlignError, AlignResult};

/// Closed character offset range with optional debug text.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "SpanRepr", into = "SpanRepr")]
pub struct Span {
    start: usize,
    end: usize,
    text: Option<String>,
}

impl Span {
    /// Create a span from inclusive offsets.
    pub fn new(start: usize, end: usize) -> AlignResult<Self> {
        if start > end {
            return Err(AlignError::InvalidSpan { start, end });
        }
        Ok(Self {
            start,
            end,
            text: None,
        })
    }

    /// Create a span from inclusive offsets, remembering the covered text.
    pub fn with_text(start: usize, end: usize, text: impl Into<String>) -> AlignResult<Self> {
        let mut span = Self::new(start, end)?;
        span.text = Some(text.into());
        Ok(span)
    }

    /// First covered offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last covered offset.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Debug text, if tracked. Never used for comparison.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Number of covered offsets, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        (self.end - self.start).saturating_add(1)
    }

    /// Closed spans always cover at least one offset.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns true if `other` lies entirely within this span.
    ///
    /// A span encloses itself.
    pub fn encloses(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Same offsets, without debug text.
    pub fn offsets_only(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
            text: None,
        }
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Span {}

impl Hash for Span {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{}-{} {:?}", self.start, self.end, text),
            None => write!(f, "{}-{}", self.start, self.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for Span {
    type Err = AlignError;

    /// Parse `start-end` with inclusive offsets, e.g. `10-20`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AlignError::MalformedSpan {
            input: s.to_string(),
        };
        let mut parts = s.trim().split('-');
        let (start, end) = match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => (start, end),
            _ => return Err(malformed()),
        };
        let start = start.trim().parse().map_err(|_| malformed())?;
        let end = end.trim().parse().map_err(|_| malformed())?;
        Span::new(start, end)
    }
}

/// Parse a comma-separated span list. `NIL` denotes the empty set.
///
/// Duplicate spans are kept once, in first-seen order.
pub fn parse_span_set(s: &str) -> AlignResult<Vec<Span>> {
    let s = s.trim();
    if s == "NIL" {
        return Ok(Vec::new());
    }

    let mut spans: Vec<Span> = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let span: Span = part.parse()?;
        if !spans.contains(&span) {
            spans.push(span);
        }
    }

    if spans.is_empty() {
        return Err(AlignError::EmptySpanSet);
    }
    Ok(spans)
}

/// Render a span set the way [`parse_span_set`] reads it.
pub fn format_span_set(spans: &[Span]) -> String {
    if spans.is_empty() {
        return "NIL".to_string();
    }
    spans
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Clone, Serialize, Deserialize)]
struct SpanRepr {
    start: usize,
    end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl TryFrom<SpanRepr> for Span {
    type Error = AlignError;

    fn try_from(repr: SpanRepr) -> Result<Self, Self::Error> {
        let mut span = Span::new(repr.start, repr.end)?;
        span.text = repr.text;
        Ok(span)
    }
}

impl From<Span> for SpanRepr {
    fn from(span: Span) -> Self {
        SpanRepr {
            start: span.start,
            end: span.end,
            text: span.text,
        }
    }
}
