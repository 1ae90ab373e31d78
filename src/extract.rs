//! Span extractors for responses and gold mentions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::head::resolve_head;
use crate::{GoldMention, HeadLookup, Response, Span};

/// Which span of a response to align.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSpanKind {
    /// The canonical argument string's span (CAS).
    CanonicalArgument,
    /// The base filler span (BF).
    BaseFiller,
}

impl ResponseSpanKind {
    pub fn extract<'r>(&self, response: &'r Response) -> &'r Span {
        match self {
            ResponseSpanKind::CanonicalArgument => canonical_argument_span(response),
            ResponseSpanKind::BaseFiller => base_filler_span(response),
        }
    }
}

impl fmt::Display for ResponseSpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseSpanKind::CanonicalArgument => f.write_str("cas"),
            ResponseSpanKind::BaseFiller => f.write_str("bf"),
        }
    }
}

/// A response span, optionally narrowed to its syntactic head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseView {
    pub kind: ResponseSpanKind,
    pub headed: bool,
}

impl ResponseView {
    pub fn span(kind: ResponseSpanKind) -> Self {
        Self {
            kind,
            headed: false,
        }
    }

    pub fn head(kind: ResponseSpanKind) -> Self {
        Self { kind, headed: true }
    }

    /// Extract the view's span. Head views fall back to the plain span
    /// when `lookup` has no answer.
    pub fn extract(&self, response: &Response, lookup: Option<&dyn HeadLookup>) -> Span {
        let span = self.kind.extract(response);
        if self.headed {
            resolve_head(span, lookup)
        } else {
            span.clone()
        }
    }
}

impl fmt::Display for ResponseView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.headed {
            write!(f, "{} head", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// Which span of a gold mention to align against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoldSpanKind {
    Extent,
    HeadOrExtent,
}

impl GoldSpanKind {
    pub fn extract<'m>(&self, mention: &'m GoldMention) -> &'m Span {
        match self {
            GoldSpanKind::Extent => extent_span(mention),
            GoldSpanKind::HeadOrExtent => head_or_extent_span(mention),
        }
    }
}

impl fmt::Display for GoldSpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoldSpanKind::Extent => f.write_str("extent"),
            GoldSpanKind::HeadOrExtent => f.write_str("head"),
        }
    }
}

pub fn canonical_argument_span(response: &Response) -> &Span {
    &response.canonical_argument().span
}

pub fn base_filler_span(response: &Response) -> &Span {
    response.base_filler()
}

pub fn extent_span(mention: &GoldMention) -> &Span {
    mention.extent()
}

/// The annotated head, or the extent when the mention has none.
pub fn head_or_extent_span(mention: &GoldMention) -> &Span {
    mention.head().unwrap_or_else(|| mention.extent())
}
