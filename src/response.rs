//! System-produced event argument responses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::span::format_span_set;
use crate::{AlignError, Span};

/// Whether an event is asserted to have actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Realis {
    Actual,
    Generic,
    Other,
}

impl FromStr for Realis {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Actual" => Ok(Realis::Actual),
            "Generic" => Ok(Realis::Generic),
            "Other" => Ok(Realis::Other),
            _ => Err(AlignError::UnknownRealis {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Realis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Realis::Actual => "Actual",
            Realis::Generic => "Generic",
            Realis::Other => "Other",
        };
        f.write_str(s)
    }
}

/// A string together with the document span it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KbpString {
    pub text: String,
    pub span: Span,
}

impl KbpString {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// An extracted event argument.
///
/// Responses are immutable once built; use [`ResponseBuilder`] to assemble one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Response {
    doc_id: String,
    event_type: String,
    role: String,
    canonical_argument: KbpString,
    base_filler: Span,
    #[serde(default)]
    argument_justifications: Vec<Span>,
    #[serde(default)]
    predicate_justifications: Vec<Span>,
    realis: Realis,
}

impl Response {
    /// Start building a response for the given document, event type and role.
    ///
    /// The base filler defaults to the canonical argument span and realis
    /// defaults to `Actual`.
    pub fn builder(
        doc_id: impl Into<String>,
        event_type: impl Into<String>,
        role: impl Into<String>,
        canonical_argument: KbpString,
    ) -> ResponseBuilder {
        let base_filler = canonical_argument.span.clone();
        ResponseBuilder {
            response: Response {
                doc_id: doc_id.into(),
                event_type: event_type.into(),
                role: role.into(),
                canonical_argument,
                base_filler,
                argument_justifications: Vec::new(),
                predicate_justifications: Vec::new(),
                realis: Realis::Actual,
            },
        }
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Role in the response vocabulary.
    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn canonical_argument(&self) -> &KbpString {
        &self.canonical_argument
    }

    pub fn base_filler(&self) -> &Span {
        &self.base_filler
    }

    pub fn argument_justifications(&self) -> &[Span] {
        &self.argument_justifications
    }

    pub fn predicate_justifications(&self) -> &[Span] {
        &self.predicate_justifications
    }

    pub fn realis(&self) -> Realis {
        self.realis
    }

    /// Stable identifier used to attribute diagnostics.
    ///
    /// Justification spans are left out: two responses differing only in
    /// justifications compete for the same gold argument.
    pub fn unique_id(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}",
            self.doc_id,
            self.event_type,
            self.role,
            self.canonical_argument.span,
            self.base_filler,
            self.realis
        )
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:?}@{} bf={} aj={} pj={} {}",
            self.doc_id,
            self.event_type,
            self.role,
            self.canonical_argument.text,
            self.canonical_argument.span,
            self.base_filler,
            format_span_set(&self.argument_justifications),
            format_span_set(&self.predicate_justifications),
            self.realis
        )
    }
}

/// Builder for [`Response`].
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn base_filler(mut self, span: Span) -> Self {
        self.response.base_filler = span;
        self
    }

    pub fn argument_justifications(mut self, spans: Vec<Span>) -> Self {
        self.response.argument_justifications = spans;
        self
    }

    pub fn predicate_justifications(mut self, spans: Vec<Span>) -> Self {
        self.response.predicate_justifications = spans;
        self
    }

    pub fn realis(mut self, realis: Realis) -> Self {
        self.response.realis = realis;
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}
