//! Alignment fixture format.
//!
//! A fixture is a TOML file describing one document: its gold events, an
//! optional parse, an optional role table, and the responses to align with
//! the outcome each one should get.
//!
//! ```toml
//! title = "Exact extent beats containment"
//!
//! [document]
//! id = "doc1"
//!
//! [[events]]
//! id = "ev1"
//!
//! [[events.mentions]]
//! id = "em1"
//! event_type = "Personnel.Elect"
//!
//! [[events.mentions.arguments]]
//! id = "A"
//! kind = "entity"
//! entity = "E1"
//! extent = "10-20"
//! head = "10-12"
//! role = "Agent"
//!
//! [[responses]]
//! id = "r1"
//! event_type = "Personnel.Elect"
//! role = "Agent"
//! cas = "10-20"
//! expect = "A"
//! strategy = 0
//! ```
//!
//! Spans are written `start-end` with inclusive offsets.

use kbp_align::{
    parse_span_set, AlignerConfig, IdentityRoles, KbpString, MentionId, RawMention, Realis,
    Response, RoleMap, RoleTable, Span,
};
use kbp_align_document::{
    AnnotatedDocument, GoldDocument, GoldEvent, GoldEventMention, ParsedDocument,
    RawGoldDocument,
};
use serde::Deserialize;

use crate::{SpecError, SpecResult};

/// A parsed fixture file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlignmentFixture {
    #[serde(default)]
    pub title: Option<String>,
    pub document: FixtureDocument,
    #[serde(default)]
    pub config: AlignerConfig,
    /// Gold-to-response role table. Identity when absent.
    #[serde(default)]
    pub roles: Option<RoleTable>,
    #[serde(default)]
    pub events: Vec<FixtureEvent>,
    #[serde(default)]
    pub responses: Vec<FixtureResponse>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureDocument {
    pub id: String,
    #[serde(default)]
    pub text: String,
    /// Bracketed parse trees, one per sentence, over `text`.
    #[serde(default)]
    pub trees: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureEvent {
    pub id: String,
    #[serde(default)]
    pub mentions: Vec<FixtureEventMention>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureEventMention {
    pub id: String,
    pub event_type: String,
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub arguments: Vec<FixtureArgument>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureArgument {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub entity: Option<String>,
    pub extent: String,
    #[serde(default)]
    pub head: Option<String>,
    pub role: String,
}

/// A response to align and the outcome it should get.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureResponse {
    pub id: String,
    pub event_type: String,
    pub role: String,
    pub cas: String,
    #[serde(default)]
    pub cas_text: String,
    #[serde(default)]
    pub base_filler: Option<String>,
    /// Comma-separated spans or `NIL`.
    #[serde(default)]
    pub justifications: Option<String>,
    #[serde(default)]
    pub realis: Option<String>,
    /// A gold mention id, or `unmatched`.
    pub expect: String,
    /// Expected 0-based strategy index.
    #[serde(default)]
    pub strategy: Option<usize>,
    /// Expected ambiguous candidates in inventory order. `[]` asserts no ambiguity.
    #[serde(default)]
    pub ambiguous: Option<Vec<String>>,
}

/// What a response should align to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    Mention(MentionId),
    Unmatched,
}

/// Parse fixture TOML.
pub fn parse_fixture(content: &str) -> SpecResult<AlignmentFixture> {
    toml::from_str(content).map_err(|e| {
        let line = e
            .span()
            .map_or(0, |span| content[..span.start].matches('\n').count() + 1);
        SpecError::Parse {
            line,
            message: e.message().to_string(),
        }
    })
}

impl AlignmentFixture {
    /// Gold events as validated mentions. Any unknown argument kind fails the fixture.
    pub fn gold_document(&self) -> SpecResult<GoldDocument> {
        let mut raw = RawGoldDocument::new(self.document.id.clone());
        for event in &self.events {
            let mut mentions: Vec<GoldEventMention<RawMention>> =
                Vec::with_capacity(event.mentions.len());
            for em in &event.mentions {
                mentions.push(GoldEventMention {
                    id: em.id.clone(),
                    event_type: em.event_type.clone(),
                    trigger: em.trigger.as_deref().map(str::parse).transpose()?,
                    arguments: em
                        .arguments
                        .iter()
                        .map(FixtureArgument::to_raw)
                        .collect::<SpecResult<_>>()?,
                });
            }
            raw.events.push(GoldEvent {
                id: event.id.clone(),
                mentions,
            });
        }
        Ok(GoldDocument::try_from(raw)?)
    }

    /// The parse oracle, when trees are given.
    pub fn parsed_document(&self) -> SpecResult<Option<ParsedDocument>> {
        if self.document.trees.is_empty() {
            return Ok(None);
        }
        let trees: Vec<&str> = self.document.trees.iter().map(String::as_str).collect();
        let parse =
            ParsedDocument::from_bracketed(&self.document.id, &self.document.text, &trees)?;
        Ok(Some(parse))
    }

    pub fn annotated(&self) -> SpecResult<AnnotatedDocument> {
        Ok(AnnotatedDocument::new(
            self.gold_document()?,
            self.parsed_document()?,
        ))
    }

    pub fn role_map(&self) -> &dyn RoleMap {
        match &self.roles {
            Some(table) => table,
            None => &IdentityRoles,
        }
    }

    /// The text covered by `span`, if the fixture carries document text.
    pub fn text_of(&self, span: &Span) -> Option<String> {
        let chars: Vec<char> = self.document.text.chars().collect();
        chars
            .get(span.start()..=span.end())
            .map(|slice| slice.iter().collect())
    }
}

impl FixtureArgument {
    fn to_raw(&self) -> SpecResult<RawMention> {
        Ok(RawMention {
            id: self.id.clone(),
            kind: self.kind.clone(),
            entity: self.entity.clone(),
            extent: self.extent.parse()?,
            head: self.head.as_deref().map(str::parse).transpose()?,
            role: self.role.clone(),
        })
    }
}

impl FixtureResponse {
    pub fn cas_span(&self) -> SpecResult<Span> {
        Ok(self.cas.parse()?)
    }

    pub fn to_response(&self, doc_id: &str) -> SpecResult<Response> {
        let cas = KbpString::new(self.cas_text.clone(), self.cas_span()?);
        let mut builder = Response::builder(doc_id, &self.event_type, &self.role, cas);
        if let Some(bf) = &self.base_filler {
            builder = builder.base_filler(bf.parse()?);
        }
        if let Some(justifications) = &self.justifications {
            builder = builder.argument_justifications(parse_span_set(justifications)?);
        }
        if let Some(realis) = &self.realis {
            builder = builder.realis(realis.parse::<Realis>()?);
        }
        Ok(builder.build())
    }

    pub fn expectation(&self) -> Expectation {
        match self.expect.as_str() {
            "unmatched" => Expectation::Unmatched,
            id => Expectation::Mention(MentionId::new(id)),
        }
    }
}
