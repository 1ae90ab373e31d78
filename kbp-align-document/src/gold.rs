//! Gold event annotation for one document.
//!
//! Annotation is organized as events, each with one or more event mentions,
//! each with its argument mentions. The aligner sees the arguments as a flat
//! [`MentionInventory`] in exactly that nesting order, which is also the
//! tie-break order for ambiguous matches.

use kbp_align::{GoldMention, MentionInventory, RawMention, Span};
use serde::{Deserialize, Serialize};

use crate::DocumentResult;

/// One mention of an event, with its arguments.
///
/// # Type Parameters
/// - `A`: argument type; [`RawMention`] as read, [`GoldMention`] once validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldEventMention<A = GoldMention> {
    pub id: String,
    pub event_type: String,
    #[serde(default)]
    pub trigger: Option<Span>,
    #[serde(default = "Vec::new")]
    pub arguments: Vec<A>,
}

/// A (possibly multiply mentioned) event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldEvent<A = GoldMention> {
    pub id: String,
    #[serde(default = "Vec::new")]
    pub mentions: Vec<GoldEventMention<A>>,
}

/// All gold events of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldDocument<A = GoldMention> {
    pub doc_id: String,
    #[serde(default = "Vec::new")]
    pub events: Vec<GoldEvent<A>>,
}

/// Gold document as read from an annotation file, before mention kinds are checked.
pub type RawGoldDocument = GoldDocument<RawMention>;

impl<A> GoldDocument<A> {
    pub fn new(doc_id: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            events: Vec::new(),
        }
    }

    /// Arguments in event, event-mention, argument order.
    pub fn arguments(&self) -> impl Iterator<Item = &A> {
        self.events
            .iter()
            .flat_map(|e| e.mentions.iter())
            .flat_map(|em| em.arguments.iter())
    }

    pub fn argument_count(&self) -> usize {
        self.arguments().count()
    }
}

impl GoldDocument<GoldMention> {
    /// The ordered mention inventory the aligner runs against.
    pub fn inventory(&self) -> MentionInventory {
        self.arguments().cloned().collect()
    }

    /// Read a document, rejecting any argument of unknown kind.
    pub fn from_ron_string(s: &str) -> DocumentResult<Self> {
        let raw: RawGoldDocument = ron::from_str(s)?;
        Ok(Self::try_from(raw)?)
    }

    /// Write in the same shape [`from_ron_string`](Self::from_ron_string) reads.
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        let raw = self.map_arguments(|m| to_raw(m));
        ron::ser::to_string_pretty(&raw, ron::ser::PrettyConfig::new())
    }
}

impl<A> GoldDocument<A> {
    fn map_arguments<B>(&self, mut f: impl FnMut(&A) -> B) -> GoldDocument<B> {
        GoldDocument {
            doc_id: self.doc_id.clone(),
            events: self
                .events
                .iter()
                .map(|event| GoldEvent {
                    id: event.id.clone(),
                    mentions: event
                        .mentions
                        .iter()
                        .map(|em| GoldEventMention {
                            id: em.id.clone(),
                            event_type: em.event_type.clone(),
                            trigger: em.trigger.clone(),
                            arguments: em.arguments.iter().map(&mut f).collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl TryFrom<RawGoldDocument> for GoldDocument<GoldMention> {
    type Error = kbp_align::AlignError;

    fn try_from(raw: RawGoldDocument) -> Result<Self, Self::Error> {
        let mut events = Vec::with_capacity(raw.events.len());
        for event in raw.events {
            let mut mentions = Vec::with_capacity(event.mentions.len());
            for em in event.mentions {
                let arguments = em
                    .arguments
                    .into_iter()
                    .map(GoldMention::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                mentions.push(GoldEventMention {
                    id: em.id,
                    event_type: em.event_type,
                    trigger: em.trigger,
                    arguments,
                });
            }
            events.push(GoldEvent {
                id: event.id,
                mentions,
            });
        }
        Ok(GoldDocument {
            doc_id: raw.doc_id,
            events,
        })
    }
}

fn to_raw(mention: &GoldMention) -> RawMention {
    match mention {
        GoldMention::Entity(m) => RawMention {
            id: m.id.0.clone(),
            kind: "entity".to_string(),
            entity: Some(m.entity_id.clone()),
            extent: m.extent.clone(),
            head: m.head.clone(),
            role: m.role.clone(),
        },
        GoldMention::Filler(m) => RawMention {
            id: m.id.0.clone(),
            kind: "filler".to_string(),
            entity: None,
            extent: m.extent.clone(),
            head: None,
            role: m.role.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentError;
    use kbp_align::{AlignError, MentionId};

    const DOC: &str = r#"(
        doc_id: "NYT_ENG_001",
        events: [
            (
                id: "ev1",
                mentions: [
                    (
                        id: "em1",
                        event_type: "Conflict.Attack",
                        arguments: [
                            (id: "m1", kind: "entity", entity: Some("ent1"),
                             extent: (start: 0, end: 5), head: Some((start: 0, end: 5)), role: "attacker"),
                            (id: "f1", kind: "filler", extent: (start: 20, end: 28), role: "time"),
                        ],
                    ),
                    (
                        id: "em2",
                        event_type: "Conflict.Attack",
                        arguments: [
                            (id: "m2", kind: "entity", entity: Some("ent1"),
                             extent: (start: 40, end: 43), role: "attacker"),
                        ],
                    ),
                ],
            ),
            (
                id: "ev2",
                mentions: [
                    (
                        id: "em3",
                        event_type: "Life.Die",
                        arguments: [
                            (id: "m3", kind: "entity", extent: (start: 50, end: 60), role: "victim"),
                        ],
                    ),
                ],
            ),
        ],
    )"#;

    #[test]
    fn test_inventory_order() {
        let doc = GoldDocument::from_ron_string(DOC).unwrap();
        let ids: Vec<_> = doc
            .inventory()
            .iter()
            .map(|m| m.id().as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["m1", "f1", "m2", "m3"]);
        assert_eq!(doc.argument_count(), 4);
    }

    #[test]
    fn test_scoring_ids() {
        let inventory = GoldDocument::from_ron_string(DOC).unwrap().inventory();
        let m1 = inventory.get(&MentionId::new("m1")).unwrap();
        let m2 = inventory.get(&MentionId::new("m2")).unwrap();
        assert_eq!(m1.scoring_id(), m2.scoring_id());
    }

    #[test]
    fn test_unknown_kind_aborts_loading() {
        let bad = DOC.replace(r#"kind: "filler""#, r#"kind: "relation""#);
        match GoldDocument::from_ron_string(&bad) {
            Err(DocumentError::Align(AlignError::UnknownMentionKind { mention, kind })) => {
                assert_eq!(mention, "f1");
                assert_eq!(kind, "relation");
            }
            other => panic!("expected unknown mention kind, got {:?}", other),
        }
    }

    #[test]
    fn test_ron_round_trip() {
        let doc = GoldDocument::from_ron_string(DOC).unwrap();
        let ron = doc.to_ron_string().unwrap();
        assert_eq!(GoldDocument::from_ron_string(&ron).unwrap(), doc);
    }
}
