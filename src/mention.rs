//! Gold-standard mentions and the per-document mention inventory.
//!
//! Gold arguments come in exactly two kinds, modeled as the closed
//! [`GoldMention`] sum type. Untyped collaborator data enters through
//! [`RawMention`], and a kind outside the two known ones is reported as
//! [`AlignError::UnknownMentionKind`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AlignError, AlignResult, Span};

/// Identifier of a single gold mention.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MentionId(pub String);

impl MentionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MentionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The unit a matched response is scored against.
///
/// Coreferent entity mentions share a scoring id; each filler is its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScoringId(pub String);

impl fmt::Display for ScoringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An argument filled by a mention of an annotated entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMention {
    pub id: MentionId,
    /// Coreference cluster this mention belongs to.
    pub entity_id: String,
    pub extent: Span,
    #[serde(default)]
    pub head: Option<Span>,
    /// Role in the gold ontology's vocabulary.
    pub role: String,
}

/// An argument filled by a non-entity filler (times, values, crimes...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillerMention {
    pub id: MentionId,
    pub extent: Span,
    pub role: String,
}

/// A gold argument mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoldMention {
    Entity(EntityMention),
    Filler(FillerMention),
}

impl GoldMention {
    pub fn id(&self) -> &MentionId {
        match self {
            GoldMention::Entity(m) => &m.id,
            GoldMention::Filler(m) => &m.id,
        }
    }

    pub fn role(&self) -> &str {
        match self {
            GoldMention::Entity(m) => &m.role,
            GoldMention::Filler(m) => &m.role,
        }
    }

    pub fn extent(&self) -> &Span {
        match self {
            GoldMention::Entity(m) => &m.extent,
            GoldMention::Filler(m) => &m.extent,
        }
    }

    /// Annotated head, if any. Fillers never carry one.
    pub fn head(&self) -> Option<&Span> {
        match self {
            GoldMention::Entity(m) => m.head.as_ref(),
            GoldMention::Filler(_) => None,
        }
    }

    pub fn scoring_id(&self) -> ScoringId {
        match self {
            GoldMention::Entity(m) => ScoringId(m.entity_id.clone()),
            GoldMention::Filler(m) => ScoringId(m.id.0.clone()),
        }
    }
}

/// Untyped mention record as supplied by annotation readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMention {
    pub id: String,
    /// `entity` or `filler`.
    pub kind: String,
    /// Coreference cluster, required for entity mentions.
    #[serde(default)]
    pub entity: Option<String>,
    pub extent: Span,
    #[serde(default)]
    pub head: Option<Span>,
    pub role: String,
}

impl TryFrom<RawMention> for GoldMention {
    type Error = AlignError;

    fn try_from(raw: RawMention) -> AlignResult<Self> {
        match raw.kind.as_str() {
            "entity" => Ok(GoldMention::Entity(EntityMention {
                // A mention without a cluster is its own singleton entity.
                entity_id: raw.entity.unwrap_or_else(|| raw.id.clone()),
                id: MentionId(raw.id),
                extent: raw.extent,
                head: raw.head,
                role: raw.role,
            })),
            "filler" => Ok(GoldMention::Filler(FillerMention {
                id: MentionId(raw.id),
                extent: raw.extent,
                role: raw.role,
            })),
            _ => Err(AlignError::UnknownMentionKind {
                mention: raw.id,
                kind: raw.kind,
            }),
        }
    }
}

/// Ordered gold mentions for one document.
///
/// Iteration order is the order mentions were supplied in, and it is the
/// tie-break when several mentions match equally well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionInventory {
    mentions: Vec<GoldMention>,
}

impl MentionInventory {
    pub fn new(mentions: Vec<GoldMention>) -> Self {
        Self { mentions }
    }

    /// Convert untyped records, stopping at the first unknown kind.
    pub fn try_from_raw(raw: impl IntoIterator<Item = RawMention>) -> AlignResult<Self> {
        let mentions = raw
            .into_iter()
            .map(GoldMention::try_from)
            .collect::<AlignResult<Vec<_>>>()?;
        Ok(Self { mentions })
    }

    pub fn iter(&self) -> impl Iterator<Item = &GoldMention> {
        self.mentions.iter()
    }

    pub fn get(&self, id: &MentionId) -> Option<&GoldMention> {
        self.mentions.iter().find(|m| m.id() == id)
    }

    pub fn len(&self) -> usize {
        self.mentions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }
}

impl FromIterator<GoldMention> for MentionInventory {
    fn from_iter<I: IntoIterator<Item = GoldMention>>(iter: I) -> Self {
        Self {
            mentions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, kind: &str) -> RawMention {
        RawMention {
            id: id.to_string(),
            kind: kind.to_string(),
            entity: None,
            extent: Span::new(0, 4).unwrap(),
            head: Some(Span::new(2, 4).unwrap()),
            role: "Victim".to_string(),
        }
    }

    #[test]
    fn test_raw_entity_without_cluster_is_singleton() {
        let mention = GoldMention::try_from(raw("m1", "entity")).unwrap();
        assert_eq!(mention.scoring_id(), ScoringId("m1".to_string()));
        assert_eq!(mention.head(), Some(&Span::new(2, 4).unwrap()));
    }

    #[test]
    fn test_raw_filler_drops_head() {
        let mention = GoldMention::try_from(raw("f1", "filler")).unwrap();
        assert!(matches!(mention, GoldMention::Filler(_)));
        assert_eq!(mention.head(), None);
        assert_eq!(mention.scoring_id(), ScoringId("f1".to_string()));
    }

    #[test]
    fn test_unknown_kind_is_fatal() {
        let err = MentionInventory::try_from_raw(vec![raw("m1", "entity"), raw("x9", "relation")])
            .unwrap_err();
        assert_eq!(
            err,
            AlignError::UnknownMentionKind {
                mention: "x9".to_string(),
                kind: "relation".to_string(),
            }
        );
    }

    #[test]
    fn test_inventory_preserves_order() {
        let inventory =
            MentionInventory::try_from_raw(vec![raw("b", "entity"), raw("a", "filler")]).unwrap();
        let ids: Vec<_> = inventory.iter().map(|m| m.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(inventory.get(&MentionId::new("a")).is_some());
    }
}
