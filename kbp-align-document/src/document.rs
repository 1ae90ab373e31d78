//! A gold document paired with its optional parse.

use kbp_align::{HeadLookup, MentionInventory};

use crate::{GoldDocument, ParsedDocument};

/// Everything the aligner needs to know about one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedDocument {
    pub gold: GoldDocument,
    pub parse: Option<ParsedDocument>,
    inventory: MentionInventory,
}

impl AnnotatedDocument {
    pub fn new(gold: GoldDocument, parse: Option<ParsedDocument>) -> Self {
        let inventory = gold.inventory();
        Self {
            gold,
            parse,
            inventory,
        }
    }

    pub fn doc_id(&self) -> &str {
        &self.gold.doc_id
    }

    pub fn inventory(&self) -> &MentionInventory {
        &self.inventory
    }

    /// The parse as a head oracle, if one was supplied.
    pub fn head_lookup(&self) -> Option<&dyn HeadLookup> {
        self.parse.as_ref().map(|p| p as &dyn HeadLookup)
    }
}
