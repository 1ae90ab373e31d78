//! Constituency parses used as a syntactic head oracle.
//!
//! A [`ParsedDocument`] answers [`HeadLookup`] queries the way a parser-backed
//! scorer does: find the first sentence containing the range, find the
//! constituent covering exactly that range, then follow head children down
//! to a terminal. Any missing step means "no head".

use kbp_align::{HeadLookup, Span};
use serde::{Deserialize, Serialize};

use crate::{DocumentError, DocumentResult};

/// A terminal token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub span: Span,
}

/// A node of a constituency tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseNode {
    label: String,
    span: Span,
    #[serde(default)]
    children: Vec<ParseNode>,
    #[serde(default)]
    head_child: Option<usize>,
    #[serde(default)]
    token: Option<Token>,
}

impl ParseNode {
    /// A preterminal covering one token.
    pub fn terminal(label: impl Into<String>, token: Token) -> Self {
        Self {
            label: label.into(),
            span: token.span.clone(),
            children: Vec::new(),
            head_child: None,
            token: Some(token),
        }
    }

    /// A phrase over `children`, spanning from the first child's start to
    /// the last child's end.
    pub fn phrase(
        label: impl Into<String>,
        children: Vec<ParseNode>,
        head_child: Option<usize>,
    ) -> DocumentResult<Self> {
        let label = label.into();
        let (first, last) = match (children.first(), children.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(DocumentError::Constituent {
                    label,
                    message: "no children".to_string(),
                })
            }
        };
        if let Some(head) = head_child {
            if head >= children.len() {
                return Err(DocumentError::Constituent {
                    label,
                    message: format!("head child {} of {}", head, children.len()),
                });
            }
        }

        let span = Span::new(first.span.start(), last.span.end())?;
        Ok(Self {
            label,
            span,
            children,
            head_child,
            token: None,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.token.is_some()
    }

    /// The head child. Unary nodes head their only child.
    pub fn head(&self) -> Option<&ParseNode> {
        match (self.head_child, self.children.len()) {
            (Some(idx), _) => self.children.get(idx),
            (None, 1) => self.children.first(),
            _ => None,
        }
    }

    /// Follow head children down to a terminal.
    pub fn terminal_head(&self) -> Option<&ParseNode> {
        let mut node = self;
        while !node.is_terminal() {
            node = node.head()?;
        }
        Some(node)
    }

    /// The outermost node whose span equals `span` exactly.
    pub fn node_for_offsets(&self, span: &Span) -> Option<&ParseNode> {
        if &self.span == span {
            return Some(self);
        }
        if !self.span.encloses(span) {
            return None;
        }
        self.children
            .iter()
            .find_map(|child| child.node_for_offsets(span))
    }

    /// Terminals in document order.
    pub fn tokens(&self) -> Vec<&Token> {
        match &self.token {
            Some(token) => vec![token],
            None => self.children.iter().flat_map(|c| c.tokens()).collect(),
        }
    }
}

/// One parsed sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSentence {
    pub root: ParseNode,
}

impl ParsedSentence {
    pub fn new(root: ParseNode) -> Self {
        Self { root }
    }

    pub fn span(&self) -> &Span {
        self.root.span()
    }
}

/// Parser output for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub doc_id: String,
    pub sentences: Vec<ParsedSentence>,
}

impl ParsedDocument {
    pub fn new(doc_id: impl Into<String>, sentences: Vec<ParsedSentence>) -> Self {
        Self {
            doc_id: doc_id.into(),
            sentences,
        }
    }

    /// Build from bracketed trees, one per sentence, whose tokens are
    /// located in `text` left to right.
    ///
    /// See [`parse_bracketed`](crate::parse_bracketed) for the notation.
    pub fn from_bracketed(
        doc_id: impl Into<String>,
        text: &str,
        trees: &[&str],
    ) -> DocumentResult<Self> {
        let chars: Vec<char> = text.chars().collect();
        let mut cursor = 0;
        let mut sentences = Vec::with_capacity(trees.len());
        for tree in trees {
            let (root, next) = crate::bracket::parse_tree(tree, &chars, cursor)?;
            cursor = next;
            sentences.push(ParsedSentence::new(root));
        }
        Ok(Self::new(doc_id, sentences))
    }

    /// The first sentence whose span contains `span`.
    pub fn first_sentence_containing(&self, span: &Span) -> Option<&ParsedSentence> {
        self.sentences.iter().find(|s| s.span().encloses(span))
    }

    /// Serialize to a RON string.
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())
    }

    /// Deserialize from a RON string.
    pub fn from_ron_string(s: &str) -> DocumentResult<Self> {
        Ok(ron::from_str(s)?)
    }
}

impl HeadLookup for ParsedDocument {
    fn head_of(&self, span: &Span) -> Option<Span> {
        let node = self
            .first_sentence_containing(span)?
            .root
            .node_for_offsets(span)?;
        let token = node.terminal_head()?.token()?;
        Span::with_text(token.span.start(), token.span.end(), token.text.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, start: usize) -> ParseNode {
        let end = start + text.chars().count() - 1;
        ParseNode::terminal(
            "X",
            Token {
                text: text.to_string(),
                span: Span::new(start, end).unwrap(),
            },
        )
    }

    /// "the old man died": (S (NP the old man*) (VP died*)) with S headed by VP.
    fn sample() -> ParsedDocument {
        let np = ParseNode::phrase(
            "NP",
            vec![token("the", 0), token("old", 4), token("man", 8)],
            Some(2),
        )
        .unwrap();
        let vp = ParseNode::phrase("VP", vec![token("died", 12)], None).unwrap();
        let s = ParseNode::phrase("S", vec![np, vp], Some(1)).unwrap();
        ParsedDocument::new("doc", vec![ParsedSentence::new(s)])
    }

    #[test]
    fn test_phrase_spans() {
        let doc = sample();
        assert_eq!(doc.sentences[0].span(), &Span::new(0, 15).unwrap());
        assert_eq!(doc.sentences[0].root.tokens().len(), 4);
    }

    #[test]
    fn test_head_of_noun_phrase() {
        let head = sample().head_of(&Span::new(0, 10).unwrap()).unwrap();
        assert_eq!(head, Span::new(8, 10).unwrap());
        assert_eq!(head.text(), Some("man"));
    }

    #[test]
    fn test_unary_phrase_heads_only_child() {
        let head = sample().head_of(&Span::new(0, 15).unwrap()).unwrap();
        assert_eq!(head.text(), Some("died"));
    }

    #[test]
    fn test_no_exact_constituent() {
        assert_eq!(sample().head_of(&Span::new(4, 10).unwrap()), None);
    }

    #[test]
    fn test_outside_every_sentence() {
        assert_eq!(sample().head_of(&Span::new(40, 45).unwrap()), None);
    }

    #[test]
    fn test_headless_phrase() {
        let np = ParseNode::phrase("NP", vec![token("red", 0), token("car", 4)], None).unwrap();
        let doc = ParsedDocument::new("doc", vec![ParsedSentence::new(np)]);
        assert_eq!(doc.head_of(&Span::new(0, 6).unwrap()), None);
        // Single tokens are their own heads.
        assert_eq!(
            doc.head_of(&Span::new(4, 6).unwrap()),
            Some(Span::new(4, 6).unwrap())
        );
    }

    #[test]
    fn test_invalid_phrases() {
        assert!(ParseNode::phrase("NP", vec![], None).is_err());
        assert!(ParseNode::phrase("NP", vec![token("a", 0)], Some(1)).is_err());
    }

    #[test]
    fn test_ron_round_trip() {
        let doc = sample();
        let ron = doc.to_ron_string().unwrap();
        let back = ParsedDocument::from_ron_string(&ron).unwrap();
        assert_eq!(back, doc);
        let head = back.head_of(&Span::new(0, 10).unwrap()).unwrap();
        assert_eq!(head.text(), Some("man"));
    }
}
