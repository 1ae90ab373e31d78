//! Bracketed tree notation.
//!
//! Trees are written Penn-style, with `*` after a label marking the head
//! child of its parent:
//!
//! ```text
//! (S (NP* (DT the) (JJ old) (NN* man)) (VP (VBD* died)))
//! ```
//!
//! Leaves carry only their word; offsets are found by searching the
//! document text left to right.

use kbp_align::Span;

use crate::parse::{ParseNode, Token};
use crate::{DocumentError, DocumentResult};

/// Parse one bracketed tree, locating its words in `text` starting at
/// character offset `from`.
///
/// Returns the root and the character offset just past the last word.
pub fn parse_bracketed(
    tree: &str,
    text: &str,
    from: usize,
) -> DocumentResult<(ParseNode, usize)> {
    let chars: Vec<char> = text.chars().collect();
    parse_tree(tree, &chars, from)
}

pub(crate) fn parse_tree(
    tree: &str,
    text: &[char],
    from: usize,
) -> DocumentResult<(ParseNode, usize)> {
    let mut parser = TreeParser {
        lexemes: lex(tree),
        pos: 0,
        text,
        cursor: from,
    };
    let (root, _) = parser.node()?;
    if let Some(extra) = parser.lexemes.get(parser.pos) {
        return Err(DocumentError::Tree {
            position: extra.position,
            message: "unexpected input after tree".to_string(),
        });
    }
    Ok((root, parser.cursor))
}

#[derive(Debug, Clone, PartialEq)]
enum Lex {
    Open,
    Close,
    Atom(String),
}

#[derive(Debug, Clone)]
struct Lexeme {
    lex: Lex,
    position: usize,
}

fn lex(tree: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    let mut atom = String::new();
    let mut atom_start = 0;

    for (pos, ch) in tree.char_indices() {
        if ch == '(' || ch == ')' || ch.is_whitespace() {
            if !atom.is_empty() {
                lexemes.push(Lexeme {
                    lex: Lex::Atom(std::mem::take(&mut atom)),
                    position: atom_start,
                });
            }
            match ch {
                '(' => lexemes.push(Lexeme {
                    lex: Lex::Open,
                    position: pos,
                }),
                ')' => lexemes.push(Lexeme {
                    lex: Lex::Close,
                    position: pos,
                }),
                _ => {}
            }
        } else {
            if atom.is_empty() {
                atom_start = pos;
            }
            atom.push(ch);
        }
    }
    if !atom.is_empty() {
        lexemes.push(Lexeme {
            lex: Lex::Atom(atom),
            position: atom_start,
        });
    }
    lexemes
}

struct TreeParser<'t> {
    lexemes: Vec<Lexeme>,
    pos: usize,
    text: &'t [char],
    cursor: usize,
}

impl TreeParser<'_> {
    fn error(&self, message: impl Into<String>) -> DocumentError {
        let position = self
            .lexemes
            .get(self.pos)
            .or_else(|| self.lexemes.last())
            .map_or(0, |l| l.position);
        DocumentError::Tree {
            position,
            message: message.into(),
        }
    }

    fn next(&mut self) -> Option<Lex> {
        let lex = self.lexemes.get(self.pos).map(|l| l.lex.clone());
        self.pos += 1;
        lex
    }

    fn peek(&self) -> Option<&Lex> {
        self.lexemes.get(self.pos).map(|l| &l.lex)
    }

    /// Parse `(LABEL ...)`, returning the node and whether it is marked as head.
    fn node(&mut self) -> DocumentResult<(ParseNode, bool)> {
        if self.peek() != Some(&Lex::Open) {
            return Err(self.error("expected '('"));
        }
        self.pos += 1;

        let (label, is_head) = match self.next() {
            Some(Lex::Atom(label)) => match label.strip_suffix('*') {
                Some(stripped) => (stripped.to_string(), true),
                None => (label, false),
            },
            _ => {
                self.pos -= 1;
                return Err(self.error("expected a label"));
            }
        };

        if let Some(Lex::Atom(word)) = self.peek().cloned() {
            self.pos += 1;
            let token = self.locate(&word)?;
            self.close()?;
            return Ok((ParseNode::terminal(label, token), is_head));
        }

        let mut children = Vec::new();
        let mut head_child = None;
        while self.peek() == Some(&Lex::Open) {
            let (child, child_is_head) = self.node()?;
            if child_is_head {
                if head_child.is_some() {
                    return Err(self.error(format!("{} has more than one head", label)));
                }
                head_child = Some(children.len());
            }
            children.push(child);
        }
        self.close()?;
        Ok((ParseNode::phrase(label, children, head_child)?, is_head))
    }

    fn close(&mut self) -> DocumentResult<()> {
        match self.peek() {
            Some(Lex::Close) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.error("expected ')'")),
        }
    }

    fn locate(&mut self, word: &str) -> DocumentResult<Token> {
        let needle: Vec<char> = word.chars().collect();
        let found = (self.cursor..=self.text.len().saturating_sub(needle.len()))
            .find(|&i| self.text[i..].starts_with(&needle));
        match found {
            Some(start) => {
                let end = start + needle.len() - 1;
                self.cursor = end + 1;
                Ok(Token {
                    text: word.to_string(),
                    span: Span::new(start, end)?,
                })
            }
            None => Err(DocumentError::TokenNotFound {
                token: word.to_string(),
                from: self.cursor,
            }),
        }
    }
}
