//! Parser for the selector mini-language.
//!
//! ```text
//! list := item ("," item)*
//! item := name ("(" list ")")?
//! ```
//!
//! Whitespace is ignored everywhere. Parsing happens in two passes: a cheap
//! global check that `(` and `)` are balanced, then a single left-to-right
//! scan where each `(` descends one level and each `)` returns to the caller
//! with the offset it stopped at. Empty segments (`a,,b`, trailing commas) are
//! skipped rather than rejected.

use super::{FieldSelector, Selection};
use crate::error::{Error, Result};

/// Deepest parenthesis nesting accepted by [`parse`].
pub const MAX_NESTING: usize = 128;

/// Parses selector text into a [`Selection`].
///
/// # Errors
///
/// - [`Error::ParenthesisMismatch`] if the numbers of `(` and `)` differ.
/// - [`Error::DepthLimitExceeded`] if parentheses nest deeper than [`MAX_NESTING`].
///
/// ```
/// use fieldfilter::{Error, parse};
///
/// let selection = parse("id, account(username, type)").unwrap();
/// assert_eq!(selection[1].children().len(), 2);
///
/// assert!(matches!(parse("id,(name"), Err(Error::ParenthesisMismatch { .. })));
/// ```
pub fn parse(text: &str) -> Result<Selection> {
    let open = text.matches('(').count();
    let close = text.matches(')').count();
    if open != close {
        return Err(Error::ParenthesisMismatch { open, close });
    }

    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return Ok(Selection::new());
    }

    let (selectors, _) = Scanner { chars: &chars }.level(0, 0)?;
    Ok(Selection::from(selectors))
}

struct Scanner<'a> {
    chars: &'a [char],
}

impl Scanner<'_> {
    /// Scans one list starting at `offset`.
    ///
    /// Returns the items and the offset of the `)` that closed the list, or the
    /// input length if the input ran out first.
    fn level(&self, offset: usize, depth: usize) -> Result<(Vec<FieldSelector>, usize)> {
        let len = self.chars.len();
        if offset >= len {
            return Err(Error::OffsetOutOfBounds { offset, len });
        }
        if depth > MAX_NESTING {
            return Err(Error::DepthLimitExceeded { limit: MAX_NESTING });
        }

        let mut items = Vec::new();
        let mut name = String::new();
        let mut cursor = offset;
        while cursor < len {
            match self.chars[cursor] {
                ',' => push_leaf(&mut items, &mut name),
                '(' => {
                    // `name(` at the very end of the input has no children.
                    let (children, end) = match self.level(cursor + 1, depth + 1) {
                        Err(Error::OffsetOutOfBounds { .. }) => (Vec::new(), len),
                        other => other?,
                    };
                    // An unnamed group is consumed and dropped.
                    if !name.is_empty() {
                        items.push(FieldSelector::with_children(
                            std::mem::take(&mut name),
                            children,
                        ));
                    }
                    cursor = end;
                }
                ')' => {
                    push_leaf(&mut items, &mut name);
                    return Ok((items, cursor));
                }
                c => name.push(c),
            }
            cursor += 1;
        }

        push_leaf(&mut items, &mut name);
        Ok((items, len))
    }
}

fn push_leaf(items: &mut Vec<FieldSelector>, name: &mut String) {
    if !name.is_empty() {
        items.push(FieldSelector::new(std::mem::take(name)));
    }
}
