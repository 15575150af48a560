// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compound selectors for the in-memory document.
//!
//! Selectors are single-element predicates (no combinators): an optional type
//! or `*`, then any number of `#id`, `.class` and `[attr]` / `[attr="value"]`
//! parts in any order.

use alloc::string::{String, ToString};
use smallvec::SmallVec;

/// Failure to parse a selector.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// Nothing to match.
    #[error("empty selector")]
    Empty,
    /// A character the parser does not understand at this position.
    #[error("unexpected `{found}` at byte {at} in selector")]
    Unexpected {
        /// Offending character.
        found: char,
        /// Byte offset.
        at: usize,
    },
    /// An attribute selector without its closing bracket.
    #[error("unterminated attribute selector")]
    Unterminated,
}

/// An attribute condition: presence, or exact value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AttrMatch {
    pub(crate) name: String,
    pub(crate) value: Option<String>,
}

/// A parsed compound selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Compound {
    pub(crate) tag: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) classes: SmallVec<[String; 2]>,
    pub(crate) attrs: SmallVec<[AttrMatch; 1]>,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl Compound {
    pub(crate) fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }
        let mut out = Self::default();
        let bytes = input.as_bytes();
        let mut pos = 0;

        let ident = |start: usize| -> (String, usize) {
            let end = input[start..]
                .find(|c: char| !is_ident_char(c))
                .map_or(input.len(), |off| start + off);
            (input[start..end].to_string(), end)
        };

        if bytes[0] == b'*' {
            pos = 1;
        } else if is_ident_char(char::from(bytes[0])) {
            let (name, end) = ident(0);
            out.tag = Some(name.to_ascii_lowercase());
            pos = end;
        }

        while pos < input.len() {
            let c = input[pos..].chars().next().unwrap_or_default();
            match c {
                '#' | '.' => {
                    let (name, end) = ident(pos + 1);
                    if name.is_empty() {
                        return Err(SelectorError::Unexpected { found: c, at: pos });
                    }
                    if c == '#' {
                        out.id = Some(name);
                    } else {
                        out.classes.push(name);
                    }
                    pos = end;
                }
                '[' => {
                    let close = input[pos..]
                        .find(']')
                        .map(|off| pos + off)
                        .ok_or(SelectorError::Unterminated)?;
                    out.attrs.push(parse_attr(&input[pos + 1..close], pos + 1)?);
                    pos = close + 1;
                }
                _ => return Err(SelectorError::Unexpected { found: c, at: pos }),
            }
        }
        Ok(out)
    }
}

fn parse_attr(body: &str, offset: usize) -> Result<AttrMatch, SelectorError> {
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => {
            let value = value.trim();
            let unquoted = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            (name.trim(), Some(unquoted.to_string()))
        }
        None => (body.trim(), None),
    };
    if let Some(bad) = name.chars().find(|&c| !is_ident_char(c)) {
        return Err(SelectorError::Unexpected {
            found: bad,
            at: offset,
        });
    }
    if name.is_empty() {
        return Err(SelectorError::Unexpected {
            found: ']',
            at: offset,
        });
    }
    Ok(AttrMatch {
        name: name.to_string(),
        value,
    })
}
