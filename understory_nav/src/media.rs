// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small width-only media query evaluator.
//!
//! Supports what responsive navigation breakpoints use in practice: an
//! optional `all` / `screen` media type (with or without `only`) followed by
//! `and`-joined `(min-width: …)` / `(max-width: …)` features in `px`, `em` or
//! `rem`. Matching is ASCII case-insensitive. Relative units resolve against
//! a 16px root font size; a bare `0` is accepted as a length.
//!
//! ```rust
//! use understory_nav::media::MediaQuery;
//!
//! let q = MediaQuery::parse("screen and (min-width: 48em)").unwrap();
//! assert!(q.matches(1024.0));
//! assert!(!q.matches(375.0));
//! ```

use alloc::string::{String, ToString};
use smallvec::SmallVec;

/// Pixels per `em`/`rem`.
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Failure to parse a media query.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MediaQueryError {
    /// The query was empty.
    #[error("empty media query")]
    Empty,
    /// A media type other than `all` or `screen`.
    #[error("unsupported media type `{0}`")]
    UnsupportedType(String),
    /// A feature other than `min-width` / `max-width`, or a malformed one.
    #[error("unsupported media feature `{0}`")]
    UnsupportedFeature(String),
    /// A length that is not a number followed by `px`, `em` or `rem`.
    #[error("invalid length `{0}`")]
    InvalidLength(String),
}

/// One width condition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WidthFeature {
    /// Viewport width is at least this many pixels.
    Min(f64),
    /// Viewport width is at most this many pixels.
    Max(f64),
}

impl WidthFeature {
    fn matches(self, width: f64) -> bool {
        match self {
            Self::Min(px) => width >= px,
            Self::Max(px) => width <= px,
        }
    }
}

/// A parsed media query.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQuery {
    features: SmallVec<[WidthFeature; 2]>,
}

impl MediaQuery {
    /// Parse a query string.
    pub fn parse(query: &str) -> Result<Self, MediaQueryError> {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return Err(MediaQueryError::Empty);
        }
        let mut features = SmallVec::new();
        for (i, part) in query.split(" and ").enumerate() {
            let part = part.trim();
            if let Some(inner) = part.strip_prefix('(').and_then(|p| p.strip_suffix(')')) {
                features.push(parse_feature(inner)?);
            } else if i == 0 {
                let media_type = part.strip_prefix("only ").map_or(part, str::trim_start);
                if !matches!(media_type, "all" | "screen") {
                    return Err(MediaQueryError::UnsupportedType(part.to_string()));
                }
            } else {
                return Err(MediaQueryError::UnsupportedFeature(part.to_string()));
            }
        }
        Ok(Self { features })
    }

    /// The width conditions, all of which must hold.
    #[must_use]
    pub fn features(&self) -> &[WidthFeature] {
        &self.features
    }

    /// Evaluate against a viewport width in CSS pixels.
    #[must_use]
    pub fn matches(&self, width_px: f64) -> bool {
        self.features.iter().all(|f| f.matches(width_px))
    }
}

fn parse_feature(inner: &str) -> Result<WidthFeature, MediaQueryError> {
    let Some((name, value)) = inner.split_once(':') else {
        return Err(MediaQueryError::UnsupportedFeature(inner.to_string()));
    };
    let px = parse_length(value.trim())?;
    match name.trim() {
        "min-width" => Ok(WidthFeature::Min(px)),
        "max-width" => Ok(WidthFeature::Max(px)),
        other => Err(MediaQueryError::UnsupportedFeature(other.to_string())),
    }
}

fn parse_length(value: &str) -> Result<f64, MediaQueryError> {
    let invalid = || MediaQueryError::InvalidLength(value.to_string());
    if value == "0" {
        return Ok(0.0);
    }
    let (number, scale) = if let Some(n) = value.strip_suffix("rem") {
        (n, ROOT_FONT_SIZE_PX)
    } else if let Some(n) = value.strip_suffix("em") {
        (n, ROOT_FONT_SIZE_PX)
    } else if let Some(n) = value.strip_suffix("px") {
        (n, 1.0)
    } else {
        return Err(invalid());
    };
    let number: f64 = number.trim().parse().map_err(|_| invalid())?;
    if !number.is_finite() || number < 0.0 {
        return Err(invalid());
    }
    Ok(number * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_breakpoint_is_768px() {
        let q = MediaQuery::parse("(min-width: 48em)").unwrap();
        assert_eq!(q.features(), &[WidthFeature::Min(768.0)]);
        assert!(q.matches(768.0));
        assert!(!q.matches(767.5));
    }

    #[test]
    fn ranges_combine_with_and() {
        let q = MediaQuery::parse("screen and (min-width: 600px) and (max-width: 50rem)").unwrap();
        assert!(!q.matches(599.0));
        assert!(q.matches(700.0));
        assert!(!q.matches(801.0));
    }

    #[test]
    fn only_prefix_case_and_unitless_zero() {
        let q = MediaQuery::parse("only screen and (min-width: 48em)").unwrap();
        assert_eq!(q.features(), &[WidthFeature::Min(768.0)]);
        let q = MediaQuery::parse("Screen AND (MIN-WIDTH: 600PX)").unwrap();
        assert_eq!(q.features(), &[WidthFeature::Min(600.0)]);
        let q = MediaQuery::parse("(min-width: 0)").unwrap();
        assert!(q.matches(0.0));
        assert_eq!(
            MediaQuery::parse("only print"),
            Err(MediaQueryError::UnsupportedType("only print".into()))
        );
    }

    #[test]
    fn bare_media_type_always_matches() {
        assert!(MediaQuery::parse("all").unwrap().matches(0.0));
    }

    #[test]
    fn rejects_unsupported_input() {
        assert_eq!(MediaQuery::parse("  "), Err(MediaQueryError::Empty));
        assert_eq!(
            MediaQuery::parse("print"),
            Err(MediaQueryError::UnsupportedType("print".into()))
        );
        assert_eq!(
            MediaQuery::parse("(orientation: landscape)"),
            Err(MediaQueryError::InvalidLength("landscape".into()))
        );
        assert_eq!(
            MediaQuery::parse("(min-height: 10px)"),
            Err(MediaQueryError::UnsupportedFeature("min-height".into()))
        );
        assert_eq!(
            MediaQuery::parse("(min-width: wide)"),
            Err(MediaQueryError::InvalidLength("wide".into()))
        );
    }
}
