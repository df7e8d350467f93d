//! Per-tier page width: literal dimension or pixel count.

use crate::lengths::Em;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Page width for one responsive tier.
///
/// A literal CSS dimension (`100vw`) is used verbatim; a bare pixel number
/// (`1440`) renders as `em` with the fixed 16px base. The untagged serde
/// representation mirrors the host's string-or-number option value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageWidth {
    /// Pixel count, converted to em when rendered.
    Pixels(f32),
    /// Literal dimension string, rendered verbatim.
    Literal(String),
}

impl From<f32> for PageWidth {
    #[inline]
    fn from(pixels: f32) -> Self {
        Self::Pixels(pixels)
    }
}

impl From<&str> for PageWidth {
    #[inline]
    fn from(literal: &str) -> Self {
        Self::Literal(literal.to_owned())
    }
}

impl fmt::Display for PageWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(pixels) => Em::from_px(*pixels).fmt(f),
            Self::Literal(literal) => f.write_str(literal),
        }
    }
}
