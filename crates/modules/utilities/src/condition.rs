//! Responsive tier conditions and their construction from the host theme.

use pagegrid_options::Tier;
use pagegrid_values_units::parse_dimension;
use serde::{Serialize, Serializer};
use std::error::Error;
use std::fmt;

/// Theme-lookup capability supplied by the host.
///
/// Resolves a breakpoint name (an entry of `screens` other than the base
/// tier) to the dimension string configured under `screens.<name>`.
pub trait ThemeLookup {
    /// The configured width for `screens.<name>`, if the theme knows it.
    fn screen_width(&self, name: &str) -> Option<String>;
}

/// Media condition for one responsive tier.
///
/// The base tier is unconditional and renders as the empty string; every
/// other tier renders as a `min-width` media query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierCondition(Option<String>);

impl TierCondition {
    /// The unconditional base tier.
    #[inline]
    pub const fn base() -> Self {
        Self(None)
    }

    /// A `min-width` condition for a resolved breakpoint width.
    #[inline]
    pub fn min_width(width: &str) -> Self {
        Self(Some(format!("@media (min-width: {width})")))
    }

    /// Whether this is the unconditional base tier.
    #[inline]
    pub const fn is_base(&self) -> bool {
        self.0.is_none()
    }

    /// The rendered condition; empty for the base tier.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }
}

impl fmt::Display for TierCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TierCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Error while resolving tier conditions against the host theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// A named breakpoint is missing from the host theme.
    UnknownBreakpoint { name: String },
    /// The host theme returned a width that is not a CSS `<dimension>`.
    InvalidBreakpoint { name: String, width: String },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBreakpoint { name } => {
                write!(f, "breakpoint {name:?} is not defined in the host theme")
            }
            Self::InvalidBreakpoint { name, width } => write!(
                f,
                "breakpoint {name:?} resolved to {width:?}, which is not a CSS dimension"
            ),
        }
    }
}

impl Error for GenerateError {}

/// Build the per-tier media conditions, preserving tier order.
///
/// The tier index into the returned vector is the join key used by every
/// generator pass.
///
/// # Errors
/// Returns [`GenerateError::UnknownBreakpoint`] when the theme has no entry
/// for a named screen, and [`GenerateError::InvalidBreakpoint`] when the
/// resolved width fails dimension validation.
pub fn media_conditions(
    tiers: &[Tier],
    theme: &impl ThemeLookup,
) -> Result<Vec<TierCondition>, GenerateError> {
    let mut conditions = Vec::with_capacity(tiers.len());
    for tier in tiers {
        let condition = match &tier.screen {
            None => TierCondition::base(),
            Some(name) => {
                let width =
                    theme
                        .screen_width(name)
                        .ok_or_else(|| GenerateError::UnknownBreakpoint {
                            name: name.clone(),
                        })?;
                if parse_dimension(&width).is_err() {
                    return Err(GenerateError::InvalidBreakpoint {
                        name: name.clone(),
                        width,
                    });
                }
                TierCondition::min_width(&width)
            }
        };
        conditions.push(condition);
    }
    Ok(conditions)
}
