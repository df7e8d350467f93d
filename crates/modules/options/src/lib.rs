//! Generator options: defaults, shallow user overrides, and the validated
//! per-tier view every generator pass runs against.
//!
//! All per-tier sequences are joined by index; `tiers()` performs that join
//! once, failing fast on length mismatches instead of letting unmatched
//! indices degrade into malformed declaration values downstream.

#![forbid(unsafe_code)]

use pagegrid_values_units::{PageWidth, ParseError, parse_dimension};
use serde::Deserialize;
use std::error::Error;
use std::fmt;

/// Fully-defaulted generator options.
///
/// `screens` carries one entry per responsive tier, `None` being the
/// unconditional base tier; every other per-tier sequence must have the same
/// length.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Breakpoint name per tier; `None` for the base tier.
    pub screens: Vec<Option<String>>,
    /// Grid column count per tier.
    pub columns: Vec<u32>,
    /// Page width per tier.
    pub page_widths: Vec<PageWidth>,
    /// Inter-column gap in px per tier.
    pub column_gaps: Vec<f32>,
    /// Page-edge gap in px per tier.
    pub page_gaps: Vec<f32>,
    /// Global page max width in px.
    pub page_max_width: f32,
    /// Global page min width in px.
    pub page_min_width: f32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            screens: vec![
                None,
                Some("md".to_owned()),
                Some("lg".to_owned()),
                Some("2xl".to_owned()),
            ],
            columns: vec![4, 6, 12, 12],
            page_widths: vec![
                PageWidth::from("100vw"),
                PageWidth::from("100vw"),
                PageWidth::from("98vw"),
                PageWidth::from(1440.0),
            ],
            column_gaps: vec![12.0, 12.0, 12.0, 12.0],
            page_gaps: vec![12.0, 12.0, 12.0, 12.0],
            page_max_width: 1440.0,
            page_min_width: 320.0,
        }
    }
}

/// User-supplied overrides, merged shallowly over [`Options::default`].
///
/// Each present key replaces the whole default value for that key; arrays are
/// never merged element-wise. Field names follow the host's camelCase option
/// surface.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct PartialOptions {
    pub screens: Option<Vec<Option<String>>>,
    pub columns: Option<Vec<u32>>,
    pub page_widths: Option<Vec<PageWidth>>,
    pub column_gaps: Option<Vec<f32>>,
    pub page_gaps: Option<Vec<f32>>,
    pub page_max_width: Option<f32>,
    pub page_min_width: Option<f32>,
}

/// One responsive tier: the zipped, validated view of the per-tier sequences.
#[derive(Clone, Debug, PartialEq)]
pub struct Tier {
    /// Breakpoint name; `None` for the base tier.
    pub screen: Option<String>,
    /// Grid column count, always non-zero.
    pub columns: u32,
    /// Page width at this tier.
    pub page_width: PageWidth,
    /// Inter-column gap in px.
    pub column_gap_px: f32,
    /// Page-edge gap in px.
    pub page_gap_px: f32,
}

/// Validation error for a merged [`Options`] value.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionsError {
    /// `screens` is empty, so no tier exists at all.
    EmptyScreens,
    /// A per-tier sequence's length differs from `screens.len()`.
    TierMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    /// A tier declares zero grid columns.
    ZeroColumns { tier: usize },
    /// A literal page width is not a single CSS `<dimension>`.
    InvalidPageWidth {
        tier: usize,
        width: String,
        source: ParseError,
    },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyScreens => f.write_str("screens must name at least the base tier"),
            Self::TierMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "{field} has {found} entries but screens has {expected}"
            ),
            Self::ZeroColumns { tier } => {
                write!(f, "tier {tier} declares zero grid columns")
            }
            Self::InvalidPageWidth { tier, width, .. } => {
                write!(f, "tier {tier} page width {width:?} is not a CSS dimension")
            }
        }
    }
}

impl Error for OptionsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPageWidth { source, .. } => Some(source),
            Self::EmptyScreens | Self::TierMismatch { .. } | Self::ZeroColumns { .. } => None,
        }
    }
}

impl Options {
    /// Merge user overrides shallowly over the defaults.
    pub fn merged(user: PartialOptions) -> Self {
        let defaults = Self::default();
        Self {
            screens: user.screens.unwrap_or(defaults.screens),
            columns: user.columns.unwrap_or(defaults.columns),
            page_widths: user.page_widths.unwrap_or(defaults.page_widths),
            column_gaps: user.column_gaps.unwrap_or(defaults.column_gaps),
            page_gaps: user.page_gaps.unwrap_or(defaults.page_gaps),
            page_max_width: user.page_max_width.unwrap_or(defaults.page_max_width),
            page_min_width: user.page_min_width.unwrap_or(defaults.page_min_width),
        }
    }

    /// Join the per-tier sequences by index into the validated tier view.
    ///
    /// # Errors
    /// Returns [`OptionsError`] when `screens` is empty, when any per-tier
    /// sequence's length differs from `screens.len()`, when a tier declares
    /// zero columns, or when a literal page width fails dimension validation.
    pub fn tiers(&self) -> Result<Vec<Tier>, OptionsError> {
        if self.screens.is_empty() {
            return Err(OptionsError::EmptyScreens);
        }
        let expected = self.screens.len();
        check_len("columns", self.columns.len(), expected)?;
        check_len("pageWidths", self.page_widths.len(), expected)?;
        check_len("columnGaps", self.column_gaps.len(), expected)?;
        check_len("pageGaps", self.page_gaps.len(), expected)?;

        let mut tiers = Vec::with_capacity(expected);
        for (tier_index, screen) in self.screens.iter().enumerate() {
            let columns = self.columns[tier_index];
            if columns == 0 {
                return Err(OptionsError::ZeroColumns { tier: tier_index });
            }
            let page_width = self.page_widths[tier_index].clone();
            if let PageWidth::Literal(literal) = &page_width {
                parse_dimension(literal).map_err(|source| OptionsError::InvalidPageWidth {
                    tier: tier_index,
                    width: literal.clone(),
                    source,
                })?;
            }
            tiers.push(Tier {
                screen: screen.clone(),
                columns,
                page_width,
                column_gap_px: self.column_gaps[tier_index],
                page_gap_px: self.page_gaps[tier_index],
            });
        }
        Ok(tiers)
    }
}

fn check_len(field: &'static str, found: usize, expected: usize) -> Result<(), OptionsError> {
    if found == expected {
        Ok(())
    } else {
        Err(OptionsError::TierMismatch {
            field,
            expected,
            found,
        })
    }
}
