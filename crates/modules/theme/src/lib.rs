//! Design-token derivation: the spacing and width scale contributed to the
//! host theme alongside the generated selectors.
//!
//! Tokens are derived from the same per-tier options as the rule tree but are
//! independent of it; the host merges them into its own scale lookup.

#![forbid(unsafe_code)]

use pagegrid_options::Tier;
use pagegrid_values_units::Rem;
use serde::Serialize;
use std::collections::BTreeMap;

/// Scale tokens contributed to the host theme.
///
/// Serializes to the host's `{"spacing": …, "maxWidth": …, "minWidth": …}`
/// extension shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtension {
    /// `column-gap[-<screen>]` and `page-gap[-<screen>]` spacing tokens.
    pub spacing: BTreeMap<String, String>,
    /// The `page` max-width token.
    pub max_width: BTreeMap<String, String>,
    /// The `page` min-width token.
    pub min_width: BTreeMap<String, String>,
}

impl ThemeExtension {
    /// Derive the token set from the validated tier view and the global page
    /// width bounds.
    ///
    /// The base tier contributes the unsuffixed `column-gap` / `page-gap`
    /// tokens; named tiers append their screen name.
    pub fn derive(tiers: &[Tier], page_max_width_px: f32, page_min_width_px: f32) -> Self {
        let mut spacing = BTreeMap::new();
        for tier in tiers {
            spacing.insert(
                token_name("column-gap", tier.screen.as_deref()),
                Rem::from_px(tier.column_gap_px).to_string(),
            );
            spacing.insert(
                token_name("page-gap", tier.screen.as_deref()),
                Rem::from_px(tier.page_gap_px).to_string(),
            );
        }
        Self {
            spacing,
            max_width: BTreeMap::from([(
                "page".to_owned(),
                Rem::from_px(page_max_width_px).to_string(),
            )]),
            min_width: BTreeMap::from([(
                "page".to_owned(),
                Rem::from_px(page_min_width_px).to_string(),
            )]),
        }
    }
}

fn token_name(stem: &str, screen: Option<&str>) -> String {
    match screen {
        None => stem.to_owned(),
        Some(name) => format!("{stem}-{name}"),
    }
}
