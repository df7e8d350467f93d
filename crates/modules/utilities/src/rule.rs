//! Utility rule model: declaration properties, per-tier declaration maps, and
//! selector-keyed rule sets.
//!
//! Everything is built on ordered maps so repeated generation from identical
//! options yields structurally identical output.

use crate::condition::TierCondition;
use serde::Serialize;
use std::collections::BTreeMap;

/// Declaration properties the generator emits, rendered kebab-case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    BoxSizing,
    Display,
    FlexGrow,
    FlexShrink,
    Margin,
    MarginLeft,
    MarginRight,
    MarginTop,
    MarginBottom,
    Padding,
    PaddingLeft,
    PaddingRight,
    PaddingTop,
    PaddingBottom,
    Width,
    MinWidth,
}

impl Property {
    /// The CSS property name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BoxSizing => "box-sizing",
            Self::Display => "display",
            Self::FlexGrow => "flex-grow",
            Self::FlexShrink => "flex-shrink",
            Self::Margin => "margin",
            Self::MarginLeft => "margin-left",
            Self::MarginRight => "margin-right",
            Self::MarginTop => "margin-top",
            Self::MarginBottom => "margin-bottom",
            Self::Padding => "padding",
            Self::PaddingLeft => "padding-left",
            Self::PaddingRight => "padding-right",
            Self::PaddingTop => "padding-top",
            Self::PaddingBottom => "padding-bottom",
            Self::Width => "width",
            Self::MinWidth => "min-width",
        }
    }
}

/// Ordered declaration map for one selector at one condition.
pub type Declarations = BTreeMap<Property, String>;

/// Variant tag a rule group is registered under with the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Expand across the host's responsive variants.
    Responsive,
}

/// A single utility rule.
///
/// `declarations` holds the tier-independent declarations; `responsive` holds
/// one declaration map per tier, empty where the utility contributes nothing
/// at that tier. `responsive.len()` always equals the tier count of the
/// owning [`RuleSet`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UtilityRule {
    pub declarations: Declarations,
    pub responsive: Vec<Declarations>,
}

impl UtilityRule {
    fn sized(tier_count: usize) -> Self {
        Self {
            declarations: Declarations::new(),
            responsive: vec![Declarations::new(); tier_count],
        }
    }

    /// Declarations for a tier index; empty past the tier count.
    pub fn at_tier(&self, tier_index: usize) -> &Declarations {
        static EMPTY: Declarations = Declarations::new();
        self.responsive.get(tier_index).unwrap_or(&EMPTY)
    }
}

/// Selector-keyed rule set for one registration with the host.
///
/// The tier index is the join key between `conditions` and every rule's
/// `responsive` vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    pub conditions: Vec<TierCondition>,
    pub rules: BTreeMap<String, UtilityRule>,
}

impl RuleSet {
    /// An empty set over the given tier conditions.
    pub fn new(conditions: Vec<TierCondition>) -> Self {
        Self {
            conditions,
            rules: BTreeMap::new(),
        }
    }

    /// Number of selectors in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set carries no selectors.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a rule by selector name.
    pub fn get(&self, selector: &str) -> Option<&UtilityRule> {
        self.rules.get(selector)
    }

    /// Selector names in deterministic order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    fn rule_mut(&mut self, selector: &str) -> &mut UtilityRule {
        let tier_count = self.conditions.len();
        self.rules
            .entry(selector.to_owned())
            .or_insert_with(|| UtilityRule::sized(tier_count))
    }

    /// Add a tier-independent declaration to a selector.
    pub(crate) fn declare(&mut self, selector: &str, property: Property, value: impl Into<String>) {
        self.rule_mut(selector).declarations.insert(property, value.into());
    }

    /// Add a declaration to a selector at one tier.
    pub(crate) fn declare_at(
        &mut self,
        tier_index: usize,
        selector: &str,
        property: Property,
        value: impl Into<String>,
    ) {
        if let Some(declarations) = self.rule_mut(selector).responsive.get_mut(tier_index) {
            declarations.insert(property, value.into());
        }
    }
}
