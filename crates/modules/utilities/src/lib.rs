//! Responsive utility-rule generation: tier media conditions, the
//! selector-keyed rule model, and the four generator passes (layout
//! scaffolding, gap sizing, indent offsets, column widths).

#![forbid(unsafe_code)]

pub mod condition;
pub mod generate;
pub mod rule;

// Re-exports for ergonomic access from other crates.
pub use condition::{GenerateError, ThemeLookup, TierCondition, media_conditions};
pub use generate::{column_rules, gap_rules, indent_rules, layout_rules};
pub use rule::{Declarations, Property, RuleSet, UtilityRule, Variant};
