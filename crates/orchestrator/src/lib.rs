//! Orchestrator for the page-grid generator.
//!
//! Consumes the host's theme-lookup capability, runs the generator passes
//! once, and hands the results to the host's registration capability. The
//! whole derivation is a single pass with no retained state; repeated
//! invocations are fully independent.

#![forbid(unsafe_code)]

use anyhow::Result;
use log::debug;
use pagegrid_utilities::{column_rules, gap_rules, indent_rules, layout_rules, media_conditions};

pub use pagegrid_options::{Options, OptionsError, PartialOptions, Tier};
pub use pagegrid_theme::ThemeExtension;
pub use pagegrid_utilities::{
    Declarations, GenerateError, Property, RuleSet, ThemeLookup, TierCondition, UtilityRule,
    Variant,
};
pub use pagegrid_values_units::PageWidth;

/// Registration capability supplied by the host.
pub trait RuleSink {
    /// Register one group of utility rules under the given variants.
    fn add_utilities(&mut self, rules: RuleSet, variants: &[Variant]);

    /// Contribute scale tokens to the host theme.
    fn extend_theme(&mut self, extension: ThemeExtension);
}

/// The one-shot plugin entry point, built from user overrides merged
/// shallowly over the defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Plugin {
    options: Options,
}

impl Default for Plugin {
    #[inline]
    fn default() -> Self {
        Self::new(PartialOptions::default())
    }
}

impl Plugin {
    /// Build the plugin from user overrides.
    #[inline]
    pub fn new(user: PartialOptions) -> Self {
        Self {
            options: Options::merged(user),
        }
    }

    /// The merged options this plugin runs with.
    #[inline]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Run the generator once against the host capabilities.
    ///
    /// Registers the four utility groups in order (layout scaffolding, gap
    /// sizing, indent offsets, column widths), each expanded across the
    /// host's responsive variants, then contributes the theme extension.
    /// Validation and breakpoint resolution happen up front, so a failure
    /// registers nothing.
    ///
    /// # Errors
    /// Returns [`OptionsError`] when the merged options fail tier validation
    /// and [`GenerateError`] when a breakpoint cannot be resolved against the
    /// host theme.
    pub fn register(&self, theme: &impl ThemeLookup, sink: &mut impl RuleSink) -> Result<()> {
        let tiers = self.options.tiers()?;
        let conditions = media_conditions(&tiers, theme)?;
        debug!(
            "registering page-grid utilities across {} tiers",
            tiers.len()
        );

        sink.add_utilities(layout_rules(&tiers, &conditions), &[Variant::Responsive]);
        sink.add_utilities(gap_rules(&tiers, &conditions), &[Variant::Responsive]);
        sink.add_utilities(indent_rules(&tiers, &conditions), &[Variant::Responsive]);
        sink.add_utilities(
            column_rules(&tiers, &conditions, self.options.page_min_width),
            &[Variant::Responsive],
        );
        sink.extend_theme(ThemeExtension::derive(
            &tiers,
            self.options.page_max_width,
            self.options.page_min_width,
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestTheme;

    impl ThemeLookup for TestTheme {
        fn screen_width(&self, name: &str) -> Option<String> {
            match name {
                "md" => Some("768px".to_owned()),
                "lg" => Some("1024px".to_owned()),
                "2xl" => Some("1536px".to_owned()),
                _ => None,
            }
        }
    }

    struct EmptyTheme;

    impl ThemeLookup for EmptyTheme {
        fn screen_width(&self, _name: &str) -> Option<String> {
            None
        }
    }

    #[derive(Default, PartialEq, Debug)]
    struct RecordingSink {
        utilities: Vec<(RuleSet, Vec<Variant>)>,
        extensions: Vec<ThemeExtension>,
    }

    impl RuleSink for RecordingSink {
        fn add_utilities(&mut self, rules: RuleSet, variants: &[Variant]) {
            self.utilities.push((rules, variants.to_vec()));
        }

        fn extend_theme(&mut self, extension: ThemeExtension) {
            self.extensions.push(extension);
        }
    }

    fn width_of(rules: &RuleSet, selector: &str, tier_index: usize) -> String {
        rules
            .get(selector)
            .and_then(|rule| rule.at_tier(tier_index).get(&Property::Width).cloned())
            .unwrap_or_default()
    }

    /// Defaults register four responsive utility groups and one extension.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_register_defaults() {
        let mut sink = RecordingSink::default();
        assert!(Plugin::default().register(&TestTheme, &mut sink).is_ok());

        assert_eq!(sink.utilities.len(), 4);
        assert!(
            sink.utilities
                .iter()
                .all(|(_, variants)| variants == &[Variant::Responsive])
        );
        assert!(sink.utilities[0].0.get("col").is_some());
        assert!(sink.utilities[1].0.get("gap-padding").is_some());
        assert!(sink.utilities[2].0.get("indent-left-1").is_some());
        assert_eq!(
            width_of(&sink.utilities[3].0, "col-4", 0),
            "calc(((100vw - 2 * 0.75rem) / 4 * 4) - (2 * 0.75rem))"
        );
        assert_eq!(
            width_of(&sink.utilities[3].0, "col-full", 0),
            width_of(&sink.utilities[3].0, "col-4", 0)
        );

        assert_eq!(sink.extensions.len(), 1);
        assert_eq!(
            sink.extensions[0].max_width.get("page"),
            Some(&"90rem".to_owned())
        );
        assert_eq!(
            sink.extensions[0].min_width.get("page"),
            Some(&"20rem".to_owned())
        );
    }

    /// Identical options produce identical registrations on every run.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_register_is_deterministic() {
        let plugin = Plugin::default();
        let mut first = RecordingSink::default();
        let mut second = RecordingSink::default();
        assert!(plugin.register(&TestTheme, &mut first).is_ok());
        assert!(plugin.register(&TestTheme, &mut second).is_ok());
        assert_eq!(first, second);
    }

    /// Overridden columns flow through while default arrays stay intact.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_register_with_overrides() {
        let plugin = Plugin::new(PartialOptions {
            columns: Some(vec![2, 4, 8, 8]),
            ..PartialOptions::default()
        });
        let mut sink = RecordingSink::default();
        assert!(plugin.register(&TestTheme, &mut sink).is_ok());
        assert_eq!(
            width_of(&sink.utilities[3].0, "col-2", 0),
            "calc(((100vw - 2 * 0.75rem) / 2 * 2) - (2 * 0.75rem))"
        );
        assert!(sink.utilities[3].0.get("col-12").is_none());
    }

    /// Registered rule sets serialize to the host's condition/selector shape.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_rule_set_serializes_to_host_shape() {
        let mut sink = RecordingSink::default();
        assert!(Plugin::default().register(&TestTheme, &mut sink).is_ok());

        let serialized = serde_json::to_value(&sink.utilities[0].0).ok();
        assert_eq!(
            serialized.as_ref().and_then(|value| value.get("conditions")).cloned(),
            Some(serde_json::json!([
                "",
                "@media (min-width: 768px)",
                "@media (min-width: 1024px)",
                "@media (min-width: 1536px)",
            ]))
        );
        assert_eq!(
            serialized
                .as_ref()
                .and_then(|value| value.pointer("/rules/col/declarations/box-sizing"))
                .cloned(),
            Some(serde_json::json!("content-box"))
        );
        assert_eq!(
            serialized
                .as_ref()
                .and_then(|value| value.pointer("/rules/col/responsive/0/padding-left"))
                .cloned(),
            Some(serde_json::json!("0.75rem"))
        );
    }

    /// An unresolvable breakpoint registers nothing.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_unknown_breakpoint_registers_nothing() {
        let mut sink = RecordingSink::default();
        assert!(Plugin::default().register(&EmptyTheme, &mut sink).is_err());
        assert!(sink.utilities.is_empty());
        assert!(sink.extensions.is_empty());
    }

    /// A tier-length mismatch registers nothing.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_tier_mismatch_registers_nothing() {
        let plugin = Plugin::new(PartialOptions {
            columns: Some(vec![4, 6]),
            ..PartialOptions::default()
        });
        let mut sink = RecordingSink::default();
        assert!(plugin.register(&TestTheme, &mut sink).is_err());
        assert!(sink.utilities.is_empty());
        assert!(sink.extensions.is_empty());
    }
}
