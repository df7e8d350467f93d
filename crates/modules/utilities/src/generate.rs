//! The four generator passes: layout scaffolding, gap sizing, indent
//! offsets, and column widths.
//!
//! Each pass is a pure function from the validated tier view (plus its
//! matching conditions) to a [`RuleSet`]; passes never consult each other's
//! output, so registration grouping stays the host's concern.

use crate::condition::TierCondition;
use crate::rule::{Property, RuleSet};
use log::debug;
use pagegrid_options::Tier;
use pagegrid_values_units::{ColumnSpan, Em, Rem};

/// Whether `count` is exactly half of an even column count.
const fn is_half(columns: u32, count: u32) -> bool {
    columns % 2 == 0 && count == columns / 2
}

/// Base layout scaffolding: `col`, `col-gapless`, `row`, `nested-row`, and
/// the zero-indent overrides.
///
/// `col` pads both inline edges by the tier's column gap; `row` pushes both
/// inline edges out by the tier's page gap, and `nested-row` pulls them back
/// in by the same amount so nested grids sit flush.
pub fn layout_rules(tiers: &[Tier], conditions: &[TierCondition]) -> RuleSet {
    debug_assert_eq!(tiers.len(), conditions.len());
    let mut rules = RuleSet::new(conditions.to_vec());

    rules.declare("col", Property::BoxSizing, "content-box");
    rules.declare("col", Property::FlexGrow, "0");
    rules.declare("col", Property::FlexShrink, "0");
    rules.declare("col-gapless", Property::FlexGrow, "0");
    rules.declare("col-gapless", Property::FlexShrink, "0");
    rules.declare("row", Property::Display, "flex");
    rules.declare("nested-row", Property::Display, "flex");
    rules.declare("indent-left-0", Property::MarginLeft, "0");
    rules.declare("indent-right-0", Property::MarginRight, "0");

    for (tier_index, tier) in tiers.iter().enumerate() {
        let column_gap = Rem::from_px(tier.column_gap_px);
        let page_gap = Rem::from_px(tier.page_gap_px);
        rules.declare_at(tier_index, "col", Property::PaddingLeft, column_gap.to_string());
        rules.declare_at(tier_index, "col", Property::PaddingRight, column_gap.to_string());
        rules.declare_at(tier_index, "row", Property::MarginLeft, page_gap.to_string());
        rules.declare_at(tier_index, "row", Property::MarginRight, page_gap.to_string());
        rules.declare_at(
            tier_index,
            "nested-row",
            Property::MarginLeft,
            (-page_gap).to_string(),
        );
        rules.declare_at(
            tier_index,
            "nested-row",
            Property::MarginRight,
            (-page_gap).to_string(),
        );
    }
    debug!(
        "layout pass emitted {} selectors over {} tiers",
        rules.len(),
        tiers.len()
    );
    rules
}

/// Gap utilities: column-gap-sized padding and margin on all sides, the
/// inline axis, or the block axis.
pub fn gap_rules(tiers: &[Tier], conditions: &[TierCondition]) -> RuleSet {
    const GAP_SELECTORS: [(&str, &[Property]); 6] = [
        ("gap-padding", &[Property::Padding]),
        ("gap-padding-x", &[Property::PaddingLeft, Property::PaddingRight]),
        ("gap-padding-y", &[Property::PaddingTop, Property::PaddingBottom]),
        ("gap-margin", &[Property::Margin]),
        ("gap-margin-x", &[Property::MarginLeft, Property::MarginRight]),
        ("gap-margin-y", &[Property::MarginTop, Property::MarginBottom]),
    ];

    debug_assert_eq!(tiers.len(), conditions.len());
    let mut rules = RuleSet::new(conditions.to_vec());
    for (tier_index, tier) in tiers.iter().enumerate() {
        let gap = Rem::from_px(tier.column_gap_px).to_string();
        for (selector, properties) in GAP_SELECTORS {
            for property in properties {
                rules.declare_at(tier_index, selector, *property, gap.clone());
            }
        }
    }
    debug!(
        "gap pass emitted {} selectors over {} tiers",
        rules.len(),
        tiers.len()
    );
    rules
}

/// Indent utilities: margins offsetting an element by a multiple of one
/// column's width.
///
/// Counts run from 1 up to, but excluding, the tier's column count. For even
/// column counts the midpoint also lands on the tier-local `-half` aliases.
pub fn indent_rules(tiers: &[Tier], conditions: &[TierCondition]) -> RuleSet {
    debug_assert_eq!(tiers.len(), conditions.len());
    let mut rules = RuleSet::new(conditions.to_vec());
    for (tier_index, tier) in tiers.iter().enumerate() {
        let page_width = tier.page_width.to_string();
        let page_gap = Rem::from_px(tier.page_gap_px);
        for count in 1..tier.columns {
            let span = ColumnSpan::new(page_width.clone(), page_gap, tier.columns, count);
            let offset = span.indent();
            rules.declare_at(
                tier_index,
                &format!("indent-left-{count}"),
                Property::MarginLeft,
                offset.clone(),
            );
            rules.declare_at(
                tier_index,
                &format!("indent-right-{count}"),
                Property::MarginRight,
                offset.clone(),
            );
            if is_half(tier.columns, count) {
                rules.declare_at(tier_index, "indent-left-half", Property::MarginLeft, offset.clone());
                rules.declare_at(tier_index, "indent-right-half", Property::MarginRight, offset);
            }
        }
    }
    debug!(
        "indent pass emitted {} selectors over {} tiers",
        rules.len(),
        tiers.len()
    );
    rules
}

/// Column-width utilities: `col-<count>` and `col-gapless-<count>`, with the
/// `-full` alias at the tier's column count and the tier-local `-half` alias
/// at the midpoint of even column counts.
///
/// `width` spans the tier's page width; `min-width` spans the same fraction
/// of the global page min width (in em).
pub fn column_rules(
    tiers: &[Tier],
    conditions: &[TierCondition],
    page_min_width_px: f32,
) -> RuleSet {
    debug_assert_eq!(tiers.len(), conditions.len());
    let mut rules = RuleSet::new(conditions.to_vec());
    let min_basis = Em::from_px(page_min_width_px).to_string();
    for (tier_index, tier) in tiers.iter().enumerate() {
        let page_width = tier.page_width.to_string();
        let page_gap = Rem::from_px(tier.page_gap_px);
        let column_gap = Rem::from_px(tier.column_gap_px);
        for count in 1..=tier.columns {
            let span = ColumnSpan::new(page_width.clone(), page_gap, tier.columns, count);
            let min_span = ColumnSpan::new(min_basis.clone(), page_gap, tier.columns, count);
            let width = span.gapped(column_gap);
            let min_width = min_span.gapped(column_gap);
            let gapless_width = span.gapless();
            let gapless_min_width = min_span.gapless();

            emit_column(&mut rules, tier_index, &format!("col-{count}"), &width, &min_width);
            emit_column(
                &mut rules,
                tier_index,
                &format!("col-gapless-{count}"),
                &gapless_width,
                &gapless_min_width,
            );
            if count == tier.columns {
                emit_column(&mut rules, tier_index, "col-full", &width, &min_width);
                emit_column(
                    &mut rules,
                    tier_index,
                    "col-gapless-full",
                    &gapless_width,
                    &gapless_min_width,
                );
            }
            if is_half(tier.columns, count) {
                emit_column(&mut rules, tier_index, "col-half", &width, &min_width);
                emit_column(
                    &mut rules,
                    tier_index,
                    "col-gapless-half",
                    &gapless_width,
                    &gapless_min_width,
                );
            }
        }
    }
    debug!(
        "column pass emitted {} selectors over {} tiers",
        rules.len(),
        tiers.len()
    );
    rules
}

fn emit_column(
    rules: &mut RuleSet,
    tier_index: usize,
    selector: &str,
    width: &str,
    min_width: &str,
) {
    rules.declare_at(tier_index, selector, Property::Width, width.to_owned());
    rules.declare_at(tier_index, selector, Property::MinWidth, min_width.to_owned());
}
