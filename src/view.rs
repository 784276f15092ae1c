//! # The Logical View
//!
//! Developer note: this module is the read model. Editors never see raw
//! records; they see [`LogicalField`]s, one per visible record, each fusing a
//! primary with its resolved partner into a `(display_name, display_value)`
//! pair plus the ids needed to route edits back.
//!
//! Projection is recomputed from scratch on every call. Nothing here is
//! cached or stored, so there is no stale-view state to invalidate: any
//! mutation is fully reflected in the next projection.

use crate::fieldset::FieldSet;
use crate::model::{Category, Field, FieldId};
use crate::pairing;
use crate::paths;

/// Placeholder rendered when a pair's half is missing.
pub const MISSING_VALUE: &str = "-";

/// One row of the editor view: a visible record fused with its partner.
///
/// `base` is always the visible record's id and is what edit and reorder
/// requests must reference. `partner` is present only when forward resolution
/// found one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalField {
    pub display_name: String,
    pub display_value: String,
    pub base: FieldId,
    pub partner: Option<FieldId>,
    pub category: Category,
}

/// Projects one record into its logical row.
///
/// Which half supplies the name and which the value depends on category:
/// currencies and characteristics carry their name on the primary and their
/// value on the partner, categories the other way around. A missing name
/// sample falls back to the path's last segment; a missing value renders as
/// [`MISSING_VALUE`]. Note `Some("")` is a present sample and falls back to
/// nothing.
pub fn project(set: &FieldSet, field: &Field) -> LogicalField {
    let partner = pairing::resolve_partner(set, field);
    let own_sample = field.sample.clone();
    let partner_sample = partner.and_then(|record| record.sample.clone());

    let (display_name, display_value) = match field.category {
        Category::Currency | Category::Characteristic => (
            own_sample.unwrap_or_else(|| paths::last_segment(&field.path).to_string()),
            partner_sample.unwrap_or_else(|| MISSING_VALUE.to_string()),
        ),
        Category::Category => (
            partner_sample.unwrap_or_else(|| paths::last_segment(&field.path).to_string()),
            own_sample.unwrap_or_else(|| MISSING_VALUE.to_string()),
        ),
        Category::Other => (
            paths::tail_segments(&field.path, 2),
            own_sample.unwrap_or_else(|| MISSING_VALUE.to_string()),
        ),
    };

    LogicalField {
        display_name,
        display_value,
        base: field.id,
        partner: partner.map(|record| record.id),
        category: field.category,
    }
}

/// All non-suppressed records in display order.
pub fn visible_fields(set: &FieldSet) -> Vec<&Field> {
    set.in_display_order()
        .into_iter()
        .filter(|field| !pairing::is_suppressed(set, field))
        .collect()
}

/// The full logical view: every visible record, projected, in display order.
pub fn logical_fields(set: &FieldSet) -> Vec<LogicalField> {
    visible_fields(set)
        .into_iter()
        .map(|field| project(set, field))
        .collect()
}
