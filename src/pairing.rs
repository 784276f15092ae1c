//! Partner resolution and visibility.
//!
//! A record is hidden exactly when it is the resolved partner of some primary
//! record. That definition is directional: the primary's candidate list is
//! what decides, so a `_text` record whose primary resolved to a different
//! duplicate stays visible on its own.

use crate::fieldset::FieldSet;
use crate::model::Field;
use crate::paths;

/// The record currently acting as `field`'s partner, if any.
///
/// Candidates are tried in the order [`paths::partner_candidates`] lists
/// them; the first path with a matching record wins, so an explicit `_text`
/// node shadows the bare-base fallback.
pub fn resolve_partner<'a>(set: &'a FieldSet, field: &Field) -> Option<&'a Field> {
    paths::partner_candidates(&field.path, field.category)
        .iter()
        .find_map(|candidate| set.find_by_path(candidate))
}

/// The primary record that claims `field` as its partner, if any.
///
/// Walks the reverse candidate list and confirms each hit by re-running
/// forward resolution from the primary's side: with duplicate paths in play,
/// a primary may exist at the expected path and still resolve to a different
/// record than `field`.
pub fn visible_owner<'a>(set: &'a FieldSet, field: &Field) -> Option<&'a Field> {
    for candidate in paths::primary_candidates(&field.path, field.category) {
        if let Some(primary) = set.find_by_path(&candidate) {
            if let Some(partner) = resolve_partner(set, primary) {
                if partner.id == field.id {
                    return Some(primary);
                }
            }
        }
    }
    None
}

/// Whether `field` is hidden behind a primary in the logical view.
pub fn is_suppressed(set: &FieldSet, field: &Field) -> bool {
    visible_owner(set, field).is_some()
}
