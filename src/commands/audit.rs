//! Diagnoses feed oddities without changing anything.
//!
//! None of the findings are errors; the engine operates fine on feeds with
//! all of them. The report exists so a caller can warn the user that pairing
//! picked winners (duplicate paths), that ordering relies on tiebreaks
//! (duplicate orders), or that pair halves arrived alone (orphaned
//! secondaries).

use std::collections::HashMap;

use crate::fieldset::FieldSet;
use crate::model::FieldId;
use crate::pairing;
use crate::paths;

#[derive(Debug, Default)]
pub struct AuditReport {
    /// Paths occurring on more than one record, sorted.
    pub duplicate_paths: Vec<String>,
    /// Order values shared by more than one record, sorted.
    pub duplicate_orders: Vec<u32>,
    /// Secondary-shaped records (`@rate`, `_text`) that no primary claims,
    /// in ingest order.
    pub orphaned_secondaries: Vec<FieldId>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_paths.is_empty()
            && self.duplicate_orders.is_empty()
            && self.orphaned_secondaries.is_empty()
    }
}

pub fn run(set: &FieldSet) -> AuditReport {
    let mut path_counts: HashMap<&str, usize> = HashMap::new();
    let mut order_counts: HashMap<u32, usize> = HashMap::new();
    for field in set.fields() {
        *path_counts.entry(field.path.as_str()).or_default() += 1;
        *order_counts.entry(field.order).or_default() += 1;
    }

    let mut duplicate_paths: Vec<String> = path_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(path, _)| path.to_string())
        .collect();
    duplicate_paths.sort();

    let mut duplicate_orders: Vec<u32> = order_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(order, _)| order)
        .collect();
    duplicate_orders.sort_unstable();

    let orphaned_secondaries = set
        .fields()
        .filter(|field| {
            paths::is_secondary(&field.path, field.category)
                && pairing::visible_owner(set, field).is_none()
        })
        .map(|field| field.id)
        .collect();

    AuditReport {
        duplicate_paths,
        duplicate_orders,
        orphaned_secondaries,
    }
}
