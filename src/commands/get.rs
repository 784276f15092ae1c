//! Read side: the filtered logical view.

use crate::fieldset::FieldSet;
use crate::model::Category;
use crate::view::{self, LogicalField};

/// View filter. The default matches everything.
#[derive(Debug, Clone, Default)]
pub struct FieldFilter {
    /// Keep only rows of this category.
    pub category: Option<Category>,
    /// Keep only rows whose name or value contains this term,
    /// case-insensitively.
    pub term: Option<String>,
}

impl FieldFilter {
    pub fn by_category(category: Category) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn by_term(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            ..Self::default()
        }
    }
}

pub fn run(set: &FieldSet, filter: &FieldFilter) -> Vec<LogicalField> {
    view::logical_fields(set)
        .into_iter()
        .filter(|row| matches_category(row, filter.category))
        .filter(|row| matches_term(row, filter.term.as_deref()))
        .collect()
}

fn matches_category(row: &LogicalField, category: Option<Category>) -> bool {
    match category {
        None => true,
        Some(wanted) => row.category == wanted,
    }
}

fn matches_term(row: &LogicalField, term: Option<&str>) -> bool {
    match term {
        None => true,
        Some(term) => {
            let term = term.to_lowercase();
            row.display_name.to_lowercase().contains(&term)
                || row.display_value.to_lowercase().contains(&term)
        }
    }
}
