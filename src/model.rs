//! # Domain Model: Feed Fields and Their Categories
//!
//! This module defines the core data structures of feedmap: [`RawField`],
//! [`Field`], [`FieldId`], and [`Category`].
//!
//! ## The Shape of the Input
//!
//! An upstream feed parser flattens a marketplace XML feed into a list of
//! `(path, sample)` records. A path is a dot-joined string such as
//! `offer.currencies.currency.0.@id`: element names, zero-based indices for
//! repeated elements, `@`-prefixed attribute names, and `_text` for an
//! element's text node. The parser knows nothing about which records belong
//! together; that is this crate's job.
//!
//! ## Raw vs. Classified
//!
//! [`RawField`] is the boundary shape: exactly what the parser hands over and
//! exactly what the save path expects back. [`Field`] is the owned, engine-side
//! record. The two differ in precisely two ways:
//!
//! - A `Field` carries a synthetic [`FieldId`], stable for the lifetime of a
//!   `FieldSet` and never serialized.
//! - A `Field` carries a classified [`Category`] tag next to the verbatim
//!   label it was derived from. The verbatim label is echoed back on export so
//!   that a load/save cycle with no edits reproduces the input byte for byte;
//!   the classified tag is what every pairing and display rule consults.
//!
//! ## Classification
//!
//! [`Category::classify`] is the single entry point. An explicit label wins
//! when present and non-blank, matched case-insensitively; an unrecognized
//! explicit label means the producer asked for something we do not model, and
//! the record lands in [`Category::Other`] without falling back to path
//! inference. Only when no usable label exists is the path scanned for the
//! (case-insensitive) tokens `currency`, `category`, `param`, in that priority
//! order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of field categories.
///
/// Categories govern pairing and display. Anything the feed producer invents
/// beyond the three structured kinds is [`Category::Other`]: a plain field
/// with no partner and a path-derived display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A currency definition: an `@id` code paired with an `@rate` factor.
    Currency,
    /// A category entry: an `@id` paired with a human-readable text node.
    Category,
    /// A product characteristic: an `@name` paired with a text node value.
    Characteristic,
    /// Everything else. Unpaired, value-only.
    Other,
}

impl Category {
    /// Classifies a record from its path and optional explicit label.
    ///
    /// The explicit label, when present and non-blank, is authoritative even
    /// when it is unrecognized. Path token inference applies the priority
    /// `currency` > `category` > `param` so that a path containing several
    /// tokens classifies deterministically.
    pub fn classify(path: &str, explicit: Option<&str>) -> Category {
        if let Some(label) = explicit {
            let label = label.trim();
            if !label.is_empty() {
                return Category::from_label(label);
            }
        }
        let lower = path.to_lowercase();
        if lower.contains("currency") {
            Category::Currency
        } else if lower.contains("category") {
            Category::Category
        } else if lower.contains("param") {
            Category::Characteristic
        } else {
            Category::Other
        }
    }

    // An explicit label never re-enters path inference; unrecognized ones
    // land in Other.
    fn from_label(label: &str) -> Category {
        match label.to_lowercase().as_str() {
            "currency" => Category::Currency,
            "category" => Category::Category,
            "characteristic" => Category::Characteristic,
            _ => Category::Other,
        }
    }

    /// Canonical display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Currency => "Currency",
            Category::Category => "Category",
            Category::Characteristic => "Characteristic",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Synthetic record identity, assigned at ingest and never serialized.
///
/// Ids are unique within one [`FieldSet`](crate::fieldset::FieldSet) and are
/// never reused after a removal, so a stale id from an earlier view can only
/// miss, not silently hit a different record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub(crate) u64);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The flat boundary record: what the feed parser produces and what the save
/// path consumes.
///
/// Everything but `path` is optional on the wire. `sample` distinguishes a
/// missing value (`None`) from a present-but-empty one (`Some("")`); only the
/// former triggers display fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawField {
    pub path: String,
    #[serde(default)]
    pub sample: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub order: u32,
}

impl RawField {
    pub fn new(path: impl Into<String>, order: u32) -> Self {
        Self {
            path: path.into(),
            sample: None,
            category: None,
            required: false,
            order,
        }
    }

    pub fn with_sample(mut self, sample: impl Into<String>) -> Self {
        self.sample = Some(sample.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// One record owned by a [`FieldSet`](crate::fieldset::FieldSet).
///
/// `raw_category` holds the producer's label verbatim for lossless export;
/// `category` holds the classified tag that pairing and display consult.
#[derive(Debug, Clone)]
pub struct Field {
    pub id: FieldId,
    pub path: String,
    pub sample: Option<String>,
    pub raw_category: Option<String>,
    pub category: Category,
    pub required: bool,
    pub order: u32,
}

impl Field {
    pub(crate) fn from_raw(id: FieldId, raw: RawField) -> Self {
        let category = Category::classify(&raw.path, raw.category.as_deref());
        Self {
            id,
            path: raw.path,
            sample: raw.sample,
            raw_category: raw.category,
            category,
            required: raw.required,
            order: raw.order,
        }
    }

    /// Projects the field back into boundary shape, dropping the synthetic id
    /// and the classified tag.
    pub fn to_raw(&self) -> RawField {
        RawField {
            path: self.path.clone(),
            sample: self.sample.clone(),
            category: self.raw_category.clone(),
            required: self.required,
            order: self.order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_label_wins_over_path_tokens() {
        let category = Category::classify("offer.currencies.currency.0.@id", Some("characteristic"));
        assert_eq!(category, Category::Characteristic);
    }

    #[test]
    fn explicit_label_is_case_insensitive() {
        assert_eq!(Category::classify("x", Some("CURRENCY")), Category::Currency);
        assert_eq!(Category::classify("x", Some("Category")), Category::Category);
        assert_eq!(Category::classify("x", Some("other")), Category::Other);
    }

    #[test]
    fn unrecognized_label_does_not_fall_back_to_path() {
        // The path alone would classify as Currency; the bogus label blocks that.
        let category = Category::classify("currencies.currency.0.@id", Some("price"));
        assert_eq!(category, Category::Other);
    }

    #[test]
    fn blank_label_falls_back_to_path() {
        assert_eq!(
            Category::classify("currencies.currency.0.@id", Some("   ")),
            Category::Currency
        );
        assert_eq!(Category::classify("categories.category.1", Some("")), Category::Category);
    }

    #[test]
    fn path_tokens_apply_in_priority_order() {
        // Contains both "currency" and "param": currency wins.
        assert_eq!(
            Category::classify("params.param.currency_hint", None),
            Category::Currency
        );
        // Contains both "category" and "param": category wins.
        assert_eq!(
            Category::classify("param.categoryRef.@id", None),
            Category::Category
        );
        assert_eq!(Category::classify("offer.params.param.3.@name", None), Category::Characteristic);
    }

    #[test]
    fn path_token_match_is_case_insensitive_substring() {
        assert_eq!(Category::classify("shop.Currencies.0", None), Category::Currency);
        // "param" inside a longer word still counts; token matching is
        // substring-based.
        assert_eq!(Category::classify("offer.parameters.0", None), Category::Characteristic);
    }

    #[test]
    fn unmatched_path_is_other() {
        assert_eq!(Category::classify("offer.name._text", None), Category::Other);
        assert_eq!(Category::classify("", None), Category::Other);
    }

    #[test]
    fn field_retains_raw_label_verbatim() {
        let raw = RawField::new("offer.price", 0).with_category("PRICE-ish");
        let field = Field::from_raw(FieldId(1), raw.clone());
        assert_eq!(field.category, Category::Other);
        assert_eq!(field.raw_category.as_deref(), Some("PRICE-ish"));
        assert_eq!(field.to_raw(), raw);
    }

    #[test]
    fn to_raw_round_trips_every_boundary_property() {
        let raw = RawField::new("params.param.0.@name", 7)
            .with_sample("Color")
            .with_category("characteristic")
            .required(true);
        let field = Field::from_raw(FieldId(42), raw.clone());
        assert_eq!(field.to_raw(), raw);
    }

    #[test]
    fn raw_field_deserializes_with_defaults() {
        let raw: RawField = serde_json::from_str(r#"{"path": "offer.url"}"#).unwrap();
        assert_eq!(raw.path, "offer.url");
        assert_eq!(raw.sample, None);
        assert_eq!(raw.category, None);
        assert!(!raw.required);
        assert_eq!(raw.order, 0);
    }

    #[test]
    fn raw_field_keeps_empty_sample_distinct_from_missing() {
        let present: RawField = serde_json::from_str(r#"{"path": "p", "sample": ""}"#).unwrap();
        let missing: RawField = serde_json::from_str(r#"{"path": "p"}"#).unwrap();
        assert_eq!(present.sample.as_deref(), Some(""));
        assert_eq!(missing.sample, None);
        assert_ne!(present, missing);
    }

    #[test]
    fn field_id_displays_with_hash_prefix() {
        assert_eq!(FieldId(9).to_string(), "#9");
    }

    #[test]
    fn category_display_matches_label() {
        assert_eq!(Category::Characteristic.to_string(), "Characteristic");
        assert_eq!(Category::Other.label(), "Other");
    }
}
