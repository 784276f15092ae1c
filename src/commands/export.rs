//! Serializes the set back to boundary shape.
//!
//! Every record goes out, suppressed ones included; suppression is a view
//! concern and must not leak into persistence. Output is sorted by
//! `(order, id)` so the same set always exports the same list, and synthetic
//! ids are stripped by the projection to [`RawField`].

use crate::error::Result;
use crate::fieldset::FieldSet;
use crate::model::RawField;

pub fn run(set: &FieldSet) -> Vec<RawField> {
    set.in_display_order()
        .into_iter()
        .map(|field| field.to_raw())
        .collect()
}

/// The export list as pretty-printed JSON, the shape the save endpoint takes.
pub fn to_json(set: &FieldSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(&run(set))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_set_exports_exactly_its_input() {
        let input = vec![
            RawField::new("currencies.currency.0.@id", 0).with_sample("USD"),
            RawField::new("currencies.currency.0.@rate", 1).with_sample("27.5"),
            RawField::new("offer.url", 2)
                .with_sample("https://x")
                .with_category("link")
                .required(true),
        ];
        let set = FieldSet::ingest(&input);
        assert_eq!(run(&set), input);
    }

    #[test]
    fn export_includes_suppressed_records() {
        let set = FieldSet::ingest(&[
            RawField::new("params.param.0.@name", 0).with_sample("Size"),
            RawField::new("params.param.0._text", 1).with_sample("XL"),
        ]);
        let exported = run(&set);
        assert_eq!(exported.len(), 2);
        assert!(exported.iter().any(|raw| raw.path.ends_with("_text")));
    }

    #[test]
    fn export_sorts_by_order_not_ingest_position() {
        let set = FieldSet::ingest(&[
            RawField::new("offer.b", 7),
            RawField::new("offer.a", 2),
        ]);
        let exported = run(&set);
        let paths: Vec<&str> = exported.iter().map(|raw| raw.path.as_str()).collect();
        assert_eq!(paths, vec!["offer.a", "offer.b"]);
    }

    #[test]
    fn raw_category_labels_survive_verbatim() {
        let input = vec![RawField::new("x", 0).with_category("CURRENCY")];
        let set = FieldSet::ingest(&input);
        assert_eq!(run(&set)[0].category.as_deref(), Some("CURRENCY"));
    }

    #[test]
    fn json_export_parses_back_to_the_same_records() {
        let input = vec![
            RawField::new("offer.name._text", 0).with_sample("Widget"),
            RawField::new("offer.price", 1),
        ];
        let set = FieldSet::ingest(&input);
        let json = to_json(&set).unwrap();
        let parsed: Vec<RawField> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, input);
    }
}
