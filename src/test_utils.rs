//! Fixture builders for tests and embedding playgrounds.
//!
//! Compiled only for tests or behind the `test_utils` feature, so downstream
//! crates can opt in without shipping fixtures in release builds.

use crate::api::FeedmapApi;
use crate::fieldset::FieldSet;
use crate::model::RawField;

/// Builds feed record lists without path-string noise in every test.
///
/// Orders follow insertion position; pair helpers derive a unique element
/// index from the current record count so repeated calls never collide.
#[derive(Default)]
pub struct FeedFixture {
    records: Vec<RawField>,
}

impl FeedFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, path: &str, sample: &str) -> Self {
        let order = self.records.len() as u32;
        self.records.push(RawField::new(path, order).with_sample(sample));
        self
    }

    pub fn with_bare_field(mut self, path: &str) -> Self {
        let order = self.records.len() as u32;
        self.records.push(RawField::new(path, order));
        self
    }

    pub fn with_labeled_field(mut self, path: &str, sample: &str, label: &str) -> Self {
        let order = self.records.len() as u32;
        self.records
            .push(RawField::new(path, order).with_sample(sample).with_category(label));
        self
    }

    /// Appends a complete `@id`/`@rate` currency pair.
    pub fn with_currency(self, code: &str, rate: &str) -> Self {
        let index = self.records.len();
        let id_path = format!("currencies.currency.{}.@id", index);
        let rate_path = format!("currencies.currency.{}.@rate", index);
        self.with_field(&id_path, code).with_field(&rate_path, rate)
    }

    /// Appends a complete `@id`/`_text` category pair.
    pub fn with_category_pair(self, id: &str, name: &str) -> Self {
        let index = self.records.len();
        let id_path = format!("categories.category.{}.@id", index);
        let text_path = format!("categories.category.{}._text", index);
        self.with_field(&id_path, id).with_field(&text_path, name)
    }

    /// Appends a complete `@name`/`_text` characteristic pair.
    pub fn with_characteristic(self, name: &str, value: &str) -> Self {
        let index = self.records.len();
        let name_path = format!("params.param.{}.@name", index);
        let text_path = format!("params.param.{}._text", index);
        self.with_field(&name_path, name).with_field(&text_path, value)
    }

    pub fn records(&self) -> &[RawField] {
        &self.records
    }

    pub fn build_set(&self) -> FieldSet {
        FieldSet::ingest(&self.records)
    }

    pub fn build_api(&self) -> FeedmapApi {
        FeedmapApi::ingest(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_helpers_produce_one_logical_row_each() {
        let api = FeedFixture::new()
            .with_currency("USD", "27.5")
            .with_category_pair("55", "Phones")
            .with_characteristic("Color", "Red")
            .build_api();
        assert_eq!(api.len(), 6);
        assert_eq!(api.logical_view().len(), 3);
    }

    #[test]
    fn repeated_pairs_never_share_paths() {
        let fixture = FeedFixture::new()
            .with_currency("USD", "27.5")
            .with_currency("EUR", "30.1");
        let set = fixture.build_set();
        assert!(crate::commands::audit::run(&set).duplicate_paths.is_empty());
    }

    #[test]
    fn orders_follow_insertion_position() {
        let records = FeedFixture::new()
            .with_field("a", "1")
            .with_bare_field("b")
            .records()
            .to_vec();
        assert_eq!(records[0].order, 0);
        assert_eq!(records[1].order, 1);
        assert_eq!(records[1].sample, None);
    }
}
