//! Moves a logical row to a new position.
//!
//! Reordering is defined over the logical view, not the raw list: the visible
//! records are taken in display order, the base record is moved to the target
//! index, and every visible record's `order` is rewritten to its new position
//! (0-based, dense). Suppressed records keep their stored `order`; they travel
//! with their primary implicitly because they never appear in the view.

use crate::commands::{OpMessage, OpResult};
use crate::error::{FeedmapError, Result};
use crate::fieldset::FieldSet;
use crate::model::FieldId;
use crate::view;

pub fn run(set: &mut FieldSet, base: FieldId, to_index: usize) -> Result<OpResult> {
    if !set.contains(base) {
        return Err(FeedmapError::UnknownField(base));
    }

    let mut visible: Vec<FieldId> = view::visible_fields(set)
        .iter()
        .map(|field| field.id)
        .collect();

    let mut result = OpResult::default();
    let Some(from) = visible.iter().position(|&id| id == base) else {
        // The record exists but is hidden behind its primary; there is no
        // position in the view to move it to.
        result.add_message(OpMessage::warning(format!(
            "Field {} is hidden behind its partner; ordering unchanged",
            base
        )));
        return Ok(result);
    };

    visible.remove(from);
    let target = to_index.min(visible.len());
    visible.insert(target, base);

    for (position, id) in visible.iter().enumerate() {
        if let Some(field) = set.get_mut(*id) {
            field.order = position as u32;
        }
    }

    if let Some(field) = set.get(base) {
        result.affected.push(view::project(set, field));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawField;

    fn three_plain_fields() -> FieldSet {
        FieldSet::ingest(&[
            RawField::new("offer.a", 0).with_sample("A"),
            RawField::new("offer.b", 1).with_sample("B"),
            RawField::new("offer.c", 2).with_sample("C"),
        ])
    }

    fn visible_paths(set: &FieldSet) -> Vec<String> {
        view::visible_fields(set)
            .iter()
            .map(|field| field.path.clone())
            .collect()
    }

    fn visible_orders(set: &FieldSet) -> Vec<u32> {
        view::visible_fields(set)
            .iter()
            .map(|field| field.order)
            .collect()
    }

    #[test]
    fn moving_the_last_row_to_the_front_renumbers_densely() {
        let mut set = three_plain_fields();
        let last = set.find_by_path("offer.c").unwrap().id;

        run(&mut set, last, 0).unwrap();

        assert_eq!(visible_paths(&set), vec!["offer.c", "offer.a", "offer.b"]);
        assert_eq!(visible_orders(&set), vec![0, 1, 2]);
    }

    #[test]
    fn out_of_range_target_clamps_to_the_end() {
        let mut set = three_plain_fields();
        let first = set.find_by_path("offer.a").unwrap().id;

        run(&mut set, first, 999).unwrap();

        assert_eq!(visible_paths(&set), vec!["offer.b", "offer.c", "offer.a"]);
        assert_eq!(visible_orders(&set), vec![0, 1, 2]);
    }

    #[test]
    fn moving_to_the_current_position_still_normalizes_orders() {
        let mut set = FieldSet::ingest(&[
            RawField::new("offer.a", 10),
            RawField::new("offer.b", 20),
        ]);
        let first = set.find_by_path("offer.a").unwrap().id;

        run(&mut set, first, 0).unwrap();

        assert_eq!(visible_paths(&set), vec!["offer.a", "offer.b"]);
        // Sparse input orders collapse to dense positions.
        assert_eq!(visible_orders(&set), vec![0, 1]);
    }

    #[test]
    fn suppressed_records_keep_their_stored_order() {
        let mut set = FieldSet::ingest(&[
            RawField::new("currencies.currency.0.@id", 0).with_sample("USD"),
            RawField::new("currencies.currency.0.@rate", 1).with_sample("27.5"),
            RawField::new("offer.a", 2).with_sample("A"),
        ]);
        let plain = set.find_by_path("offer.a").unwrap().id;

        run(&mut set, plain, 0).unwrap();

        assert_eq!(visible_paths(&set), vec!["offer.a", "currencies.currency.0.@id"]);
        assert_eq!(visible_orders(&set), vec![0, 1]);
        // The hidden @rate was not renumbered.
        let rate = set.find_by_path("currencies.currency.0.@rate").unwrap();
        assert_eq!(rate.order, 1);
    }

    #[test]
    fn moving_a_suppressed_record_is_a_warning_no_op() {
        let mut set = FieldSet::ingest(&[
            RawField::new("currencies.currency.0.@id", 0).with_sample("USD"),
            RawField::new("currencies.currency.0.@rate", 1).with_sample("27.5"),
        ]);
        let rate = set.find_by_path("currencies.currency.0.@rate").unwrap().id;
        let before: Vec<u32> = set.fields().map(|field| field.order).collect();

        let result = run(&mut set, rate, 0).unwrap();

        let after: Vec<u32> = set.fields().map(|field| field.order).collect();
        assert_eq!(before, after);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("hidden"));
        assert!(result.affected.is_empty());
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut set = three_plain_fields();
        let err = run(&mut set, FieldId(42), 0).unwrap_err();
        assert!(matches!(err, FeedmapError::UnknownField(FieldId(42))));
    }

    #[test]
    fn single_row_move_is_stable() {
        let mut set = FieldSet::ingest(&[RawField::new("offer.a", 5)]);
        let only = set.find_by_path("offer.a").unwrap().id;

        run(&mut set, only, 3).unwrap();

        assert_eq!(visible_orders(&set), vec![0]);
    }

    #[test]
    fn affected_carries_the_moved_row() {
        let mut set = three_plain_fields();
        let last = set.find_by_path("offer.c").unwrap().id;

        let result = run(&mut set, last, 1).unwrap();

        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].base, last);
        assert_eq!(result.affected[0].display_value, "C");
    }
}
