//! Appends a record to the set.
//!
//! The new record is classified like ingested ones and lands at the end of
//! the display order. If its path completes an existing pair it may vanish
//! from the view immediately; the result then carries the owning row instead,
//! so callers always get something renderable back.

use crate::commands::{NewField, OpMessage, OpResult};
use crate::fieldset::FieldSet;
use crate::model::RawField;
use crate::pairing;
use crate::view;

pub fn run(set: &mut FieldSet, new_field: NewField) -> OpResult {
    let raw = RawField {
        path: new_field.path,
        sample: new_field.sample,
        category: new_field.category,
        required: new_field.required,
        order: set.next_order(),
    };
    let id = set.insert_raw(raw);

    let mut result = OpResult::default();
    let Some(field) = set.get(id) else {
        return result;
    };

    if let Some(owner) = pairing::visible_owner(set, field) {
        result.add_message(OpMessage::info(format!(
            "Field {} completes the pair shown by field {}",
            id, owner.id
        )));
        result.affected.push(view::project(set, owner));
    } else {
        result.affected.push(view::project(set, field));
    }
    result
}
