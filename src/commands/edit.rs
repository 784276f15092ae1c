//! Applies a logical-row edit to the underlying record pair.
//!
//! Routing is keyed purely on the base record's category, mirroring how
//! projection reads the pair: for currencies and characteristics the name
//! lands on the base and the value on the partner, for categories the value
//! lands on the base (the id) and the name on the partner. Other rows accept
//! value edits only.

use crate::commands::{BatchOutcome, EditFailure, FieldEdit, OpMessage, OpResult};
use crate::error::{FeedmapError, Result};
use crate::fieldset::FieldSet;
use crate::model::{Category, FieldId};
use crate::pairing;
use crate::view;

pub fn run(set: &mut FieldSet, edit: &FieldEdit) -> Result<OpResult> {
    // Resolve everything before the first write; a failing edit must leave
    // the set exactly as it was.
    let base = set
        .get(edit.base)
        .ok_or(FeedmapError::UnknownField(edit.base))?;
    let category = base.category;
    let partner_id = pairing::resolve_partner(set, base).map(|partner| partner.id);
    let current = view::project(set, base);

    let mut result = OpResult::default();

    match category {
        Category::Currency | Category::Characteristic => {
            write_sample(set, edit.base, &edit.name);
            match partner_id {
                Some(partner) => write_sample(set, partner, &edit.value),
                None => result.add_message(OpMessage::info(format!(
                    "Field {} has no partner record; the value was not stored",
                    edit.base
                ))),
            }
        }
        Category::Category => {
            write_sample(set, edit.base, &edit.value);
            match partner_id {
                Some(partner) => write_sample(set, partner, &edit.name),
                None => result.add_message(OpMessage::info(format!(
                    "Field {} has no partner record; the name was not stored",
                    edit.base
                ))),
            }
        }
        Category::Other => {
            if edit.name != current.display_name {
                return Err(FeedmapError::UnsupportedRename(edit.base));
            }
            write_sample(set, edit.base, &edit.value);
        }
    }

    if let Some(base) = set.get(edit.base) {
        result.affected.push(view::project(set, base));
    }
    Ok(result)
}

/// Applies edits in order, collecting failures instead of stopping. Each
/// entry is individually atomic.
pub fn run_batch(set: &mut FieldSet, edits: &[FieldEdit]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for edit in edits {
        match run(set, edit) {
            Ok(result) => {
                outcome.result.affected.extend(result.affected);
                outcome.result.messages.extend(result.messages);
            }
            Err(error) => outcome.failures.push(EditFailure {
                edit: edit.clone(),
                error,
            }),
        }
    }
    outcome
}

fn write_sample(set: &mut FieldSet, id: FieldId, value: &str) {
    if let Some(field) = set.get_mut(id) {
        field.sample = Some(value.to_string());
    }
}
