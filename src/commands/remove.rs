//! Removes a single record.
//!
//! Removal is record-level, not row-level: deleting a primary does not cascade
//! to its partner. The partner simply stops being suppressed and surfaces as
//! its own row in the next projection, which keeps removal lossless for
//! records the caller never saw.

use crate::commands::{OpMessage, OpResult};
use crate::error::Result;
use crate::fieldset::FieldSet;
use crate::model::FieldId;

pub fn run(set: &mut FieldSet, id: FieldId) -> Result<OpResult> {
    let removed = set.remove(id)?;

    let mut result = OpResult::default();
    result.add_message(OpMessage::success(format!(
        "Removed field {} ({})",
        id, removed.path
    )));
    Ok(result)
}
