//! # FeedmapApi: The Public Facade
//!
//! One struct owning one [`FieldSet`], with a method per operation. The
//! facade adds no logic of its own beyond id/position resolution; each method
//! is a thin delegation to the matching command, so embedders and tests hit
//! exactly the code paths a UI would.
//!
//! The intended session shape:
//!
//! ```text
//! parser output ──> FeedmapApi::ingest
//!                        │  logical_view / view_with
//!                        │  edit / edit_batch / move_field / add_field / remove_field
//!                        ▼
//!                   FeedmapApi::export ──> save endpoint
//! ```

use crate::commands::{self, BatchOutcome, FieldEdit, NewField, OpResult};
use crate::commands::audit::AuditReport;
use crate::commands::get::FieldFilter;
use crate::error::{FeedmapError, Result};
use crate::fieldset::FieldSet;
use crate::model::{Field, FieldId, RawField};
use crate::view::{self, LogicalField};

#[derive(Debug, Default)]
pub struct FeedmapApi {
    set: FieldSet,
}

impl FeedmapApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from the parser's flat list.
    pub fn ingest(raw: &[RawField]) -> Self {
        Self {
            set: FieldSet::ingest(raw),
        }
    }

    /// Starts a session from the parser's JSON payload: an array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawField> = serde_json::from_str(json)?;
        Ok(Self::ingest(&raw))
    }

    /// The full logical view in display order.
    pub fn logical_view(&self) -> Vec<LogicalField> {
        view::logical_fields(&self.set)
    }

    /// The logical view narrowed by a filter.
    pub fn view_with(&self, filter: &FieldFilter) -> Vec<LogicalField> {
        commands::get::run(&self.set, filter)
    }

    /// Direct record access by id, partner halves included.
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.set.get(id)
    }

    /// Re-projects a single record into its logical row.
    pub fn project_field(&self, id: FieldId) -> Result<LogicalField> {
        let field = self.set.get(id).ok_or(FeedmapError::UnknownField(id))?;
        Ok(view::project(&self.set, field))
    }

    /// Maps a 0-based position in the logical view to the record id behind
    /// it. This is how a UI turns "row 3" into a [`FieldId`] for an edit.
    pub fn resolve_position(&self, position: usize) -> Option<FieldId> {
        view::visible_fields(&self.set)
            .get(position)
            .map(|field| field.id)
    }

    pub fn edit(&mut self, edit: &FieldEdit) -> Result<OpResult> {
        commands::edit::run(&mut self.set, edit)
    }

    pub fn edit_batch(&mut self, edits: &[FieldEdit]) -> BatchOutcome {
        commands::edit::run_batch(&mut self.set, edits)
    }

    /// Moves the row backed by `base` to `to_index` in the logical view.
    pub fn move_field(&mut self, base: FieldId, to_index: usize) -> Result<OpResult> {
        commands::reorder::run(&mut self.set, base, to_index)
    }

    pub fn add_field(&mut self, new_field: NewField) -> OpResult {
        commands::add::run(&mut self.set, new_field)
    }

    pub fn remove_field(&mut self, id: FieldId) -> Result<OpResult> {
        commands::remove::run(&mut self.set, id)
    }

    /// Every record back in boundary shape, suppressed ones included.
    pub fn export(&self) -> Vec<RawField> {
        commands::export::run(&self.set)
    }

    /// The export list as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        commands::export::to_json(&self.set)
    }

    pub fn audit(&self) -> AuditReport {
        commands::audit::run(&self.set)
    }

    pub fn field_set(&self) -> &FieldSet {
        &self.set
    }

    /// Raw record count, suppressed ones included.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
