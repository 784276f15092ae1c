//! # FieldSet: The Owned Record Collection
//!
//! A [`FieldSet`] owns every record of one feed for one editing session. It is
//! built once from the parser's flat list ([`FieldSet::ingest`]), mutated only
//! through the command layer, and drained back to boundary shape by the export
//! command.
//!
//! Records live in an insertion-ordered map keyed by [`FieldId`]. Ids come
//! from a monotonic counter starting at 1 and are never reused, even after
//! removals; insertion order is preserved so that ingest order remains an
//! observable tiebreaker wherever `order` values collide.

use indexmap::IndexMap;

use crate::error::{FeedmapError, Result};
use crate::model::{Field, FieldId, RawField};

#[derive(Debug)]
pub struct FieldSet {
    fields: IndexMap<FieldId, Field>,
    next_id: u64,
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSet {
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Builds a set from the parser's flat list. The input is cloned, never
    /// mutated; ids are assigned in list order.
    pub fn ingest(raw: &[RawField]) -> Self {
        let mut set = Self::new();
        for record in raw {
            set.insert_raw(record.clone());
        }
        set
    }

    pub(crate) fn insert_raw(&mut self, raw: RawField) -> FieldId {
        let id = FieldId(self.next_id);
        self.next_id += 1;
        self.fields.insert(id, Field::from_raw(id, raw));
        id
    }

    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.get_mut(&id)
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// All records in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// All records sorted by `(order, id)`. The id tiebreaker keeps the sort
    /// total, so duplicate orders cannot make display or export
    /// nondeterministic.
    pub fn in_display_order(&self) -> Vec<&Field> {
        let mut ordered: Vec<&Field> = self.fields.values().collect();
        ordered.sort_by_key(|field| (field.order, field.id));
        ordered
    }

    /// The record at `path` with the lowest `(order, id)`, if any. Duplicate
    /// paths are legal in real feeds; this picks one deterministically.
    pub fn find_by_path(&self, path: &str) -> Option<&Field> {
        self.fields
            .values()
            .filter(|field| field.path == path)
            .min_by_key(|field| (field.order, field.id))
    }

    /// Removes a record outright. The freed id is not reused.
    pub fn remove(&mut self, id: FieldId) -> Result<Field> {
        self.fields
            .shift_remove(&id)
            .ok_or(FeedmapError::UnknownField(id))
    }

    /// The order value an appended record should get: one past the current
    /// maximum, or 0 for an empty set.
    pub fn next_order(&self) -> u32 {
        self.fields
            .values()
            .map(|field| field.order)
            .max()
            .map_or(0, |max| max + 1)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
