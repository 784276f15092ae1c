//! # Command Layer
//!
//! Each submodule implements one verb over a [`FieldSet`](crate::fieldset::FieldSet):
//! a free `run` function taking the set plus the verb's arguments, returning
//! an [`OpResult`] (or a plain value for read-only verbs). Commands hold no
//! state and do no I/O; the caller owns the set and decides what to do with
//! the messages.
//!
//! [`OpResult`] separates data from commentary: `affected` carries the
//! re-projected logical rows a caller will want to re-render, `messages`
//! carries human-readable notes (a skipped write, a completed pair) that are
//! not errors. Hard failures use [`FeedmapError`](crate::error::FeedmapError)
//! instead.

use serde::Serialize;

use crate::error::FeedmapError;
use crate::model::FieldId;
use crate::view::LogicalField;

pub mod add;
pub mod audit;
pub mod edit;
pub mod export;
pub mod get;
pub mod remove;
pub mod reorder;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl OpMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a mutating command hands back: re-projected rows plus commentary.
#[derive(Debug, Default)]
pub struct OpResult {
    pub affected: Vec<LogicalField>,
    pub messages: Vec<OpMessage>,
}

impl OpResult {
    pub fn with_affected(mut self, affected: Vec<LogicalField>) -> Self {
        self.affected = affected;
        self
    }

    pub fn add_message(&mut self, message: OpMessage) {
        self.messages.push(message);
    }
}

/// One edit request against a logical row: the new name and value the editor
/// submitted for the row whose visible record is `base`.
#[derive(Debug, Clone)]
pub struct FieldEdit {
    pub base: FieldId,
    pub name: String,
    pub value: String,
}

impl FieldEdit {
    pub fn new(base: FieldId, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            base,
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Request shape for adding a record. The engine assigns `order` itself;
/// everything else mirrors the boundary record.
#[derive(Debug, Clone)]
pub struct NewField {
    pub path: String,
    pub sample: Option<String>,
    pub category: Option<String>,
    pub required: bool,
}

impl NewField {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sample: None,
            category: None,
            required: false,
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
}

/// A batch entry that could not be applied, kept alongside its cause so the
/// caller can report per-row outcomes.
#[derive(Debug)]
pub struct EditFailure {
    pub edit: FieldEdit,
    pub error: FeedmapError,
}

/// Outcome of a batch edit. Successful entries merge into `result`; failed
/// entries land in `failures` without stopping the rest of the batch.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub result: OpResult,
    pub failures: Vec<EditFailure>,
}
