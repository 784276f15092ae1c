//! # Feedmap Architecture
//!
//! Feedmap takes the flat `(path, sample)` records a marketplace feed parser
//! produces, infers which records are two halves of one logical field (a
//! currency's code and rate, a category's id and display name, a
//! characteristic's name and value), and presents the result as an editable
//! list that serializes back to the exact boundary shape it came from.
//!
//! The crate is a pure in-memory engine: no file or network I/O, no XML
//! parsing, no persistence. It is layered so that every rule lives in exactly
//! one place:
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ api::FeedmapApi                            │  facade: one method per verb
//! ├────────────────────────────────────────────┤
//! │ commands::{get, edit, reorder, add,        │  business logic: free `run`
//! │            remove, export, audit}          │  functions over the set
//! ├─────────────────────┬──────────────────────┤
//! │ view  (projection)  │ pairing (resolution) │  read model
//! ├─────────────────────┴──────────────────────┤
//! │ fieldset::FieldSet                         │  owned records, id arena
//! ├────────────────────────────────────────────┤
//! │ model (types, classification) · paths      │  pure rules, no collection
//! └────────────────────────────────────────────┘
//! ```
//!
//! ## Reading order
//!
//! - [`model`] defines [`RawField`](model::RawField) (the boundary shape),
//!   [`Field`](model::Field) (the owned record), and category classification.
//! - [`paths`] owns the suffix conventions that make pairing possible.
//! - [`fieldset`] owns the records and the deterministic lookup rules.
//! - [`pairing`] and [`view`] derive the logical view; nothing is cached.
//! - [`commands`] mutate or query the set and report through
//!   [`OpResult`](commands::OpResult).
//! - [`api`] strings it all together for embedders.
//!
//! ## Determinism
//!
//! Real feeds contain duplicate paths and colliding order values. Rather than
//! reject them, every choice point is total: lookups break ties by
//! `(order, id)`, display and export sort by the same key, and ids are never
//! reused. The same input and edit sequence always produces the same output.

pub mod api;
pub mod commands;
pub mod error;
pub mod fieldset;
pub mod model;
pub mod pairing;
pub mod paths;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
