//! # Path Conventions
//!
//! All pairing in feedmap rests on suffix conventions in the parser's
//! dot-joined paths. This module is the one place those conventions live;
//! everything above it works in terms of candidate lists, never raw suffix
//! checks.
//!
//! The forward direction ([`partner_candidates`]) answers "given this record,
//! which paths could hold its partner?", most specific first. The reverse
//! direction ([`primary_candidates`]) answers "which paths could hold a
//! primary that would claim this record as its partner?" and exists so that
//! visibility can be decided from the hidden record's side without scanning
//! the whole set.
//!
//! Matching is exact-case and segment-wise: `@id` is a full final segment,
//! never a substring, and `@ID` is a different (unrecognized) segment.

use crate::model::Category;

const ATTR_ID: &str = "@id";
const ATTR_RATE: &str = "@rate";
const ATTR_NAME: &str = "@name";
const TEXT_NODE: &str = "_text";

/// Splits a path into `(base, last segment)`. A single-segment path has an
/// empty base.
fn split_last(path: &str) -> (&str, &str) {
    match path.rfind('.') {
        Some(pos) => (&path[..pos], &path[pos + 1..]),
        None => ("", path),
    }
}

fn join(base: &str, segment: &str) -> String {
    if base.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", base, segment)
    }
}

/// Paths that could hold the partner of a record at `path`, in lookup order.
///
/// Category and Characteristic records list the bare base path as a second,
/// lower-priority candidate: some producers put the human-readable text on
/// the element itself instead of an explicit `_text` node.
pub fn partner_candidates(path: &str, category: Category) -> Vec<String> {
    let (base, last) = split_last(path);
    match category {
        Category::Currency => match last {
            ATTR_ID => vec![join(base, ATTR_RATE)],
            ATTR_RATE => vec![join(base, ATTR_ID)],
            _ => Vec::new(),
        },
        Category::Category => match last {
            ATTR_ID => {
                let mut candidates = vec![join(base, TEXT_NODE)];
                if !base.is_empty() {
                    candidates.push(base.to_string());
                }
                candidates
            }
            _ => Vec::new(),
        },
        Category::Characteristic => match last {
            ATTR_NAME => {
                let mut candidates = vec![join(base, TEXT_NODE)];
                if !base.is_empty() {
                    candidates.push(base.to_string());
                }
                candidates
            }
            TEXT_NODE => vec![join(base, ATTR_NAME)],
            _ => Vec::new(),
        },
        Category::Other => Vec::new(),
    }
}

/// Paths that could hold a primary record claiming the record at `path` as
/// its partner, in lookup order.
///
/// Mirrors [`partner_candidates`]: for every rule "primary at `p` looks for a
/// partner at `q`" there is a reverse entry here mapping `q` back to `p`. The
/// catch-all arms cover the bare-base fallback, where the partner path is the
/// element itself and the primary sits one attribute segment below it.
pub fn primary_candidates(path: &str, category: Category) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    let (base, last) = split_last(path);
    match category {
        Category::Currency => match last {
            ATTR_RATE => vec![join(base, ATTR_ID)],
            _ => Vec::new(),
        },
        Category::Category => match last {
            TEXT_NODE => vec![join(base, ATTR_ID)],
            _ => vec![join(path, ATTR_ID)],
        },
        Category::Characteristic => match last {
            TEXT_NODE => vec![join(base, ATTR_NAME)],
            _ => vec![join(path, ATTR_NAME)],
        },
        Category::Other => Vec::new(),
    }
}

/// Whether a record's path has the shape of a pair's hidden half: `@rate`
/// for currencies, `_text` for categories and characteristics.
///
/// Shape alone does not make a record hidden; the audit uses this to flag
/// secondary-shaped records that no primary claims.
pub fn is_secondary(path: &str, category: Category) -> bool {
    let (_, last) = split_last(path);
    match category {
        Category::Currency => last == ATTR_RATE,
        Category::Category | Category::Characteristic => last == TEXT_NODE,
        Category::Other => false,
    }
}

/// The final path segment, used as a display-name fallback.
pub fn last_segment(path: &str) -> &str {
    split_last(path).1
}

/// The last `n` segments re-joined, used for Other display names where a
/// single segment like `_text` would be meaningless.
pub fn tail_segments(path: &str, n: usize) -> String {
    let segments: Vec<&str> = path.split('.').collect();
    let start = segments.len().saturating_sub(n);
    segments[start..].join(".")
}
