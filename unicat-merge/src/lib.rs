//! Multi-source merge for university catalogs.
//!
//! Sources are folded in ascending precedence order into one catalog:
//!
//! - Universities are keyed by `id` and kept in first-seen order.
//! - Faculties are keyed by their trimmed, lower-cased name within a
//!   university. The first-seen spelling is kept.
//! - Degrees are keyed by `id` within a faculty. Collections are unioned,
//!   never replaced: a later degree whose id already exists is dropped.
//! - Scalar fields follow last-non-empty-wins (see [`Presence`]).
//!
//! Merging is deterministic and idempotent: `merge(&[merge(s)]) == merge(s)`.
//! Records without identity are skipped and reported as
//! [`Diagnostic`](unicat_types::Diagnostic)s; merging never fails.

mod faculty;
mod merger;
mod policy;
mod university;

pub use faculty::faculty_key;
pub use merger::{merge, merge_sources, CatalogMerger, MergeOutcome, Source};
pub use policy::{overlay, Presence};
