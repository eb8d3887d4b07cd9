//! Presentation of remote conflict verdicts and fixed tag-to-label mappings.
//!
//! The remote service is the only authority on whether a candidate interval
//! conflicts. This module maps its verdict onto a notification severity and
//! never re-derives or alters the verdict itself.

pub mod labels;
mod verdict;

pub use labels::{
    bar_class, bar_label, level_class, level_text, role_text, status_class, status_text,
    type_text, user_status_text,
};
pub use verdict::{
    presentation, CandidateCheck, ConflictType, ConflictVerdict, Presentation, Severity,
};
