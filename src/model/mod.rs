//! Data model for résumé and reference records.
//!
//! Records are deserialized once from the input file and treated as
//! read-only for the rest of the run. Every entry sequence keeps input order.

mod document;
mod entry;
mod profile;

pub use document::{Document, ReferenceSheet, Resume};
pub use entry::{EducationEntry, ExperienceEntry, Publication, ReferenceContact, SkillGroup};
pub use profile::{Metadata, Profile};
