//! Section entry types.

use serde::{Deserialize, Serialize};

/// A school in the education section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Institution name
    pub name: String,

    /// Graduation date, rendered verbatim
    pub graduated: String,

    /// Degree name
    pub degree: String,

    /// Overall grade point average, rendered verbatim
    pub gpa: String,

    /// Awards and designations, in input order
    pub awards: Vec<String>,
}

/// A job in the experience section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Job title
    pub title: String,

    /// Start date
    pub start: String,

    /// End date (or a word such as "Present")
    pub end: String,

    /// Employer
    pub organization: String,

    /// Location of the job
    pub location: String,

    /// Accomplishments, in input order
    #[serde(rename = "experiences")]
    pub accomplishments: Vec<String>,
}

/// A named group of skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Category name
    pub name: String,

    /// Free-text notes, in input order
    pub notes: Vec<String>,
}

/// A publication or presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub url: String,
}

/// A person listed on a reference sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceContact {
    /// Full name
    pub name: String,

    /// How the reference knows the subject
    pub relationship: String,

    pub email: String,

    pub phone: String,
}
