//! Document-level types.

use super::{
    EducationEntry, ExperienceEntry, Metadata, Profile, Publication, ReferenceContact, SkillGroup,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A full résumé.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// Contact details, summary and metadata
    #[serde(flatten)]
    pub profile: Profile,

    pub education: Vec<EducationEntry>,

    pub experience: Vec<ExperienceEntry>,

    pub skills: Vec<SkillGroup>,

    pub publications: Vec<Publication>,
}

impl Resume {
    /// Create a résumé with empty sections.
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            ..Default::default()
        }
    }

    /// The summary text, which a résumé cannot be rendered without.
    pub fn summary(&self) -> Result<&str> {
        self.profile
            .summary
            .as_deref()
            .ok_or_else(|| Error::MissingField("summary".to_string()))
    }
}

/// A reference sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSheet {
    /// Contact details and metadata
    #[serde(flatten)]
    pub profile: Profile,

    pub references: Vec<ReferenceContact>,
}

impl ReferenceSheet {
    /// Create a reference sheet with no references.
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            references: Vec::new(),
        }
    }
}

/// A document to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// Full résumé
    Resume(Resume),

    /// Reference sheet
    References(ReferenceSheet),

    /// Letter template: the header alone
    Letter(Profile),
}

impl Document {
    /// The profile heading this document.
    pub fn profile(&self) -> &Profile {
        match self {
            Document::Resume(resume) => &resume.profile,
            Document::References(sheet) => &sheet.profile,
            Document::Letter(profile) => profile,
        }
    }

    /// Metadata to embed in the preamble.
    ///
    /// Letter templates carry no metadata.
    pub fn metadata(&self) -> Option<Metadata> {
        match self {
            Document::Letter(_) => None,
            _ => Some(self.profile().document_metadata()),
        }
    }
}
