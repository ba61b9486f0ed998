//! JSON input parser.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::model::{Document, Profile, ReferenceSheet, Resume};
use crate::render::Mode;

/// Parser for résumé and reference JSON data.
///
/// The raw text is held until [`DataParser::parse`] decides, from the mode,
/// which document shape to read it as.
pub struct DataParser {
    data: String,
}

impl DataParser {
    /// Read a data file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| Error::Input {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("read {} bytes from {}", data.len(), path.display());
        Ok(Self { data })
    }

    /// Use in-memory JSON text.
    pub fn from_text(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// Read JSON text from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Ok(Self { data })
    }

    /// Parse the data as the document kind `mode` calls for.
    ///
    /// Letter templates only need the profile, so the résumé sections are not
    /// required to be present.
    pub fn parse(&self, mode: Mode) -> Result<Document> {
        let doc = match mode {
            Mode::Resume => Document::Resume(self.parse_resume()?),
            Mode::References => Document::References(self.parse_references()?),
            Mode::Letter => Document::Letter(self.parse_profile()?),
        };
        Ok(doc)
    }

    /// Parse the data as a résumé.
    pub fn parse_resume(&self) -> Result<Resume> {
        Ok(serde_json::from_str(&self.data)?)
    }

    /// Parse the data as a reference sheet.
    pub fn parse_references(&self) -> Result<ReferenceSheet> {
        Ok(serde_json::from_str(&self.data)?)
    }

    /// Parse only the profile fields.
    pub fn parse_profile(&self) -> Result<Profile> {
        Ok(serde_json::from_str(&self.data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"{
        "name": "Jane Doe",
        "address": "1 Main St",
        "phone": "5551234567",
        "email": "jane@example.com"
    }"#;

    #[test]
    fn test_letter_needs_only_profile() {
        let doc = DataParser::from_text(PROFILE).parse(Mode::Letter).unwrap();
        assert!(matches!(doc, Document::Letter(ref p) if p.name == "Jane Doe"));
    }

    #[test]
    fn test_resume_missing_sections_is_error() {
        let err = DataParser::from_text(PROFILE)
            .parse(Mode::Resume)
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("education"));
    }

    #[test]
    fn test_references() {
        let json = r#"{
            "name": "Jane Doe",
            "address": "1 Main St",
            "phone": "5551234567",
            "email": "jane@example.com",
            "references": [
                {"name": "Bob", "relationship": "Manager", "email": "b@x.org", "phone": "5550001111"}
            ]
        }"#;
        let doc = DataParser::from_text(json).parse(Mode::References).unwrap();
        match doc {
            Document::References(sheet) => {
                assert_eq!(sheet.references.len(), 1);
                assert_eq!(sheet.references[0].relationship, "Manager");
            }
            other => panic!("unexpected document: {:?}", other),
        }
    }

    #[test]
    fn test_from_reader() {
        let parser = DataParser::from_reader(PROFILE.as_bytes()).unwrap();
        assert_eq!(parser.parse_profile().unwrap().email, "jane@example.com");
    }

    #[test]
    fn test_open_missing_file() {
        let result = DataParser::open("/nonexistent/resume.json");
        assert!(matches!(result, Err(Error::Input { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let err = DataParser::from_text("{ not json").parse(Mode::Letter).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
