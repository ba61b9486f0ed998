//! # vitae
//!
//! Render résumé and reference data to LaTeX and plain text.
//!
//! Input is a JSON file describing a person and the sections of their
//! résumé (education, experience, skills, publications) or their list of
//! references. One traversal walks the sections in a fixed order and hands
//! every piece of formatting to a [`render::Renderer`], so each output
//! format only supplies its primitives.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vitae::{parse_file, render, Mode};
//!
//! fn main() -> vitae::Result<()> {
//!     let doc = parse_file("resume.json", Mode::Resume)?;
//!     println!("{}", render::to_plaintext(&doc)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two output formats**: LaTeX (with PDF metadata) and plain text
//! - **Three documents**: full résumé, reference sheet, letterhead template
//! - **Link detection**: URLs in free text are linked in LaTeX output
//! - **Word wrapping**: lists and summaries are filled to 80 columns

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Document, EducationEntry, ExperienceEntry, Metadata, Profile, Publication, ReferenceContact,
    ReferenceSheet, Resume, SkillGroup,
};
pub use parser::DataParser;
pub use render::{Mode, OutputFormat, RenderOptions, Renderer};

use std::fs::File;
use std::io::{self, BufWriter, Read};
use std::path::{Path, PathBuf};

use log::debug;

/// Parse a data file as the document kind `mode` calls for.
///
/// # Example
///
/// ```no_run
/// use vitae::{parse_file, Mode};
///
/// let doc = parse_file("references.json", Mode::References).unwrap();
/// println!("{}", doc.profile().name);
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P, mode: Mode) -> Result<Document> {
    DataParser::open(path)?.parse(mode)
}

/// Parse JSON text.
pub fn parse_str(data: &str, mode: Mode) -> Result<Document> {
    DataParser::from_text(data).parse(mode)
}

/// Parse JSON from a reader.
pub fn parse_reader<R: Read>(reader: R, mode: Mode) -> Result<Document> {
    DataParser::from_reader(reader)?.parse(mode)
}

/// Load a résumé file.
pub fn load_resume<P: AsRef<Path>>(path: P) -> Result<Resume> {
    DataParser::open(path)?.parse_resume()
}

/// Load a reference sheet file.
pub fn load_references<P: AsRef<Path>>(path: P) -> Result<ReferenceSheet> {
    DataParser::open(path)?.parse_references()
}

/// Load just the profile from a data file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    DataParser::open(path)?.parse_profile()
}

/// Builder tying input, rendering and output together.
///
/// # Example
///
/// ```no_run
/// use vitae::{Mode, Vitae};
///
/// Vitae::new()
///     .plaintext()
///     .mode(Mode::References)
///     .output("references.txt")
///     .run()?;
/// # Ok::<(), vitae::Error>(())
/// ```
pub struct Vitae {
    options: RenderOptions,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl Vitae {
    /// Create a new builder: LaTeX résumé from `resume.json` to stdout.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            input: None,
            output: None,
        }
    }

    /// Produce plain text instead of LaTeX.
    pub fn plaintext(mut self) -> Self {
        self.options = self.options.with_format(OutputFormat::Plaintext);
        self
    }

    /// Set the output format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.options = self.options.with_format(format);
        self
    }

    /// Set the document kind.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.options = self.options.with_mode(mode);
        self
    }

    /// Set the LaTeX style file name.
    pub fn preamble_file(mut self, file: impl Into<String>) -> Self {
        self.options = self.options.with_preamble_file(file);
        self
    }

    /// Set the input file. Defaults to the mode's usual file name.
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Set the output file. `-` or no call means standard output.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.output = if path.as_os_str() == "-" {
            None
        } else {
            Some(path)
        };
        self
    }

    /// The input file that will be read.
    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.options.mode.default_input()))
    }

    /// Load the input document.
    pub fn load(&self) -> Result<Document> {
        let path = self.input_path();
        debug!("loading {:?} data from {}", self.options.mode, path.display());
        parse_file(&path, self.options.mode)
    }

    /// Load the input and render it to a string.
    pub fn render_to_string(&self) -> Result<String> {
        let doc = self.load()?;
        render::to_string(&doc, &self.options)
    }

    /// Load the input and write the rendered document to the output.
    ///
    /// The output file is only created once the input has loaded.
    pub fn run(&self) -> Result<()> {
        let doc = self.load()?;
        match self.output {
            Some(ref path) => {
                debug!("writing {:?} output to {}", self.options.format, path.display());
                let file = File::create(path)?;
                render::render_to(&doc, &self.options, BufWriter::new(file))
            }
            None => render::render_to(&doc, &self.options, io::stdout().lock()),
        }
    }
}

impl Default for Vitae {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vitae_builder_defaults() {
        let vitae = Vitae::new();
        assert_eq!(vitae.options.format, OutputFormat::Latex);
        assert_eq!(vitae.options.mode, Mode::Resume);
        assert_eq!(vitae.input_path(), PathBuf::from("resume.json"));
        assert!(vitae.output.is_none());
    }

    #[test]
    fn test_vitae_builder_references_default_input() {
        let vitae = Vitae::new().mode(Mode::References);
        assert_eq!(vitae.input_path(), PathBuf::from("references.json"));
    }

    #[test]
    fn test_vitae_builder_chained() {
        let vitae = Vitae::new()
            .plaintext()
            .mode(Mode::Letter)
            .preamble_file("x.tex")
            .input("data.json")
            .output("out.txt");
        assert_eq!(vitae.options.format, OutputFormat::Plaintext);
        assert_eq!(vitae.options.preamble_file, "x.tex");
        assert_eq!(vitae.input_path(), PathBuf::from("data.json"));
        assert_eq!(vitae.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_dash_output_means_stdout() {
        let vitae = Vitae::new().output("-");
        assert!(vitae.output.is_none());
    }

    #[test]
    fn test_parse_str_letter() {
        let json = r#"{"name": "A", "address": "B", "phone": "5551234567", "email": "e"}"#;
        let doc = parse_str(json, Mode::Letter).unwrap();
        assert_eq!(doc.profile().name, "A");
    }

    #[test]
    fn test_missing_input_file() {
        let result = Vitae::new().input("/nonexistent/resume.json").run();
        assert!(matches!(result, Err(Error::Input { .. })));
    }
}
