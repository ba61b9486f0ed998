//! Rendering options and configuration.

use crate::error::{Error, Result};

/// Column width used for wrapped text.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Style file pulled in by the LaTeX preamble.
pub const DEFAULT_PREAMBLE_FILE: &str = "common_preamble.tex";

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// LaTeX markup for typesetting
    #[default]
    Latex,
    /// Plain text
    Plaintext,
}

/// Which document to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Full résumé
    #[default]
    Resume,
    /// Reference sheet
    References,
    /// Letter template (preamble, header, postamble)
    Letter,
}

impl Mode {
    /// Resolve the mode from the two mutually exclusive command-line flags.
    pub fn from_flags(letter: bool, references: bool) -> Result<Self> {
        match (letter, references) {
            (true, true) => Err(Error::ConflictingModes),
            (true, false) => Ok(Mode::Letter),
            (false, true) => Ok(Mode::References),
            (false, false) => Ok(Mode::Resume),
        }
    }

    /// Input file read when none is given.
    pub fn default_input(&self) -> &'static str {
        match self {
            Mode::References => "references.json",
            Mode::Resume | Mode::Letter => "resume.json",
        }
    }
}

/// Options for rendering a document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Output format
    pub format: OutputFormat,

    /// Document kind
    pub mode: Mode,

    /// Style file referenced by the LaTeX preamble
    pub preamble_file: String,

    /// Width for wrapping lists and paragraphs (0 = no wrap)
    pub line_width: usize,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the document kind.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the LaTeX style file name.
    pub fn with_preamble_file(mut self, file: impl Into<String>) -> Self {
        self.preamble_file = file.into();
        self
    }

    /// Set line width for wrapping.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            mode: Mode::default(),
            preamble_file: DEFAULT_PREAMBLE_FILE.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}
