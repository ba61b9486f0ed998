//! The formatting primitives every output format provides.
//!
//! A [`Renderer`] owns its output sink and knows how to format headings,
//! lists, dates, contact details and links for one output format. It also
//! prints the format-specific blocks for single entries (a school, a job, a
//! reference). The section traversal in [`super::traversal`] only talks to
//! this trait, so a new output format needs nothing beyond an implementation
//! of it.
//!
//! # Example
//!
//! ```
//! use vitae::render::{Renderer, PlainTextRenderer};
//!
//! let renderer = PlainTextRenderer::new(Vec::new());
//! assert_eq!(renderer.format_heading("Skills", 1), "Skills\n======");
//! assert_eq!(renderer.format_phone("5551234567"), "(555)123-4567");
//! ```

use std::io::Write;

use crate::error::Result;
use crate::model::{
    EducationEntry, ExperienceEntry, Metadata, Profile, ReferenceContact, SkillGroup,
};

use super::links::replace_urls;
use super::options::DEFAULT_LINE_WIDTH;
use super::wrap::fill;

/// Output format for résumé documents.
///
/// The `format_*` methods are pure and return formatted strings. The
/// `print_*` methods write to the renderer's sink. `print_preamble` and
/// `print_postamble` default to writing nothing.
pub trait Renderer {
    /// The sink this renderer writes to.
    fn out(&mut self) -> &mut dyn Write;

    /// Column width for wrapped text.
    fn line_width(&self) -> usize {
        DEFAULT_LINE_WIDTH
    }

    /// Format a section heading (level 1) or subsection heading (level 2).
    fn format_heading(&self, text: &str, level: u8) -> String;

    /// Format items as a bulleted list, wrapping each item.
    fn format_list(&self, items: &[String]) -> String;

    /// Format a single date.
    fn format_date(&self, date: &str) -> String {
        date.to_string()
    }

    /// Format a start/end date pair.
    fn format_date_range(&self, start: &str, end: &str) -> String;

    /// Format a ten-digit phone number.
    ///
    /// Anything that is not exactly ten digits is returned unchanged.
    fn format_phone(&self, phone: &str) -> String;

    /// Format an email address, linking it where the format allows.
    fn format_email(&self, email: &str) -> String;

    /// Format a URL, linking it where the format allows.
    fn format_url(&self, url: &str) -> String;

    /// Apply [`Renderer::format_url`] to every URL embedded in `text`.
    fn format_all_urls(&self, text: &str) -> String {
        replace_urls(text, |url| self.format_url(url))
    }

    /// Format the free-text summary paragraph.
    fn format_summary(&self, summary: &str) -> String {
        fill(&self.format_all_urls(summary), self.line_width(), "")
    }

    /// Write `text` followed by a newline.
    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.out(), "{}", text)?;
        Ok(())
    }

    /// Write an empty line.
    fn blank_line(&mut self) -> Result<()> {
        self.print("")
    }

    /// Write whatever must open the document.
    fn print_preamble(&mut self, metadata: Option<&Metadata>) -> Result<()> {
        let _ = metadata;
        Ok(())
    }

    /// Write whatever must close the document.
    fn print_postamble(&mut self) -> Result<()> {
        Ok(())
    }

    /// Write the letterhead: name, address, phone and email.
    fn print_header(&mut self, profile: &Profile) -> Result<()>;

    /// Write one education entry.
    fn print_school(&mut self, school: &EducationEntry) -> Result<()>;

    /// Write one experience entry.
    fn print_job(&mut self, job: &ExperienceEntry) -> Result<()>;

    /// Write one skill group as a subheading and a list of notes.
    fn print_skill(&mut self, skill: &SkillGroup) -> Result<()> {
        let heading = self.format_heading(&skill.name, 2);
        self.print(&heading)?;
        let notes = self.format_list_with_urls(&skill.notes);
        self.print(&notes)
    }

    /// Write one reference.
    fn print_reference(&mut self, reference: &ReferenceContact) -> Result<()>;

    /// Format free-text items as a list after formatting their URLs.
    fn format_list_with_urls(&self, items: &[String]) -> String {
        let items: Vec<String> = items.iter().map(|i| self.format_all_urls(i)).collect();
        self.format_list(&items)
    }
}
