//! Plain text rendering.

use std::io::Write;

use log::warn;

use crate::error::Result;
use crate::model::{EducationEntry, ExperienceEntry, Profile, ReferenceContact};

use super::links::phone_parts;
use super::options::DEFAULT_LINE_WIDTH;
use super::wrap::fill;
use super::Renderer;

/// Renderer producing plain text with underlined headings.
pub struct PlainTextRenderer<W: Write> {
    out: W,
    line_width: usize,
}

impl<W: Write> PlainTextRenderer<W> {
    /// Create a plain text renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Set the wrap width for lists and the summary.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Consume the renderer and return its sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_field(&mut self, label: &str, value: &str) -> Result<()> {
        self.print(&format!("{}: {}", label, value))
    }
}

impl<W: Write> Renderer for PlainTextRenderer<W> {
    fn out(&mut self) -> &mut dyn Write {
        &mut self.out
    }

    fn line_width(&self) -> usize {
        self.line_width
    }

    fn format_heading(&self, text: &str, level: u8) -> String {
        let underline = if level == 1 { "=" } else { "-" };
        format!("{}\n{}", text, underline.repeat(text.chars().count()))
    }

    fn format_list(&self, items: &[String]) -> String {
        items
            .iter()
            .map(|item| fill(&format!("* {}", item), self.line_width, "  "))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_date_range(&self, start: &str, end: &str) -> String {
        format!("{} - {}", self.format_date(start), self.format_date(end))
    }

    fn format_phone(&self, phone: &str) -> String {
        match phone_parts(phone) {
            Some((area, exchange, line)) => format!("({}){}-{}", area, exchange, line),
            None => {
                warn!("phone number {:?} is not ten digits; leaving it as is", phone);
                phone.to_string()
            }
        }
    }

    fn format_email(&self, email: &str) -> String {
        email.to_string()
    }

    fn format_url(&self, url: &str) -> String {
        url.to_string()
    }

    fn print_header(&mut self, profile: &Profile) -> Result<()> {
        self.print(&profile.name)?;
        self.print_field("Address", &profile.address)?;
        let phone = self.format_phone(&profile.phone);
        self.print_field("Phone", &phone)?;
        let email = self.format_email(&profile.email);
        self.print_field("Email", &email)?;
        self.blank_line()
    }

    fn print_school(&mut self, school: &EducationEntry) -> Result<()> {
        let heading = self.format_heading(&school.name, 2);
        self.print(&heading)?;
        let graduated = self.format_date(&school.graduated);
        self.print_field("Graduated", &graduated)?;
        self.print_field("Degree", &school.degree)?;
        self.print_field("Overall G.P.A.", &school.gpa)?;
        self.print("Awards and designations:")?;
        let awards = self.format_list_with_urls(&school.awards);
        self.print(&awards)
    }

    fn print_job(&mut self, job: &ExperienceEntry) -> Result<()> {
        let title = format!(
            "{} ({})",
            job.title,
            self.format_date_range(&job.start, &job.end)
        );
        let heading = self.format_heading(&title, 2);
        self.print(&heading)?;
        self.print_field("Organization", &job.organization)?;
        self.print_field("Location", &job.location)?;
        let accomplishments = self.format_list_with_urls(&job.accomplishments);
        self.print(&accomplishments)
    }

    fn print_reference(&mut self, reference: &ReferenceContact) -> Result<()> {
        let heading = self.format_heading(&reference.name, 2);
        self.print(&heading)?;
        self.print_field("Relationship", &reference.relationship)?;
        let email = self.format_email(&reference.email);
        self.print_field("Email", &email)?;
        let phone = self.format_phone(&reference.phone);
        self.print_field("Phone", &phone)
    }
}
