//! LaTeX rendering.
//!
//! Page styles and the `\entry`/`\reference` macros live in a separate style
//! file that the preamble `\input`s; this renderer only emits the document
//! body around them.

use std::io::Write;

use log::warn;

use crate::error::Result;
use crate::model::{EducationEntry, ExperienceEntry, Metadata, Profile, ReferenceContact};

use super::links::phone_parts;
use super::options::{DEFAULT_LINE_WIDTH, DEFAULT_PREAMBLE_FILE};
use super::wrap::fill;
use super::Renderer;

/// Renderer producing a LaTeX document.
pub struct LatexRenderer<W: Write> {
    out: W,
    preamble_file: String,
    line_width: usize,
}

impl<W: Write> LatexRenderer<W> {
    /// Create a LaTeX renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            preamble_file: DEFAULT_PREAMBLE_FILE.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Set the style file the preamble `\input`s.
    pub fn with_preamble_file(mut self, file: impl Into<String>) -> Self {
        self.preamble_file = file.into();
        self
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

    fn format_name(&self, name: &str) -> String {
        format!(r"{{\Large\bfseries {}}}", name)
    }

    fn print_entry(&mut self, fields: [&str; 4]) -> Result<()> {
        let [a, b, c, d] = fields;
        let entry = format!("\\entry{{{}}}\n{{{}}}\n{{{}}}\n{{{}}}", a, b, c, d);
        self.print(&entry)
    }
}

/// `\hypersetup` keys in the order they are emitted.
fn hypersetup_tags(metadata: &Metadata) -> Vec<String> {
    let mut tags = Vec::new();
    if let Some(ref author) = metadata.author {
        tags.push(format!("pdfauthor={{{}}}", author));
    }
    if let Some(ref title) = metadata.title {
        tags.push(format!("pdftitle={{{}}}", title));
    }
    if let Some(ref subject) = metadata.subject {
        tags.push(format!("pdfsubject={{{}}}", subject));
    }
    if let Some(ref keywords) = metadata.keywords {
        tags.push(format!("pdfkeywords={{{}}}", keywords.join(", ")));
    }
    tags
}

impl<W: Write> Renderer for LatexRenderer<W> {
    fn out(&mut self) -> &mut dyn Write {
        &mut self.out
    }

    fn line_width(&self) -> usize {
        self.line_width
    }

    fn format_heading(&self, text: &str, level: u8) -> String {
        if level == 1 {
            format!(r"\section*{{{}}}", text)
        } else {
            format!(r"\textbf{{{}}}", text)
        }
    }

    fn format_list(&self, items: &[String]) -> String {
        let body = items
            .iter()
            .map(|item| fill(&format!(r"\item {}", item), self.line_width, "  "))
            .collect::<Vec<_>>()
            .join("\n");
        format!("\\begin{{itemize}}\n{}\n\\end{{itemize}}", body)
    }

    fn format_date_range(&self, start: &str, end: &str) -> String {
        format!("{}--{}", self.format_date(start), self.format_date(end))
    }

    fn format_phone(&self, phone: &str) -> String {
        match phone_parts(phone) {
            Some((area, exchange, line)) => format!(
                r"\href{{tel:+1{}}}{{({}) {}--{}}}",
                phone, area, exchange, line
            ),
            None => {
                warn!("phone number {:?} is not ten digits; leaving it as is", phone);
                phone.to_string()
            }
        }
    }

    fn format_email(&self, email: &str) -> String {
        format!(r"\href{{mailto:{0}}}{{{0}}}", email)
    }

    fn format_url(&self, url: &str) -> String {
        format!(r"\url{{{}}}", url)
    }

    fn print_preamble(&mut self, metadata: Option<&Metadata>) -> Result<()> {
        let opening = format!(
            "\\documentclass[10pt]{{article}}\n\\input{{{}}}",
            self.preamble_file
        );
        self.print(&opening)?;

        let tags = metadata.map(hypersetup_tags).unwrap_or_default();
        if !tags.is_empty() {
            let block = format!("\\hypersetup{{\n  {}\n}}", tags.join(",\n  "));
            self.print(&block)?;
        }

        self.print(r"\begin{document}")
    }

    fn print_postamble(&mut self) -> Result<()> {
        self.print(r"\end{document}")
    }

    fn print_header(&mut self, profile: &Profile) -> Result<()> {
        let header = format!(
            "\\begin{{center}}\n  {} \\\\\n  {} \\\\\n  {} \\\\\n  {}\n\\end{{center}}",
            self.format_name(&profile.name),
            profile.address,
            self.format_phone(&profile.phone),
            self.format_email(&profile.email),
        );
        self.print(&header)?;
        self.blank_line()
    }

    fn print_school(&mut self, school: &EducationEntry) -> Result<()> {
        let graduated = self.format_date(&school.graduated);
        let gpa = format!("Overall G.P.A.: {}", school.gpa);
        self.print_entry([&school.name, &graduated, &school.degree, &gpa])?;
        let awards = self.format_list_with_urls(&school.awards);
        self.print(&awards)
    }

    fn print_job(&mut self, job: &ExperienceEntry) -> Result<()> {
        let dates = self.format_date_range(&job.start, &job.end);
        self.print_entry([&job.title, &dates, &job.organization, &job.location])?;
        let accomplishments = self.format_list_with_urls(&job.accomplishments);
        self.print(&accomplishments)
    }

    fn print_reference(&mut self, reference: &ReferenceContact) -> Result<()> {
        let block = format!(
            "\\reference{{{}}}\n{{{}}}\n{{{}}}\n{{{}}}",
            reference.name,
            reference.relationship,
            self.format_email(&reference.email),
            self.format_phone(&reference.phone),
        );
        self.print(&block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> LatexRenderer<Vec<u8>> {
        LatexRenderer::new(Vec::new())
    }

    fn output(r: LatexRenderer<Vec<u8>>) -> String {
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn test_headings() {
        let r = renderer();
        assert_eq!(r.format_heading("Education", 1), r"\section*{Education}");
        assert_eq!(r.format_heading("Rust", 2), r"\textbf{Rust}");
    }

    #[test]
    fn test_phone() {
        let r = renderer();
        assert_eq!(
            r.format_phone("5551234567"),
            r"\href{tel:+15551234567}{(555) 123--4567}"
        );
        assert_eq!(r.format_phone("555-1234"), "555-1234");
    }

    #[test]
    fn test_email_and_url() {
        let r = renderer();
        assert_eq!(
            r.format_email("a@b.org"),
            r"\href{mailto:a@b.org}{a@b.org}"
        );
        assert_eq!(r.format_url("http://a.org"), r"\url{http://a.org}");
        assert_eq!(
            r.format_all_urls("see http://a.org."),
            r"see \url{http://a.org}."
        );
    }

    #[test]
    fn test_date_range() {
        assert_eq!(renderer().format_date_range("2019", "2021"), "2019--2021");
    }

    #[test]
    fn test_list() {
        let r = renderer();
        let items = vec!["one".to_string(), "two".to_string()];
        assert_eq!(
            r.format_list(&items),
            "\\begin{itemize}\n\\item one\n\\item two\n\\end{itemize}"
        );
    }

    #[test]
    fn test_empty_list_is_well_formed() {
        assert_eq!(
            renderer().format_list(&[]),
            "\\begin{itemize}\n\n\\end{itemize}"
        );
    }

    #[test]
    fn test_list_wraps_long_items() {
        let r = renderer().with_line_width(20);
        let items = vec!["alpha beta gamma delta".to_string()];
        assert_eq!(
            r.format_list(&items),
            "\\begin{itemize}\n\\item alpha beta\n  gamma delta\n\\end{itemize}"
        );
    }

    #[test]
    fn test_preamble_without_metadata() {
        let mut r = renderer();
        r.print_preamble(None).unwrap();
        assert_eq!(
            output(r),
            "\\documentclass[10pt]{article}\n\\input{common_preamble.tex}\n\\begin{document}\n"
        );
    }

    #[test]
    fn test_preamble_with_metadata() {
        let mut r = renderer().with_preamble_file("style.tex");
        let metadata = Metadata::new()
            .with_author("Jane Doe")
            .with_subject("Resume")
            .with_keywords(["rust", "latex"]);
        r.print_preamble(Some(&metadata)).unwrap();
        let out = output(r);
        assert!(out.contains(r"\input{style.tex}"));
        assert!(out.contains(
            "\\hypersetup{\n  pdfauthor={Jane Doe},\n  pdfsubject={Resume},\n  pdfkeywords={rust, latex}\n}\n\\begin{document}"
        ));
    }

    #[test]
    fn test_header() {
        let mut r = renderer();
        let profile = Profile::new("Jane Doe", "1 Main St", "5551234567", "jane@example.com");
        r.print_header(&profile).unwrap();
        let expected = "\\begin{center}\n  {\\Large\\bfseries Jane Doe} \\\\\n  1 Main St \\\\\n  \\href{tel:+15551234567}{(555) 123--4567} \\\\\n  \\href{mailto:jane@example.com}{jane@example.com}\n\\end{center}\n\n";
        assert_eq!(output(r), expected);
    }

    #[test]
    fn test_job_entry() {
        let mut r = renderer();
        let job = ExperienceEntry {
            title: "Engineer".into(),
            start: "2019".into(),
            end: "2021".into(),
            organization: "Acme".into(),
            location: "Remote".into(),
            accomplishments: vec!["Shipped https://acme.io/x".into()],
        };
        r.print_job(&job).unwrap();
        assert_eq!(
            output(r),
            "\\entry{Engineer}\n{2019--2021}\n{Acme}\n{Remote}\n\\begin{itemize}\n\\item Shipped \\url{https://acme.io/x}\n\\end{itemize}\n"
        );
    }

    #[test]
    fn test_school_entry() {
        let mut r = renderer();
        let school = EducationEntry {
            name: "State U".into(),
            graduated: "May 2018".into(),
            degree: "B.S.".into(),
            gpa: "3.9".into(),
            awards: vec!["Dean's list".into()],
        };
        r.print_school(&school).unwrap();
        let out = output(r);
        assert!(out.starts_with("\\entry{State U}\n{May 2018}\n{B.S.}\n{Overall G.P.A.: 3.9}\n"));
        assert!(out.contains("\\item Dean's list"));
    }

    #[test]
    fn test_reference_entry() {
        let mut r = renderer();
        let reference = ReferenceContact {
            name: "Bob".into(),
            relationship: "Manager".into(),
            email: "bob@x.org".into(),
            phone: "5550001111".into(),
        };
        r.print_reference(&reference).unwrap();
        assert_eq!(
            output(r),
            "\\reference{Bob}\n{Manager}\n{\\href{mailto:bob@x.org}{bob@x.org}}\n{\\href{tel:+15550001111}{(555) 000--1111}}\n"
        );
    }
}
