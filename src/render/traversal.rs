//! Section-by-section walk over a document.
//!
//! The functions here fix the section order and spacing for every output
//! format. They depend only on the [`Renderer`] trait.

use log::debug;

use crate::error::Result;
use crate::model::{Document, Profile, Publication, ReferenceSheet, Resume};

use super::Renderer;

pub(crate) const SUMMARY: &str = "Summary";
pub(crate) const EDUCATION: &str = "Education";
pub(crate) const EXPERIENCE: &str = "Experience";
pub(crate) const SKILLS: &str = "Skills";
pub(crate) const PUBLICATIONS: &str = "Publications and presentations";
pub(crate) const REFERENCES: &str = "References";

/// Render any document kind.
pub fn write_document<R: Renderer + ?Sized>(renderer: &mut R, doc: &Document) -> Result<()> {
    match doc {
        Document::Resume(resume) => write_resume(renderer, resume),
        Document::References(sheet) => write_references(renderer, sheet),
        Document::Letter(profile) => write_letter(renderer, profile),
    }
}

/// Render a full résumé.
pub fn write_resume<R: Renderer + ?Sized>(renderer: &mut R, resume: &Resume) -> Result<()> {
    let summary = resume.summary()?;
    let metadata = resume.profile.document_metadata();

    renderer.print_preamble(Some(&metadata))?;
    renderer.print_header(&resume.profile)?;

    write_heading(renderer, SUMMARY)?;
    let summary = renderer.format_summary(summary);
    renderer.print(&summary)?;
    renderer.blank_line()?;

    write_section(renderer, EDUCATION, &resume.education, |r, school| {
        r.print_school(school)
    })?;
    write_section(renderer, EXPERIENCE, &resume.experience, |r, job| {
        r.print_job(job)
    })?;
    write_section(renderer, SKILLS, &resume.skills, |r, skill| {
        r.print_skill(skill)
    })?;
    write_publications(renderer, &resume.publications)?;

    renderer.print_postamble()?;
    debug!(
        "rendered resume for {} ({} education, {} experience, {} skills, {} publications)",
        resume.profile.name,
        resume.education.len(),
        resume.experience.len(),
        resume.skills.len(),
        resume.publications.len()
    );
    Ok(())
}

/// Render a reference sheet.
pub fn write_references<R: Renderer + ?Sized>(
    renderer: &mut R,
    sheet: &ReferenceSheet,
) -> Result<()> {
    let metadata = sheet.profile.document_metadata();

    renderer.print_preamble(Some(&metadata))?;
    renderer.print_header(&sheet.profile)?;
    write_section(renderer, REFERENCES, &sheet.references, |r, reference| {
        r.print_reference(reference)
    })?;
    renderer.print_postamble()?;

    debug!("rendered {} references", sheet.references.len());
    Ok(())
}

/// Render a letter template: preamble, header and postamble only.
pub fn write_letter<R: Renderer + ?Sized>(renderer: &mut R, profile: &Profile) -> Result<()> {
    renderer.print_preamble(None)?;
    renderer.print_header(profile)?;
    renderer.print_postamble()?;
    debug!("rendered letter template for {}", profile.name);
    Ok(())
}

fn write_heading<R: Renderer + ?Sized>(renderer: &mut R, text: &str) -> Result<()> {
    let heading = renderer.format_heading(text, 1);
    renderer.print(&heading)
}

/// Heading, then each entry followed by one blank line.
fn write_section<R, T, F>(
    renderer: &mut R,
    heading: &str,
    entries: &[T],
    mut entry: F,
) -> Result<()>
where
    R: Renderer + ?Sized,
    F: FnMut(&mut R, &T) -> Result<()>,
{
    write_heading(renderer, heading)?;
    for item in entries {
        entry(&mut *renderer, item)?;
        renderer.blank_line()?;
    }
    Ok(())
}

fn write_publications<R: Renderer + ?Sized>(
    renderer: &mut R,
    publications: &[Publication],
) -> Result<()> {
    write_heading(renderer, PUBLICATIONS)?;
    let items: Vec<String> = publications
        .iter()
        .map(|p| format!("{} ({})", p.title, renderer.format_url(&p.url)))
        .collect();
    let list = renderer.format_list(&items);
    renderer.print(&list)?;
    renderer.blank_line()
}
