//! Rendering module for converting documents to the supported output formats.

mod latex;
mod links;
mod options;
mod renderer;
mod text;
pub mod traversal;
mod wrap;

pub use latex::LatexRenderer;
pub use links::{phone_parts, replace_urls};
pub use options::{Mode, OutputFormat, RenderOptions, DEFAULT_LINE_WIDTH, DEFAULT_PREAMBLE_FILE};
pub use renderer::Renderer;
pub use text::PlainTextRenderer;
pub use traversal::{write_document, write_letter, write_references, write_resume};
pub use wrap::fill;

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::Document;

/// Build the renderer selected by `options`, writing to `out`.
pub fn renderer_for<'a, W: Write + 'a>(options: &RenderOptions, out: W) -> Box<dyn Renderer + 'a> {
    match options.format {
        OutputFormat::Latex => Box::new(
            LatexRenderer::new(out)
                .with_preamble_file(options.preamble_file.clone())
                .with_line_width(options.line_width),
        ),
        OutputFormat::Plaintext => {
            Box::new(PlainTextRenderer::new(out).with_line_width(options.line_width))
        }
    }
}

/// Render a document to `out` with the format chosen in `options`.
pub fn render_to<W: Write>(doc: &Document, options: &RenderOptions, out: W) -> Result<()> {
    let mut renderer = renderer_for(options, out);
    write_document(renderer.as_mut(), doc)?;
    renderer.out().flush()?;
    Ok(())
}

/// Render a document to a string.
pub fn to_string(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut buffer = Vec::new();
    render_to(doc, options, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| Error::Render(format!("output is not UTF-8: {}", e)))
}

/// Render a document as LaTeX.
pub fn to_latex(doc: &Document) -> Result<String> {
    to_string(doc, &RenderOptions::new().with_format(OutputFormat::Latex))
}

/// Render a document as plain text.
pub fn to_plaintext(doc: &Document) -> Result<String> {
    to_string(doc, &RenderOptions::new().with_format(OutputFormat::Plaintext))
}
