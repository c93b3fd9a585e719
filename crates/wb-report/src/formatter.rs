//! Document rendering: Markdown and HTML output.

use crate::document::{Block, ReportDoc};

/// Output format for compiled reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Html,
}

impl OutputFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
        }
    }
}

/// Render a report document in the specified output format.
#[must_use]
pub fn render(doc: &ReportDoc, format: OutputFormat) -> String {
    match format {
        OutputFormat::Markdown => render_markdown(doc),
        OutputFormat::Html => render_html(doc),
    }
}

fn render_markdown(doc: &ReportDoc) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            Block::Title(text) => {
                out.push_str(&format!("# {text}\n\n"));
            }
            Block::DateLine(date) => {
                out.push_str(&format!("*{date}*\n\n"));
            }
            Block::TocEntry { position, text } => {
                out.push_str(&format!("{position}. {text}\n"));
            }
            Block::Heading { level, text, accent } => {
                // Shift one level down: the document title owns `#`.
                let marks = "#".repeat(usize::from(*level) + 1);
                if *accent {
                    out.push_str(&format!("{marks} **{text}**\n\n"));
                } else {
                    out.push_str(&format!("{marks} {text}\n\n"));
                }
            }
            Block::Paragraph(text) => {
                out.push_str(text);
                out.push_str("\n\n");
            }
            Block::Placeholder(label) => {
                out.push_str(&format!("*{label}*\n\n"));
            }
            Block::PageBreak => {
                out.push_str("\n---\n\n");
            }
        }
    }
    out
}

fn render_html(doc: &ReportDoc) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>Rapportage week {}</title>\n</head>\n<body>\n",
        doc.week
    ));
    let mut in_toc = false;
    for block in &doc.blocks {
        if in_toc && !matches!(block, Block::TocEntry { .. }) {
            out.push_str("</ol>\n");
            in_toc = false;
        }
        match block {
            Block::Title(text) => {
                out.push_str(&format!("<h1 class=\"title\">{}</h1>\n", escape(text)));
            }
            Block::DateLine(date) => {
                out.push_str(&format!("<p class=\"date\">{}</p>\n", escape(date)));
            }
            Block::TocEntry { text, .. } => {
                if !in_toc {
                    out.push_str("<ol class=\"toc\">\n");
                    in_toc = true;
                }
                out.push_str(&format!("<li>{}</li>\n", escape(text)));
            }
            Block::Heading { level, text, accent } => {
                let tag = if *level == 1 { "h2" } else { "h3" };
                let class = if *accent { " class=\"accent\"" } else { "" };
                out.push_str(&format!("<{tag}{class}>{}</{tag}>\n", escape(text)));
            }
            Block::Paragraph(text) => {
                out.push_str(&format!("<p>{}</p>\n", escape(text)));
            }
            Block::Placeholder(label) => {
                out.push_str(&format!("<p class=\"placeholder\">{}</p>\n", escape(label)));
            }
            Block::PageBreak => {
                out.push_str("<div style=\"page-break-after:always\"></div>\n");
            }
        }
    }
    if in_toc {
        out.push_str("</ol>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
