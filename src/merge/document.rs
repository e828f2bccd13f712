//! Output document layout
//!
//! The merged document is, in order:
//!
//! ```text
//! ### AI Context            (only when a context is given)
//!
//! {context}
//!
//! {separator}
//!
//!
//! ### AI Prompt             (only when a prompt is given)
//!
//! {prompt}
//!
//! {separator}
//!
//!
//! # Merged Knowledge Base for AI
//!
//!
//! ## Article: {title}
//!
//!
//! {content}
//!
//! {separator}               (between articles only)
//!
//!
//! ## Article: {title}
//! ...
//! ```
//!
//! Article content is copied byte for byte; no trailing newline is added.

use std::io::{self, Write};

/// Heading of the optional context block
pub const CONTEXT_HEADING: &str = "### AI Context";

/// Heading of the optional prompt block
pub const PROMPT_HEADING: &str = "### AI Prompt";

/// Fixed document title
pub const DOCUMENT_TITLE: &str = "# Merged Knowledge Base for AI";

/// Prefix of each article heading
pub const ARTICLE_HEADING_PREFIX: &str = "## Article: ";

/// Streams the merged document into any writer
pub struct DocumentWriter<W: Write> {
    out: W,
    separator: String,
}

impl<W: Write> DocumentWriter<W> {
    pub fn new(out: W, separator: impl Into<String>) -> Self {
        Self {
            out,
            separator: separator.into(),
        }
    }

    /// Write the optional context and prompt blocks followed by the title
    pub fn write_header(&mut self, ai_context: &str, ai_prompt: &str) -> io::Result<()> {
        if !ai_context.is_empty() {
            self.write_block(CONTEXT_HEADING, ai_context)?;
        }
        if !ai_prompt.is_empty() {
            self.write_block(PROMPT_HEADING, ai_prompt)?;
        }
        write!(self.out, "{DOCUMENT_TITLE}\n\n\n")
    }

    /// Write one article heading and its verbatim content
    pub fn write_article(&mut self, title: &str, content: &str) -> io::Result<()> {
        write!(self.out, "{ARTICLE_HEADING_PREFIX}{title}\n\n\n")?;
        self.out.write_all(content.as_bytes())
    }

    /// Write the delimiter that separates two articles
    pub fn write_delimiter(&mut self) -> io::Result<()> {
        write!(self.out, "\n\n{}\n\n\n", self.separator)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_block(&mut self, heading: &str, body: &str) -> io::Result<()> {
        write!(self.out, "{heading}\n\n{body}\n\n{}\n\n\n", self.separator)
    }
}
