//! Rendered digest message.

/// Plain-text part sent alongside the HTML body.
pub const PLAIN_TEXT_FALLBACK: &str = "Your email client does not support HTML.";

/// Subject line and HTML body produced by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    subject: String,
    html_body: String,
}

impl RenderedEmail {
    /// Creates a rendered email.
    #[must_use]
    pub fn new(subject: impl Into<String>, html_body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            html_body: html_body.into(),
        }
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the HTML body.
    #[must_use]
    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    /// Returns the plain-text fallback body.
    #[must_use]
    pub const fn text_body(&self) -> &'static str {
        PLAIN_TEXT_FALLBACK
    }

    /// Splits the email into `(subject, html_body)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.subject, self.html_body)
    }
}
