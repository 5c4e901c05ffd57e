use std::fmt;

use quick_xml::escape;

/// Escapes text for use in HTML content and double-quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    escape::escape(raw).into_owned()
}

/// HTML that has already been escaped and must be emitted as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeString(String);

impl SafeString {
    /// Wraps markup the caller has built from escaped parts.
    pub fn trusted(html: impl Into<String>) -> SafeString {
        SafeString(html.into())
    }

    pub fn escaped(raw: &str) -> SafeString {
        SafeString(escape_html(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a helper hands back to the template: either plain text, which still has to be
/// escaped on output, or finished markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelperOutput {
    Text(String),
    Safe(SafeString),
}

impl HelperOutput {
    pub fn empty() -> HelperOutput {
        HelperOutput::Text(String::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            HelperOutput::Text(text) => text.is_empty(),
            HelperOutput::Safe(html) => html.is_empty(),
        }
    }

    /// The string as the helper produced it, before output escaping.
    pub fn as_str(&self) -> &str {
        match self {
            HelperOutput::Text(text) => text,
            HelperOutput::Safe(html) => html.as_str(),
        }
    }

    pub fn to_html(&self) -> SafeString {
        match self {
            HelperOutput::Text(text) => SafeString::escaped(text),
            HelperOutput::Safe(html) => html.clone(),
        }
    }
}

impl From<String> for HelperOutput {
    fn from(value: String) -> Self {
        HelperOutput::Text(value)
    }
}

impl From<&str> for HelperOutput {
    fn from(value: &str) -> Self {
        HelperOutput::Text(value.to_string())
    }
}

impl From<SafeString> for HelperOutput {
    fn from(value: SafeString) -> Self {
        HelperOutput::Safe(value)
    }
}
