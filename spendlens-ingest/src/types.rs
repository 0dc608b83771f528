use serde::{Deserialize, Serialize};

/// A positioned glyph run from the PDF text extractor.
///
/// Coordinates follow the PDF convention: origin at the bottom-left of the
/// page, so larger `y` means closer to the top.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextFragment {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// One page's fragments, in the order the extractor produced them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Page {
    pub fragments: Vec<TextFragment>,
}

impl Page {
    pub fn new(fragments: Vec<TextFragment>) -> Self {
        Self { fragments }
    }
}
