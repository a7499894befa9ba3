use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// Reasons a DOM operation could not run. None of these reach the visitor; callers log
/// them and carry on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    SectionNotFound(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(DomError::SectionNotFound("contact".into()).to_string(), "no element with id `contact`");
        assert_eq!(DomError::NoDocument.to_string(), "window has no document");
    }
}
