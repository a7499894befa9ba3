use log::{debug, log, Level};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::dom::{self, DomError};

/// Something that can find a page section by id and bring it into view.
pub trait SectionHost {
    type Section;

    fn find_section(&self, id: &str) -> Option<Self::Section>;

    /// Smooth-scrolls so the section's top edge meets the viewport's top edge.
    fn scroll_into_view(&self, section: &Self::Section);
}

impl SectionHost for Document {
    type Section = Element;

    fn find_section(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }

    fn scroll_into_view(&self, section: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn scroll_host_to<H: SectionHost>(host: &H, section_id: &str) -> Result<(), DomError> {
    let section = host
        .find_section(section_id)
        .ok_or_else(|| DomError::SectionNotFound(section_id.to_string()))?;
    host.scroll_into_view(&section);
    Ok(())
}

// Only a failing browser call is a warning. Everything else is an expected no-op.
fn skip_level(err: &DomError) -> Level {
    match err {
        DomError::NoWindow | DomError::NoDocument | DomError::SectionNotFound(_) => Level::Debug,
        DomError::Js(_) => Level::Warn,
    }
}

/// Scrolls the page to the element with `section_id`. Missing targets are ignored.
pub fn scroll_to_section(section_id: &str) {
    debug!("scroll to section: {}", section_id);
    if let Err(err) = dom::document().and_then(|document| scroll_host_to(&document, section_id)) {
        log!(skip_level(&err), "scroll to `{}` skipped: {}", section_id, err);
    }
}

pub fn scroll_callback(section_id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(section_id);
    })
}
