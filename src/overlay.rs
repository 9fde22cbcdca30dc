use crate::constants::LOADER_SUFFIX;
use web_sys as web;

fn loader_element(document: &web::Document, canvas_id: &str) -> Option<web::Element> {
    document.get_element_by_id(&format!("{}{}", canvas_id, LOADER_SUFFIX))
}

/// Show the placeholder that sits over a canvas while its asset loads.
#[inline]
pub fn show_loader(document: &web::Document, canvas_id: &str) {
    if let Some(el) = loader_element(document, canvas_id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_loader(document: &web::Document, canvas_id: &str) {
    if let Some(el) = loader_element(document, canvas_id) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Leave the placeholder up but mark it as a static fallback.
pub fn mark_loader_failed(document: &web::Document, canvas_id: &str) {
    if let Some(el) = loader_element(document, canvas_id) {
        _ = el.class_list().add_1("failed");
        _ = el.set_attribute("data-state", "failed");
    }
}
