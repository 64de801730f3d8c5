//! Copy element text to the system clipboard.
//!
//! Uses a selection range plus `document.execCommand("copy")`, which works
//! without the async Clipboard API permission prompt.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use super::dom;
use crate::core::error::ClipboardError;

/// Something that can copy an element's text. The controller depends on
/// this rather than on the DOM directly.
pub trait ClipboardWriter {
    fn copy_element_text(&self, element_id: &str) -> Result<(), ClipboardError>;
}

/// Clipboard access through the browser DOM.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomClipboard;

impl ClipboardWriter for DomClipboard {
    fn copy_element_text(&self, element_id: &str) -> Result<(), ClipboardError> {
        copy_element_text(element_id)
    }
}

/// Select the full text of `#element_id`, copy it, then clear the selection.
pub fn copy_element_text(element_id: &str) -> Result<(), ClipboardError> {
    let window = dom::window().ok_or(ClipboardError::NoDocument)?;
    let document = window.document().ok_or(ClipboardError::NoDocument)?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| ClipboardError::ElementNotFound(element_id.to_string()))?;

    let selection = window
        .get_selection()
        .ok()
        .flatten()
        .ok_or(ClipboardError::SelectionUnavailable)?;
    let range = document
        .create_range()
        .map_err(|_| ClipboardError::SelectionUnavailable)?;
    range
        .select_node_contents(&element)
        .map_err(|_| ClipboardError::SelectionUnavailable)?;
    selection
        .remove_all_ranges()
        .map_err(|_| ClipboardError::SelectionUnavailable)?;
    selection
        .add_range(&range)
        .map_err(|_| ClipboardError::SelectionUnavailable)?;

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or(ClipboardError::NoDocument)
        .map(|html| html.exec_command("copy"));

    let _ = selection.remove_all_ranges();

    match copied? {
        Ok(true) => Ok(()),
        _ => Err(ClipboardError::CopyRefused),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_element() {
        assert_eq!(
            copy_element_text("does-not-exist"),
            Err(ClipboardError::ElementNotFound("does-not-exist".to_string()))
        );
    }

    #[wasm_bindgen_test]
    fn test_selection_cleared_after_copy() {
        let window = dom::window().unwrap();
        let document = window.document().unwrap();
        let element = document.create_element("pre").unwrap();
        element.set_id("clipboard-test");
        element.set_text_content(Some("{\"short_name\":\"myapp\"}"));
        document.body().unwrap().append_child(&element).unwrap();

        // Headless browsers may refuse the copy; the selection must be gone either way.
        let _ = DomClipboard.copy_element_text("clipboard-test");

        let selection = window.get_selection().unwrap().unwrap();
        assert_eq!(selection.range_count(), 0);
        element.remove();
    }
}
