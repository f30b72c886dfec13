//! Thin helpers over the server-rendered page DOM.
//!
//! Every helper is a no-op (or returns an empty value) when the target element is missing, and
//! on non-wasm targets, so components can call them unconditionally.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// How a filterable row exposes its searchable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFields {
    /// Text of the first element matching each selector inside the row.
    Selectors(&'static [&'static str]),
    /// Text of the first `n` table cells of the row.
    LeadingCells(u32),
}

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

#[cfg(target_arch = "wasm32")]
fn html_element(id: &str) -> Option<web_sys::HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Returns `true` when an element matches `selector`.
pub fn element_exists(selector: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        document()
            .and_then(|document| document.query_selector(selector).ok().flatten())
            .is_some()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = selector;
        false
    }
}

/// Replaces the text content of `#id`.
pub fn set_text(id: &str, text: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = document().and_then(|document| document.get_element_by_id(id)) {
            element.set_text_content(Some(text));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, text);
}

/// Returns the text content of `#id`.
pub fn text_of(id: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        document()?.get_element_by_id(id)?.text_content()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

/// Sets the inline `display` style of `#id`.
pub fn set_display(id: &str, display: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = html_element(id) {
            let _ = element.style().set_property("display", display);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, display);
}

/// Sets the inline `display` style of the parent of `#id`.
pub fn set_parent_display(id: &str, display: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(parent) = html_element(id)
            .and_then(|element| element.parent_element())
            .and_then(|parent| parent.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = parent.style().set_property("display", display);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, display);
}

/// Sets attribute `name` on `#id`.
pub fn set_attribute(id: &str, name: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = document().and_then(|document| document.get_element_by_id(id)) {
            let _ = element.set_attribute(name, value);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, name, value);
}

/// Removes attribute `name` from `#id`.
pub fn remove_attribute(id: &str, name: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = document().and_then(|document| document.get_element_by_id(id)) {
            let _ = element.remove_attribute(name);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, name);
}

/// Sets attribute `name` on the root `<html>` element.
pub fn set_root_attribute(name: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = document().and_then(|document| document.document_element()) {
            let _ = root.set_attribute(name, value);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (name, value);
}

/// Adds `class` to `#id`.
pub fn add_class(id: &str, class: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = document().and_then(|document| document.get_element_by_id(id)) {
            let _ = element.class_list().add_1(class);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, class);
}

/// Removes `class` from `#id`.
pub fn remove_class(id: &str, class: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = document().and_then(|document| document.get_element_by_id(id)) {
            let _ = element.class_list().remove_1(class);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, class);
}

/// Toggles `class` on `#id`; returns whether the class is now present.
pub fn toggle_class(id: &str, class: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        document()
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.class_list().toggle(class).ok())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (id, class);
        false
    }
}

/// Replaces the children of `#id` with a single link.
pub fn replace_with_link(id: &str, href: &str, text: &str, class: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = document() else {
            return;
        };
        let Some(container) = document.get_element_by_id(id) else {
            return;
        };
        let Ok(link) = document.create_element("a") else {
            return;
        };
        let _ = link.set_attribute("href", href);
        let _ = link.set_attribute("target", "_blank");
        let _ = link.set_attribute("class", class);
        link.set_text_content(Some(text));
        container.set_text_content(None);
        let _ = container.append_child(&link);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, href, text, class);
}

/// Returns the current value of the `<input id=id>`.
pub fn input_value(id: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()
            .map(|input| input.value())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

/// Sets the checked state of the checkbox `#id`.
pub fn set_checked(id: &str, checked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(input) = document()
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.set_checked(checked);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, checked);
}

/// Returns whether the checkbox `#id` is checked.
pub fn is_checked(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        document()
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok())
            .is_some_and(|input| input.checked())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

/// Sets the disabled flag and label of the button `#id`.
pub fn set_button_busy(id: &str, disabled: bool, label: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(button) = document()
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlButtonElement>().ok())
        {
            button.set_disabled(disabled);
            button.set_text_content(Some(label));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, disabled, label);
}

/// Resets the `<form id=id>` to its initial values.
pub fn reset_form(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(form) = document()
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlFormElement>().ok())
        {
            form.reset();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Collects the searchable text of every row matching `row_selector`, in document order.
pub fn row_texts(row_selector: &str, fields: RowFields) -> Vec<Vec<String>> {
    #[cfg(target_arch = "wasm32")]
    {
        matching_elements(row_selector)
            .iter()
            .map(|row| row_field_texts(row, fields))
            .collect()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (row_selector, fields);
        Vec::new()
    }
}

/// Shows (`display = shown_display`) or hides (`display = none`) each row matching
/// `row_selector`, pairing rows with `visible` in document order.
pub fn set_rows_visible(row_selector: &str, visible: &[bool], shown_display: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        for (row, show) in matching_elements(row_selector).iter().zip(visible) {
            if let Some(row) = row.dyn_ref::<web_sys::HtmlElement>() {
                let display = if *show { shown_display } else { "none" };
                let _ = row.style().set_property("display", display);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (row_selector, visible, shown_display);
}

/// Rewrites the `.badge` inside the row matching `row_selector`; returns whether one was found.
pub fn update_row_badge(row_selector: &str, class_name: &str, label: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(badge) = document()
            .and_then(|document| document.query_selector(row_selector).ok().flatten())
            .and_then(|row| row.query_selector(".badge").ok().flatten())
        else {
            return false;
        };
        badge.set_class_name(class_name);
        badge.set_text_content(Some(label));
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (row_selector, class_name, label);
        false
    }
}

/// Returns `location.pathname`.
pub fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_string()
    }
}

/// Navigates the page to `url`.
pub fn navigate(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = url;
}

/// Opens `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = url;
}

/// Shows a blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Returns every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<web_sys::Element> {
    #[cfg(target_arch = "wasm32")]
    {
        matching_elements(selector)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = selector;
        Vec::new()
    }
}

/// Sets one inline style property on `element`.
pub fn set_element_style(element: &web_sys::Element, property: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() {
            let _ = element.style().set_property(property, value);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (element, property, value);
}

/// Appends a `<style id=id>` block to `<head>` unless one with that id exists.
pub fn install_stylesheet(id: &str, css: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = document() else {
            return;
        };
        if document.get_element_by_id(id).is_some() {
            return;
        }
        let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
            return;
        };
        style.set_id(id);
        style.set_text_content(Some(css));
        let _ = head.append_child(&style);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (id, css);
}

#[cfg(target_arch = "wasm32")]
fn matching_elements(selector: &str) -> Vec<web_sys::Element> {
    let Some(list) = document().and_then(|document| document.query_selector_all(selector).ok())
    else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn row_field_texts(row: &web_sys::Element, fields: RowFields) -> Vec<String> {
    match fields {
        RowFields::Selectors(selectors) => selectors
            .iter()
            .map(|selector| {
                row.query_selector(selector)
                    .ok()
                    .flatten()
                    .and_then(|field| field.text_content())
                    .unwrap_or_default()
            })
            .collect(),
        RowFields::LeadingCells(count) => {
            let Some(row) = row.dyn_ref::<web_sys::HtmlTableRowElement>() else {
                return Vec::new();
            };
            let cells = row.cells();
            (0..count)
                .map(|index| {
                    cells
                        .item(index)
                        .and_then(|cell| cell.text_content())
                        .unwrap_or_default()
                })
                .collect()
        }
    }
}
