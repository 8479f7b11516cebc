//! Matrix rain overlay.
//!
//! Renders falling glyph columns into the `#matrix-container` element on
//! the host page; the CSS animation attached to `.matrix-char` does the
//! actual falling. Stopping just empties the container.

use wasm_bindgen::JsCast;

use crate::config;

const GLYPHS: &str =
    "01アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲンー日本語";

fn rand_range(min: f64, max: f64) -> f64 {
    js_sys::Math::random() * (max - min) + min
}

fn random_glyph() -> char {
    let glyphs: Vec<char> = GLYPHS.chars().collect();
    glyphs[(js_sys::Math::random() * glyphs.len() as f64) as usize % glyphs.len()]
}

/// Spawn [`config::MATRIX_COLUMNS`] glyph columns across the viewport.
pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(container) = document.get_element_by_id("matrix-container") else {
        return;
    };
    container.set_inner_html("");

    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(1280.0);
    let column_width = width / config::MATRIX_COLUMNS as f64;

    for col in 0..config::MATRIX_COLUMNS {
        let Ok(element) = document.create_element("div") else {
            continue;
        };
        element.set_class_name("matrix-char");
        element.set_text_content(Some(&random_glyph().to_string()));

        if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
            let style = html.style();
            let green = 200 + (rand_range(0.0, 55.0) as u32);
            let _ = style.set_property("left", &format!("{}px", col as f64 * column_width));
            let _ = style.set_property("animation-duration", &format!("{}s", rand_range(5.0, 20.0)));
            let _ = style.set_property("animation-delay", &format!("{}s", -rand_range(0.0, 20.0)));
            let _ = style.set_property("font-size", &format!("{}px", 12 + (rand_range(0.0, 5.0) as u32)));
            let _ = style.set_property("opacity", &format!("{}", rand_range(0.2, 0.7)));
            let _ = style.set_property("color", &format!("rgb(0, {green}, {})", green / 2));
        }

        let _ = container.append_child(&element);
    }
}

/// Remove every glyph column.
pub fn stop() {
    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("matrix-container"));
    if let Some(container) = container {
        container.set_inner_html("");
    }
}
