//! Browser terminal portfolio.
//!
//! A simulated Unix shell rendered into an xterm.js widget: virtual
//! filesystem, line editing, tab completion, command history, and a few
//! animated easter eggs, all driven by a portfolio dataset fetched at boot.
//! The core is target-independent; the wasm-bindgen surface (`TerminalApp`)
//! binds it to the host page.

pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod anim;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub use wasm::TerminalApp;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::app::Session;
    use crate::core::editor::Key;
    use crate::core::host::{HostEffects, Screen};

    #[wasm_bindgen]
    unsafe extern "C" {
        /// Host-side wrapper around the xterm.js terminal instance.
        pub type JsTerminal;

        #[wasm_bindgen(method)]
        fn write(this: &JsTerminal, text: &str);

        #[wasm_bindgen(method)]
        fn clear(this: &JsTerminal);

        #[wasm_bindgen(method, getter)]
        fn cols(this: &JsTerminal) -> u32;
    }

    struct XtermScreen {
        term: JsTerminal,
    }

    impl Screen for XtermScreen {
        fn write(&self, text: &str) {
            self.term.write(text);
        }

        fn clear(&self) {
            self.term.clear();
        }

        fn cols(&self) -> usize {
            self.term.cols() as usize
        }
    }

    /// Side effects executed against the page: new tabs and the matrix
    /// overlay.
    struct BrowserHost {
        screen: Rc<dyn Screen>,
    }

    impl HostEffects for BrowserHost {
        fn open_url(&self, url: &str) {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(url, "_blank");
            }
        }

        fn matrix_start(&self) {
            crate::anim::matrix::start();
        }

        fn matrix_stop(&self) {
            crate::anim::matrix::stop();
        }

        fn clear_screen(&self) {
            self.screen.clear();
        }
    }

    /// The exported application handle. The host page constructs it once
    /// via [`TerminalApp::boot`] and forwards terminal events to it.
    #[wasm_bindgen]
    pub struct TerminalApp {
        session: Session,
    }

    #[wasm_bindgen]
    impl TerminalApp {
        /// Load the portfolio dataset and start a session on the given
        /// terminal. Paints the banner and the first prompt.
        pub async fn boot(term: JsTerminal) -> TerminalApp {
            console_error_panic_hook::set_once();

            let data = Rc::new(crate::utils::provider::load_portfolio().await);
            let screen: Rc<dyn Screen> = Rc::new(XtermScreen { term });
            let fx: Rc<dyn HostEffects> = Rc::new(BrowserHost {
                screen: Rc::clone(&screen),
            });

            let session = Session::new(data, screen, fx);
            session.start();
            TerminalApp { session }
        }

        /// Feed one DOM keyboard event (key name plus ctrl modifier).
        pub fn handle_key(&mut self, key: &str, ctrl: bool) {
            if let Some(key) = decode_key(key, ctrl) {
                self.session.handle_key(key);
            }
        }

        /// Run a whole line, for hosts without per-key input.
        pub fn run_command(&mut self, line: &str) {
            self.session.run_line(line);
        }

        /// Completion candidates for the current input buffer.
        pub fn tab_complete(&self) -> Vec<String> {
            self.session.completions()
        }

        pub fn pwd(&self) -> String {
            self.session.current_path().to_string()
        }

        /// Repaint banner, prompt, and in-progress line after a resize.
        pub fn refresh(&self) {
            self.session.refresh();
        }

        /// Ctrl+C from an on-screen helper button.
        pub fn interrupt(&mut self) {
            self.session.handle_key(Key::Interrupt);
        }
    }

    /// Map DOM `KeyboardEvent.key` names onto editor keys. Unhandled keys
    /// (modifiers, function keys) are ignored.
    fn decode_key(key: &str, ctrl: bool) -> Option<Key> {
        if ctrl {
            return match key {
                "c" | "C" => Some(Key::Interrupt),
                _ => None,
            };
        }

        match key {
            "Enter" => Some(Key::Enter),
            "Backspace" => Some(Key::Backspace),
            "Delete" => Some(Key::Delete),
            "Tab" => Some(Key::Tab),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "Home" => Some(Key::Home),
            "End" => Some(Key::End),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(Key::Char(ch)),
                    _ => None,
                }
            }
        }
    }
}
