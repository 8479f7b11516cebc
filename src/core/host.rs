//! Capabilities the shell consumes from its host environment.
//!
//! The terminal widget and the surrounding page are external collaborators:
//! the core only ever talks to them through these traits, which keeps every
//! state machine in this crate testable off-browser.

/// The terminal rendering surface (an xterm.js instance on the host page).
///
/// Treated as append/clear-only; `write` accepts raw text including ANSI
/// escape sequences and `\r\n` line endings.
pub trait Screen {
    fn write(&self, text: &str);
    fn clear(&self);
    /// Current column count, used for multi-column completion listings and
    /// banner selection.
    fn cols(&self) -> usize;
}

/// Side effects performed by executable nodes: opening links and driving
/// the decorative matrix overlay. Only the start/stop contract is part of
/// the core; the effect itself lives with the host.
pub trait HostEffects {
    fn open_url(&self, url: &str);
    fn matrix_start(&self);
    fn matrix_stop(&self);
    fn clear_screen(&self);
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::cell::RefCell;

    /// Records everything written to it; shared by the core tests.
    #[derive(Default)]
    pub struct MockScreen {
        pub written: RefCell<Vec<String>>,
        pub cleared: RefCell<usize>,
    }

    impl MockScreen {
        pub fn contents(&self) -> String {
            self.written.borrow().concat()
        }
    }

    impl Screen for MockScreen {
        fn write(&self, text: &str) {
            self.written.borrow_mut().push(text.to_string());
        }
        fn clear(&self) {
            *self.cleared.borrow_mut() += 1;
        }
        fn cols(&self) -> usize {
            80
        }
    }

    #[derive(Default)]
    pub struct MockHost {
        pub opened: RefCell<Vec<String>>,
        pub matrix_running: RefCell<bool>,
        pub screen_clears: RefCell<usize>,
    }

    impl HostEffects for MockHost {
        fn open_url(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
        fn matrix_start(&self) {
            *self.matrix_running.borrow_mut() = true;
        }
        fn matrix_stop(&self) {
            *self.matrix_running.borrow_mut() = false;
        }
        fn clear_screen(&self) {
            *self.screen_clears.borrow_mut() += 1;
        }
    }
}
