//! Interactive terminal session.
//!
//! Glues the line editor, the command interpreter, and the terminal surface
//! together: echoes keystrokes, redraws the input line, prints command
//! output, and manages the prompt around asynchronous animations. Everything
//! here is deterministic against a mock surface except the animation and
//! interrupt-debounce timers, which only exist on wasm.

use std::cell::Cell;
use std::rc::Rc;

use crate::config;
use crate::core::autocomplete;
use crate::core::commands::{Dispatch, Shell};
#[cfg(target_arch = "wasm32")]
use crate::core::commands::Animation;
use crate::core::editor::{Key, LineEditor};
use crate::core::host::{HostEffects, Screen};
use crate::models::PortfolioData;

/// Convert interpreter output (`\n`) to terminal line endings.
fn crlf(text: &str) -> String {
    text.replace('\n', "\r\n")
}

pub struct Session {
    editor: LineEditor,
    shell: Shell,
    screen: Rc<dyn Screen>,
    /// Set while a Ctrl+C is being processed; coalesces key repeats.
    interrupt_busy: Rc<Cell<bool>>,
}

impl Session {
    pub fn new(data: Rc<PortfolioData>, screen: Rc<dyn Screen>, fx: Rc<dyn HostEffects>) -> Self {
        Session {
            editor: LineEditor::new(),
            shell: Shell::new(data, fx),
            screen,
            interrupt_busy: Rc::new(Cell::new(false)),
        }
    }

    pub fn current_path(&self) -> &str {
        self.shell.current_path()
    }

    fn prompt(&self) -> String {
        format!("{}:{}$ ", config::USER, self.shell.current_path())
    }

    fn banner(&self) -> &'static str {
        if self.screen.cols() < config::COMPACT_BANNER_MAX_COLS {
            config::BANNER_COMPACT
        } else {
            config::BANNER
        }
    }

    /// Write the welcome banner and the first prompt.
    pub fn start(&self) {
        self.screen.write(&crlf(self.banner()));
        self.screen.write("\r\n");
        self.screen.write(&self.prompt());
    }

    /// Clear and repaint banner, prompt, and the in-progress line. Used
    /// after terminal resizes.
    pub fn refresh(&self) {
        self.screen.clear();
        self.screen.write(&crlf(self.banner()));
        self.screen.write("\r\n");
        self.screen.write(&self.prompt());
        self.screen.write(self.editor.buffer());
    }

    /// Completion candidates for the current buffer.
    pub fn completions(&self) -> Vec<String> {
        autocomplete::complete(
            self.editor.buffer(),
            self.shell.current_path(),
            self.shell.vfs(),
        )
    }

    /// Feed a whole line, as if typed and submitted. Used by hosts without
    /// per-key input (mobile helpers).
    pub fn run_line(&mut self, line: &str) {
        self.editor.set_line(line.to_string());
        self.handle_enter();
    }

    // ========================================================================
    // Key handling
    // ========================================================================

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Char(ch) => {
                let old_len = self.editor.len();
                self.editor.insert(ch);
                self.redraw_line(old_len);
            }
            Key::Backspace => {
                let old_len = self.editor.len();
                if self.editor.backspace() {
                    self.redraw_line(old_len);
                }
            }
            Key::Delete => {
                let old_len = self.editor.len();
                if self.editor.delete() {
                    self.redraw_line(old_len);
                }
            }
            Key::Left => {
                if self.editor.move_left() {
                    self.screen.write("\u{8}");
                }
            }
            Key::Right => {
                let under_cursor = self.editor.buffer().chars().nth(self.editor.cursor());
                if self.editor.move_right() {
                    if let Some(ch) = under_cursor {
                        let mut buf = [0u8; 4];
                        self.screen.write(ch.encode_utf8(&mut buf));
                    }
                }
            }
            Key::Home => {
                let offset = self.editor.cursor();
                if self.editor.move_home() {
                    self.screen.write(&"\u{8}".repeat(offset));
                }
            }
            Key::End => {
                let rest: String = self.editor.buffer().chars().skip(self.editor.cursor()).collect();
                if self.editor.move_end() {
                    self.screen.write(&rest);
                }
            }
            Key::Up => {
                let old_len = self.editor.len();
                if self.editor.history_up() {
                    self.redraw_line(old_len);
                }
            }
            Key::Down => {
                let old_len = self.editor.len();
                if self.editor.history_down() {
                    self.redraw_line(old_len);
                }
            }
            Key::Enter => self.handle_enter(),
            Key::Tab => self.handle_tab(),
            Key::Interrupt => self.handle_interrupt(),
        }
    }

    /// Full-line repaint: erase the old buffer with spaces, rewrite prompt
    /// and buffer, then step the terminal cursor back to the edit position.
    fn redraw_line(&self, old_len: usize) {
        let prompt = self.prompt();
        self.screen.write(&format!("\r{prompt}"));
        self.screen.write(&" ".repeat(old_len));
        self.screen.write(&format!("\r{prompt}"));
        self.screen.write(self.editor.buffer());
        let tail = self.editor.len() - self.editor.cursor();
        if tail > 0 {
            self.screen.write(&"\u{8}".repeat(tail));
        }
    }

    fn handle_enter(&mut self) {
        self.screen.write("\r\n");
        let line = self.editor.submit();
        if line.is_empty() {
            self.screen.write(&self.prompt());
            return;
        }

        match self.shell.dispatch(&line) {
            Dispatch::Unknown(name) => {
                self.screen
                    .write(&format!("\x1b[31mCommand not found: {name}\x1b[0m\r\n"));
                self.screen
                    .write("Tip: Type \x1b[33mhelp\x1b[0m to see available commands.\r\n");
                self.screen.write(&self.prompt());
            }
            Dispatch::Ran(result) => {
                if result.refresh {
                    self.refresh();
                    return;
                }
                if let Some(output) = &result.output {
                    self.screen.write(&format!("{}\r\n", crlf(output)));
                }
                match result.animation {
                    Some(animation) => self.start_animation(animation),
                    None => self.screen.write(&self.prompt()),
                }
            }
        }
    }

    fn handle_tab(&mut self) {
        if self.editor.is_empty() {
            self.screen.write("\r\n");
            self.screen
                .write("\x1b[1;33mSystem Commands:\x1b[0m ls, cd, cat, pwd, clear, help\r\n");
            self.screen
                .write("\x1b[1;33mNavigation Commands:\x1b[0m browse, open, goto\r\n");
            self.screen.write(
                "\x1b[1;33mPortfolio Commands:\x1b[0m whoami, projects, experience, education, certs, contact\r\n",
            );
            self.screen
                .write("\x1b[1;33mFun Commands:\x1b[0m matrix, hack, nmap, sudo\r\n");
            self.screen.write(&format!("\r\n{}", self.prompt()));
            return;
        }

        let matches = self.completions();
        match matches.as_slice() {
            [] => {
                self.screen
                    .write("\r\n\x1b[33mNo matching commands or files.\x1b[0m\r\n");
                if self.editor.buffer().contains(' ') {
                    self.screen.write(
                        "\x1b[33mTip: Use \"ls\" to see available files in the current directory.\x1b[0m\r\n",
                    );
                } else {
                    self.screen.write(
                        "\x1b[33mTip: Type \"help\" to see all available commands.\x1b[0m\r\n",
                    );
                }
                self.screen
                    .write(&format!("{}{}", self.prompt(), self.editor.buffer()));
            }
            [single] => {
                let old_len = self.editor.len();
                self.editor.set_line(single.clone());
                self.redraw_line(old_len);
            }
            _ => {
                self.screen.write("\r\n");
                if matches[0].contains(' ') {
                    self.write_path_columns(&matches);
                } else {
                    self.screen.write(&format!("{}\r\n", matches.join("  ")));
                }

                let common = autocomplete::common_prefix(&matches);
                if common.chars().count() > self.editor.len() {
                    self.editor.set_line(common);
                }
                self.screen
                    .write(&format!("{}{}", self.prompt(), self.editor.buffer()));
            }
        }
    }

    /// Columnized path candidate listing: directories blue, executables
    /// green, width derived from the terminal.
    fn write_path_columns(&self, matches: &[String]) {
        let paths: Vec<&str> = matches
            .iter()
            .map(|m| m.split_once(' ').map_or(m.as_str(), |(_, path)| path))
            .collect();
        let max_len = paths.iter().map(|p| p.chars().count()).max().unwrap_or(0) + 2;
        let per_row = (self.screen.cols() / max_len).max(1);

        for row in paths.chunks(per_row) {
            let mut line = String::new();
            for path in row {
                let padded = format!("{path:<max_len$}");
                if path.ends_with('/') {
                    line.push_str(&format!("\x1b[1;34m{padded}\x1b[0m"));
                } else if path.contains("/bin/") {
                    line.push_str(&format!("\x1b[1;32m{padded}\x1b[0m"));
                } else {
                    line.push_str(&padded);
                }
            }
            self.screen.write(&format!("{line}\r\n"));
        }
    }

    fn handle_interrupt(&mut self) {
        if self.interrupt_busy.get() {
            return;
        }
        self.interrupt_busy.set(true);

        self.screen.write("^C\r\n");
        self.editor.cancel();
        self.screen.write(&self.prompt());

        #[cfg(target_arch = "wasm32")]
        {
            let busy = Rc::clone(&self.interrupt_busy);
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(config::INTERRUPT_DEBOUNCE_MS).await;
                busy.set(false);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        self.interrupt_busy.set(false);
    }

    // ========================================================================
    // Animations
    // ========================================================================

    /// Start an animation as a detached task and keep the prompt suppressed
    /// until it completes (or the fallback timer fires).
    #[cfg(target_arch = "wasm32")]
    fn start_animation(&self, animation: Animation) {
        use futures::channel::oneshot;
        use futures::future;
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        let screen = Rc::clone(&self.screen);
        let prompt = self.prompt();
        let (done_tx, done_rx) = oneshot::channel();

        match animation {
            Animation::Hack => spawn_local(crate::anim::run_hack(Rc::clone(&screen), done_tx)),
            Animation::Scan(target) => {
                spawn_local(crate::anim::run_scan(Rc::clone(&screen), target, done_tx))
            }
        }

        spawn_local(async move {
            let fallback = Box::pin(TimeoutFuture::new(config::ANIMATION_FALLBACK_MS));
            let _ = future::select(done_rx, fallback).await;
            screen.write(&format!("\r\n{prompt}"));
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn start_animation(&self, _animation: crate::core::commands::Animation) {
        self.screen.write(&format!("\r\n{}", self.prompt()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::mock::{MockHost, MockScreen};

    fn session() -> (Session, Rc<MockScreen>, Rc<MockHost>) {
        let data = Rc::new(config::fallback_data());
        let screen = Rc::new(MockScreen::default());
        let fx = Rc::new(MockHost::default());
        let session = Session::new(
            data,
            Rc::clone(&screen) as Rc<dyn Screen>,
            Rc::clone(&fx) as Rc<dyn HostEffects>,
        );
        (session, screen, fx)
    }

    fn type_line(session: &mut Session, line: &str) {
        for ch in line.chars() {
            session.handle_key(Key::Char(ch));
        }
    }

    #[test]
    fn test_start_writes_banner_and_prompt() {
        let (session, screen, _) = session();
        session.start();
        let out = screen.contents();
        assert!(out.contains("Terminal Portfolio"));
        assert!(out.ends_with("mohamedsalem:/$ "));
    }

    #[test]
    fn test_enter_runs_command_and_reprints_prompt() {
        let (mut session, screen, _) = session();
        type_line(&mut session, "pwd");
        session.handle_key(Key::Enter);
        let out = screen.contents();
        assert!(out.contains("\r\n/\r\n"));
        assert!(out.ends_with("mohamedsalem:/$ "));
    }

    #[test]
    fn test_prompt_follows_directory() {
        let (mut session, screen, _) = session();
        type_line(&mut session, "cd projects");
        session.handle_key(Key::Enter);
        assert!(screen.contents().ends_with("mohamedsalem:/projects$ "));
    }

    #[test]
    fn test_empty_enter_just_reprompts() {
        let (mut session, screen, _) = session();
        session.handle_key(Key::Enter);
        assert_eq!(screen.contents(), "\r\nmohamedsalem:/$ ");
    }

    #[test]
    fn test_unknown_command_hint() {
        let (mut session, screen, _) = session();
        type_line(&mut session, "frobnicate");
        session.handle_key(Key::Enter);
        let out = screen.contents();
        assert!(out.contains("\x1b[31mCommand not found: frobnicate\x1b[0m\r\n"));
        assert!(out.contains("Tip: Type \x1b[33mhelp\x1b[0m to see available commands.\r\n"));
        assert!(out.ends_with("mohamedsalem:/$ "));
    }

    #[test]
    fn test_output_uses_crlf() {
        let (mut session, screen, _) = session();
        type_line(&mut session, "cat about.txt");
        session.handle_key(Key::Enter);
        let out = screen.contents();
        assert!(out.contains("[🕵️] Mohamed Salem Khyarhoum\r\n"));
    }

    #[test]
    fn test_redraw_on_mid_line_edit() {
        let (mut session, screen, _) = session();
        type_line(&mut session, "lx");
        session.handle_key(Key::Left);
        session.handle_key(Key::Backspace);
        session.handle_key(Key::Char('s'));
        // The buffer reads "sx" ... no: "lx", Left (cursor before x),
        // Backspace removes 'l', Char('s') inserts before 'x' -> "sx".
        // What matters here is the repaint contract:
        let out = screen.contents();
        assert!(out.contains("\rmohamedsalem:/$ "));
        // Cursor stepped back over the tail after the mid-line insert.
        assert!(out.ends_with("\u{8}"));
        session.handle_key(Key::End);
        session.handle_key(Key::Enter);
    }

    #[test]
    fn test_history_recall_redraws() {
        let (mut session, screen, _) = session();
        type_line(&mut session, "pwd");
        session.handle_key(Key::Enter);
        session.handle_key(Key::Up);
        assert!(screen.contents().ends_with("\rmohamedsalem:/$ pwd"));
    }

    #[test]
    fn test_tab_on_empty_buffer_lists_categories() {
        let (mut session, screen, _) = session();
        session.handle_key(Key::Tab);
        let out = screen.contents();
        assert!(out.contains("\x1b[1;33mSystem Commands:\x1b[0m ls, cd, cat, pwd, clear, help"));
        assert!(out.contains("\x1b[1;33mFun Commands:\x1b[0m matrix, hack, nmap, sudo"));
        assert!(out.ends_with("mohamedsalem:/$ "));
    }

    #[test]
    fn test_tab_single_match_completes_line() {
        let (mut session, screen, _) = session();
        type_line(&mut session, "ls /pro");
        session.handle_key(Key::Tab);
        assert!(screen.contents().ends_with("ls /projects/"));
        session.handle_key(Key::Enter);
        assert!(screen.contents().contains("Gestion-de-Scolarite"));
    }

    #[test]
    fn test_tab_multiple_matches_lists_and_fills_prefix() {
        let (mut session, screen, _) = session();
        type_line(&mut session, "c");
        session.handle_key(Key::Tab);
        let out = screen.contents();
        assert!(out.contains("cd  cat  certs  contact  clear\r\n"));
        // Common prefix of the candidates is "c"; buffer stays as typed.
        assert!(out.ends_with("mohamedsalem:/$ c"));
    }

    #[test]
    fn test_tab_no_match_hints() {
        let (mut session, screen, _) = session();
        type_line(&mut session, "cat zz");
        session.handle_key(Key::Tab);
        let out = screen.contents();
        assert!(out.contains("\x1b[33mNo matching commands or files.\x1b[0m"));
        assert!(out.contains("Tip: Use \"ls\""));
        assert!(out.ends_with("mohamedsalem:/$ cat zz"));
    }

    #[test]
    fn test_interrupt_cancels_line() {
        let (mut session, screen, _) = session();
        type_line(&mut session, "cat abo");
        session.handle_key(Key::Interrupt);
        let out = screen.contents();
        assert!(out.ends_with("^C\r\nmohamedsalem:/$ "));
        // The cancelled line is gone; Enter runs nothing.
        session.handle_key(Key::Enter);
        assert!(screen.contents().ends_with("\r\nmohamedsalem:/$ "));
    }

    #[test]
    fn test_run_line_matches_typed_flow() {
        let (mut session, screen, _) = session();
        session.run_line("pwd");
        let out = screen.contents();
        assert!(out.contains("/\r\n"));
        assert!(out.ends_with("mohamedsalem:/$ "));
    }

    #[test]
    fn test_reset_clears_and_repaints() {
        let (mut session, screen, _) = session();
        type_line(&mut session, "cd bin");
        session.handle_key(Key::Enter);
        type_line(&mut session, "reset");
        session.handle_key(Key::Enter);
        assert_eq!(*screen.cleared.borrow(), 1);
        let out = screen.contents();
        assert!(out.contains("Terminal Portfolio"));
        assert!(out.ends_with("mohamedsalem:/bin$ "));
    }

    #[test]
    fn test_refresh_repaints_state() {
        let (mut session, screen, _) = session();
        type_line(&mut session, "cd bin");
        session.handle_key(Key::Enter);
        type_line(&mut session, "ls");
        session.refresh();
        assert_eq!(*screen.cleared.borrow(), 1);
        assert!(screen.contents().ends_with("mohamedsalem:/bin$ ls"));
    }
}
