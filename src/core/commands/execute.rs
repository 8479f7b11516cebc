//! The command interpreter.
//!
//! `Shell` owns the virtual filesystem and the current directory, and turns
//! parsed commands into [`CommandResult`]s. All output uses `\n` line
//! endings and may carry ANSI color sequences; the session layer converts
//! line endings for the terminal.

use std::rc::Rc;

use crate::config;
use crate::core::commands::result::{Animation, CommandResult, Dispatch};
use crate::core::commands::Command;
use crate::core::content;
use crate::core::filesystem::{FsNode, Vfs};
use crate::core::host::HostEffects;
use crate::core::path;
use crate::models::PortfolioData;
use crate::utils;

/// Entry kinds as the file browser classifies them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
    Exec,
}

impl EntryKind {
    fn of(node: &FsNode) -> Self {
        match node {
            FsNode::Directory { .. } => EntryKind::Dir,
            FsNode::File { .. } => EntryKind::File,
            FsNode::Executable { .. } => EntryKind::Exec,
        }
    }
}

/// The interpreter: virtual filesystem plus current working directory.
pub struct Shell {
    vfs: Vfs,
    current_path: String,
}

impl Shell {
    pub fn new(data: Rc<PortfolioData>, fx: Rc<dyn HostEffects>) -> Self {
        Shell {
            vfs: content::portfolio_tree(&data, &fx),
            current_path: "/".to_string(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    /// Parse and run one input line.
    pub fn dispatch(&mut self, line: &str) -> Dispatch {
        let Some(command) = Command::parse(line) else {
            return Dispatch::Ran(CommandResult::silent());
        };
        if let Command::Unknown(name) = command {
            return Dispatch::Unknown(name);
        }
        Dispatch::Ran(self.run(command))
    }

    fn run(&mut self, command: Command) -> CommandResult {
        match command {
            Command::Pwd => CommandResult::text(self.current_path.clone()),
            Command::Ls(arg) => self.ls(arg.as_deref()),
            Command::Cd(arg) => self.cd(arg.as_deref()),
            Command::Cat(arg) => self.cat(arg.as_deref()),
            Command::Exec(arg) => self.exec(arg.as_deref()),
            Command::Whoami => self.whoami(),
            Command::Projects => {
                self.current_path = "/projects".to_string();
                self.ls(None)
            }
            Command::Experience => self.cat_at("/experience/resume.txt"),
            Command::Education => self.cat_at("/education/diplomas.txt"),
            Command::Certs => self.cat_at("/certifications/certs.txt"),
            Command::Contact => self.cat_at("/contact.txt"),
            Command::Matrix => self.run_bin("matrix"),
            Command::Hack => CommandResult::animate(Animation::Hack),
            Command::Clear => self.run_bin("clear"),
            Command::Sudo(args) => Self::sudo(&args),
            Command::Nmap(arg) => Self::nmap(arg.as_deref()),
            Command::Help => CommandResult::text(config::HELP_TEXT),
            Command::Browse => self.browse(),
            Command::Open(arg) => self.open(arg.as_deref()),
            Command::Goto(arg) => self.goto(arg.as_deref()),
            Command::Email => self.run_bin("email"),
            Command::Gui => self.run_bin("gui"),
            Command::Github => self.run_bin("github"),
            Command::Linkedin => self.run_bin("linkedin"),
            Command::Twitter => self.run_bin("twitter"),
            Command::Reset => CommandResult::refresh(),
            Command::Unknown(_) => unreachable!("filtered out by dispatch"),
        }
    }

    // ========================================================================
    // Filesystem commands
    // ========================================================================

    fn ls(&self, arg: Option<&str>) -> CommandResult {
        let target = match arg {
            Some(raw) => path::normalize(&path::resolve(raw, &self.current_path)),
            None => self.current_path.clone(),
        };

        let node = match self.vfs.node(&target) {
            Ok(node) => node,
            Err(_) => {
                return CommandResult::text(format!(
                    "ls: cannot access '{target}': No such file or directory"
                ));
            }
        };
        let FsNode::Directory { children } = node else {
            return CommandResult::text(format!("ls: cannot list '{target}': Not a directory"));
        };

        let entries: Vec<String> = children
            .iter()
            .map(|(name, node)| decorate(name, EntryKind::of(node)))
            .collect();
        CommandResult::text(entries.join("  "))
    }

    fn cd(&mut self, arg: Option<&str>) -> CommandResult {
        let raw = match arg {
            None | Some("~") => {
                self.current_path = "/".to_string();
                return CommandResult::silent();
            }
            Some(raw) => raw,
        };

        let mut target = path::normalize(&path::resolve(raw, &self.current_path));
        if raw.starts_with('/') && self.vfs.node(&target).is_err() {
            if let Some(corrected) = self.correct_root_path(&target) {
                target = corrected;
            }
        }
        match self.vfs.node(&target) {
            Ok(node) if node.is_directory() => {
                self.current_path = target;
                CommandResult::silent()
            }
            Ok(_) => CommandResult::text(format!("cd: {raw}: Not a directory")),
            Err(err) => CommandResult::text(format!("cd: {raw}: {err}")),
        }
    }

    /// Nudge a mistyped top-level path onto a real directory: a
    /// case-insensitive name match or a unique prefix is accepted
    /// (`/Projects`, `/p` -> `/projects`). Multi-segment paths and
    /// ambiguous prefixes are left alone.
    fn correct_root_path(&self, canonical: &str) -> Option<String> {
        let typed = canonical.strip_prefix('/')?;
        if typed.is_empty() || typed.contains('/') {
            return None;
        }
        let children = self.vfs.dir_children("/").ok()?;
        let dirs: Vec<&str> = children
            .iter()
            .filter(|(_, node)| node.is_directory())
            .map(|(name, _)| name.as_str())
            .collect();

        let lowered = typed.to_ascii_lowercase();
        if let Some(name) = dirs.iter().find(|name| name.to_ascii_lowercase() == lowered) {
            return Some(format!("/{name}"));
        }
        match dirs
            .iter()
            .filter(|name| name.starts_with(typed))
            .collect::<Vec<_>>()
            .as_slice()
        {
            [only] => Some(format!("/{only}")),
            _ => None,
        }
    }

    fn cat(&self, arg: Option<&str>) -> CommandResult {
        let Some(raw) = arg else {
            return CommandResult::text("Usage: cat <filename>");
        };
        let target = path::normalize(&path::resolve(raw, &self.current_path));
        match self.vfs.file_content(&target) {
            Ok(text) => CommandResult::text(text),
            Err(err) => CommandResult::text(format!("cat: {raw}: {err}")),
        }
    }

    fn cat_at(&self, canonical: &str) -> CommandResult {
        match self.vfs.file_content(canonical) {
            Ok(text) => CommandResult::text(text),
            Err(err) => CommandResult::text(format!("cat: {canonical}: {err}")),
        }
    }

    fn exec(&self, arg: Option<&str>) -> CommandResult {
        let Some(raw) = arg else {
            return CommandResult::text("Usage: ./filename or exec filename");
        };
        let stripped = raw.strip_prefix("./").unwrap_or(raw);
        let target = path::normalize(&path::resolve(stripped, &self.current_path));
        match self.vfs.run_executable(&target) {
            Ok(Some(out)) => CommandResult::text(out),
            Ok(None) => CommandResult::silent(),
            Err(err) => CommandResult::text(format!("exec: {raw}: {err}")),
        }
    }

    fn run_bin(&self, name: &str) -> CommandResult {
        match self.vfs.run_executable(&format!("/bin/{name}")) {
            Ok(Some(out)) => CommandResult::text(out),
            Ok(None) => CommandResult::silent(),
            Err(err) => CommandResult::text(format!("{name}: {err}")),
        }
    }

    fn whoami(&self) -> CommandResult {
        let about = self.vfs.file_content("/about.txt").unwrap_or_default();
        let skills = self.vfs.file_content("/skills.txt").unwrap_or_default();
        CommandResult::text(format!("{about}{skills}"))
    }

    // ========================================================================
    // Browser and quick navigation
    // ========================================================================

    /// Directory entries ordered the way the browser lists them: directories
    /// first, then alphabetical within each group. Derived fresh per call so
    /// `open` numbers always match the latest `browse` listing.
    fn sorted_entries(&self, canonical: &str) -> Vec<(String, EntryKind)> {
        let mut entries: Vec<(String, EntryKind)> = self
            .vfs
            .dir_children(canonical)
            .map(|children| {
                children
                    .iter()
                    .map(|(name, node)| (name.clone(), EntryKind::of(node)))
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by(|(a_name, a_kind), (b_name, b_kind)| {
            let a_dir = *a_kind == EntryKind::Dir;
            let b_dir = *b_kind == EntryKind::Dir;
            b_dir.cmp(&a_dir).then_with(|| a_name.cmp(b_name))
        });
        entries
    }

    fn browse(&self) -> CommandResult {
        let mut out = format!(
            "\x1b[1;36m===== File Browser: {} =====\x1b[0m\n\n",
            self.current_path
        );
        if self.current_path != "/" {
            out.push_str("0. \x1b[1;34m..\x1b[0m (Parent Directory)\n");
        }
        for (i, (name, kind)) in self.sorted_entries(&self.current_path).iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, decorate(name, *kind)));
        }
        out.push_str("\n\x1b[33mType 'open [number]' to view a file or enter a directory\x1b[0m");
        CommandResult::text(out)
    }

    fn open(&mut self, arg: Option<&str>) -> CommandResult {
        let number = match arg {
            Some(raw) if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) => {
                raw.parse::<usize>().unwrap_or(usize::MAX)
            }
            _ => {
                return CommandResult::text(
                    "Usage: open [number] - Open a file or directory listed by 'browse'",
                );
            }
        };

        if number == 0 && self.current_path != "/" {
            self.current_path = path::parent(&self.current_path);
            return self.browse();
        }

        let entries = self.sorted_entries(&self.current_path);
        if number < 1 || number > entries.len() {
            return CommandResult::text(format!("Error: No item with number {number}"));
        }

        let (name, kind) = &entries[number - 1];
        let target = path::normalize(&path::resolve(name, &self.current_path));
        match kind {
            EntryKind::Dir => {
                self.current_path = target;
                self.browse()
            }
            EntryKind::File => match self.vfs.file_content(&target) {
                Ok(text) => CommandResult::text(text),
                Err(err) => CommandResult::text(format!("open: {name}: {err}")),
            },
            EntryKind::Exec => match self.vfs.run_executable(&target) {
                Ok(Some(out)) => CommandResult::text(out),
                Ok(None) => CommandResult::silent(),
                Err(err) => CommandResult::text(format!("open: {name}: {err}")),
            },
        }
    }

    fn goto(&mut self, arg: Option<&str>) -> CommandResult {
        let Some(destination) = arg else {
            return CommandResult::text(GOTO_MENU);
        };
        match destination {
            "1" => {
                self.current_path = "/projects".to_string();
                self.ls(None)
            }
            "2" => {
                self.current_path = "/experience".to_string();
                self.cat_at("/experience/resume.txt")
            }
            "3" => {
                self.current_path = "/education".to_string();
                self.cat_at("/education/diplomas.txt")
            }
            "4" => {
                self.current_path = "/certifications".to_string();
                self.cat_at("/certifications/certs.txt")
            }
            "5" => {
                self.current_path = "/".to_string();
                self.ls(None)
            }
            "6" => {
                self.current_path = "/bin".to_string();
                self.ls(None)
            }
            _ => CommandResult::text(
                "Invalid destination. Type \x1b[33mgoto\x1b[0m without arguments to see available options.",
            ),
        }
    }

    // ========================================================================
    // Easter eggs
    // ========================================================================

    fn sudo(args: &[String]) -> CommandResult {
        if args.first().map(String::as_str) == Some("su") {
            CommandResult::text(format!(
                "\n\x1b[31m[!] ACCESS DENIED\n\
                 Unauthorized Privilege Escalation Attempt Detected\n\
                 Incident Logged @ {}\n\
                 System Lockdown Initiated...\n\x1b[0m",
                utils::now_iso()
            ))
        } else {
            CommandResult::text("Usage: sudo su")
        }
    }

    fn nmap(arg: Option<&str>) -> CommandResult {
        match arg {
            Some(target @ ("127.0.0.1" | "localhost")) => {
                CommandResult::animate(Animation::Scan(target.to_string()))
            }
            _ => CommandResult::text("Usage: nmap 127.0.0.1 or nmap localhost"),
        }
    }
}

fn decorate(name: &str, kind: EntryKind) -> String {
    match kind {
        EntryKind::Dir => format!("\x1b[1;34m{name}/\x1b[0m"),
        EntryKind::Exec => format!("\x1b[1;32m{name}*\x1b[0m"),
        EntryKind::File => name.to_string(),
    }
}

const GOTO_MENU: &str = "\n\x1b[1;36m===== Quick Navigation =====\x1b[0m\n\n\
Choose a destination:\n\
1. \x1b[34mProjects\x1b[0m           - View my portfolio projects\n\
2. \x1b[34mExperience\x1b[0m         - See my work experience\n\
3. \x1b[34mEducation\x1b[0m          - Check my academic background\n\
4. \x1b[34mCertifications\x1b[0m     - View my certifications\n\
5. \x1b[34mHome Directory\x1b[0m     - Return to root (/)\n\
6. \x1b[34mBin Directory\x1b[0m      - Go to executable commands\n\n\
Type \x1b[33mgoto [number]\x1b[0m to navigate.\n";
