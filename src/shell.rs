use crate::output::Output;
use serde::Serialize;

pub const PROMPT: &str = "C:\\Users\\paulo.cunha>";

pub const COMMAND_NAMES: &[&str] = &[
    "cat", "clear", "clearall", "color", "contact", "download", "glitch", "help", "ls", "matrix",
    "open", "rm", "session", "sudo", "touch", "vim", "whoami",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Info,
    Clear,
    Help,
}

/// One parsed prompt line. Variants are listed in dispatch precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Help,
    Whoami,
    Ls(Option<String>),
    Download(Option<String>),
    Vim(Option<String>),
    Cat(Option<String>),
    Touch(Option<String>),
    Rm(Option<String>),
    Session(SessionCommand),
    Open(Option<String>),
    Contact,
    Clear,
    Color(Option<String>),
    Matrix,
    Glitch,
    HireMe,
    ClearAll,
    Unknown,
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = parts.first() else {
            return Command::Empty;
        };
        let cmd = first.to_lowercase();
        let args = &parts[1..];
        // Filename-like arguments may contain spaces.
        let rest = if args.is_empty() {
            None
        } else {
            Some(args.join(" "))
        };
        let bare = |c: Command| if args.is_empty() { c } else { Command::Unknown };

        match cmd.as_str() {
            "help" => bare(Command::Help),
            "whoami" => bare(Command::Whoami),
            "ls" => Command::Ls(rest.map(|d| d.to_lowercase())),
            "download" => Command::Download(rest),
            "vim" => Command::Vim(rest),
            "cat" => Command::Cat(rest),
            "touch" => Command::Touch(rest),
            "rm" => Command::Rm(rest),
            "session" => Command::Session(
                match rest.map(|s| s.to_lowercase()).as_deref() {
                    Some("info") => SessionCommand::Info,
                    Some("clear") => SessionCommand::Clear,
                    _ => SessionCommand::Help,
                },
            ),
            "open" => Command::Open(rest),
            "contact" => bare(Command::Contact),
            "clear" => bare(Command::Clear),
            "color" => Command::Color(rest),
            "matrix" => bare(Command::Matrix),
            "glitch" => bare(Command::Glitch),
            "sudo" => match rest.map(|s| s.to_lowercase()).as_deref() {
                Some("hire-me") => Command::HireMe,
                _ => Command::Unknown,
            },
            "clearall" => bare(Command::ClearAll),
            _ => Command::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub input: String,
    pub output: Output,
    pub timestamp: f64,
}

/// Milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

/// Previously submitted lines for Up/Down recall at the prompt. Unlike the
/// transcript this survives `clear`.
#[derive(Debug, Default)]
pub struct InputHistory {
    lines: Vec<String>,
    // Steps back from the newest line; None while editing a fresh line.
    cursor: Option<usize>,
}

impl InputHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: &str) {
        if !line.trim().is_empty() {
            self.lines.push(line.into());
        }
        self.cursor = None;
    }

    /// ArrowUp. None when there is nothing older.
    pub fn previous(&mut self) -> Option<String> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.lines.len() {
            return None;
        }
        self.cursor = Some(next);
        Some(self.lines[self.lines.len() - 1 - next].clone())
    }

    /// ArrowDown. Walking past the newest line yields an empty prompt.
    pub fn next(&mut self) -> Option<String> {
        match self.cursor {
            None => None,
            Some(0) => {
                self.cursor = None;
                Some(String::new())
            }
            Some(c) => {
                self.cursor = Some(c - 1);
                Some(self.lines[self.lines.len() - c].clone())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_are_case_insensitive() {
        assert_eq!(Command::parse("HELP"), Command::Help);
        assert_eq!(Command::parse("  WhoAmI  "), Command::Whoami);
        assert_eq!(Command::parse("Sudo HIRE-ME"), Command::HireMe);
        assert_eq!(Command::parse("sudo rm -rf"), Command::Unknown);
    }

    #[test]
    fn bare_commands_reject_arguments() {
        assert_eq!(Command::parse("help me"), Command::Unknown);
        assert_eq!(Command::parse("clear all"), Command::Unknown);
        assert_eq!(Command::parse("clearall"), Command::ClearAll);
        assert_eq!(Command::parse("matrix"), Command::Matrix);
    }

    #[test]
    fn filename_arguments_keep_case_and_spaces() {
        assert_eq!(
            Command::parse("cat My   Notes.txt"),
            Command::Cat(Some("My Notes.txt".into()))
        );
        assert_eq!(Command::parse("vim"), Command::Vim(None));
        assert_eq!(Command::parse("rm A.txt"), Command::Rm(Some("A.txt".into())));
    }

    #[test]
    fn ls_and_session_subcommands() {
        assert_eq!(Command::parse("ls"), Command::Ls(None));
        assert_eq!(Command::parse("ls CV"), Command::Ls(Some("cv".into())));
        assert_eq!(
            Command::parse("session info"),
            Command::Session(SessionCommand::Info)
        );
        assert_eq!(
            Command::parse("session CLEAR"),
            Command::Session(SessionCommand::Clear)
        );
        assert_eq!(
            Command::parse("session"),
            Command::Session(SessionCommand::Help)
        );
        assert_eq!(
            Command::parse("session purge"),
            Command::Session(SessionCommand::Help)
        );
    }

    #[test]
    fn empty_and_unknown() {
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("rmdir x"), Command::Unknown);
        assert_eq!(Command::parse("colour green"), Command::Unknown);
    }

    #[test]
    fn recall_walks_back_and_forth() {
        let mut h = InputHistory::new();
        assert_eq!(h.previous(), None);
        h.push("help");
        h.push("ls cv");
        h.push("   ");
        assert_eq!(h.len(), 2);

        assert_eq!(h.previous().as_deref(), Some("ls cv"));
        assert_eq!(h.previous().as_deref(), Some("help"));
        assert_eq!(h.previous(), None);
        assert_eq!(h.next().as_deref(), Some("ls cv"));
        assert_eq!(h.next().as_deref(), Some(""));
        assert_eq!(h.next(), None);
    }
}
