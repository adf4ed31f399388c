use crate::{
    catalog::{file_icon, find_project, format_file_size, Catalog, Category, PROJECTS},
    content,
    editor::EditorSession,
    effects::{EffectKind, Effects, SessionState},
    log,
    output::{Block, Output, Span, Style},
    persist::KeyValueStorage,
    shell::{now_ms, Command, HistoryEntry, InputHistory, SessionCommand, COMMAND_NAMES},
    theme::Theme,
    vfs::{FileRecord, SessionStore, SESSION_FILES_KEY},
};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct TerminalConfig {
    pub matrix_delay_ms: u32,
    pub glitch_delay_ms: u32,
    pub disintegrate_delay_ms: u32,
    pub storage_key: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            matrix_delay_ms: 1000,
            glitch_delay_ms: 500,
            disintegrate_delay_ms: 2000,
            storage_key: SESSION_FILES_KEY.into(),
        }
    }
}

impl TerminalConfig {
    /// Effects start as soon as the host sees the request.
    pub fn immediate() -> Self {
        TerminalConfig {
            matrix_delay_ms: 0,
            glitch_delay_ms: 0,
            disintegrate_delay_ms: 0,
            ..Self::default()
        }
    }

    fn delay_for(&self, kind: EffectKind) -> u32 {
        match kind {
            EffectKind::Disintegrate => self.disintegrate_delay_ms,
            EffectKind::Matrix => self.matrix_delay_ms,
            EffectKind::Glitch => self.glitch_delay_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DownloadSource {
    Url(String),
    /// Served as a `text/plain` blob.
    Inline(String),
}

/// Side effects the page has to carry out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Request {
    StartEffect {
        effect: EffectKind,
        delay_ms: u32,
    },
    OpenEditor {
        file_name: String,
        initial_content: String,
    },
    Download {
        file_name: String,
        source: DownloadSource,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Response {
    pub output: Output,
    pub requests: Vec<Request>,
}

impl Response {
    fn new(output: Output) -> Self {
        Response {
            output,
            requests: Vec::new(),
        }
    }

    fn with(mut self, request: Request) -> Self {
        self.requests.push(request);
        self
    }
}

fn usage(text: &str) -> Response {
    Response::new(Output::error(format!("usage: {}", text)))
}

pub struct Terminal<S: KeyValueStorage> {
    config: TerminalConfig,
    catalog: Catalog,
    store: SessionStore<S>,
    history: Vec<HistoryEntry>,
    recall: InputHistory,
    theme: Theme,
    effects: Effects,
    state: SessionState,
    editor: Option<EditorSession>,
}

impl<S: KeyValueStorage> Terminal<S> {
    pub fn new(storage: S, config: TerminalConfig) -> Self {
        let store = SessionStore::load_with_key(storage, &config.storage_key);
        log::info(&format!("loaded {} session file(s)", store.len()));
        Terminal {
            config,
            catalog: Catalog::new(),
            store,
            history: Vec::new(),
            recall: InputHistory::new(),
            theme: Theme::default(),
            effects: Effects::new(),
            state: SessionState::Running,
            editor: None,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_broken(&self) -> bool {
        self.state == SessionState::Broken
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn editor(&self) -> Option<&EditorSession> {
        self.editor.as_ref()
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recall_previous(&mut self) -> Option<String> {
        self.recall.previous()
    }

    pub fn recall_next(&mut self) -> Option<String> {
        self.recall.next()
    }

    /// Runs one prompt line. Everything except `clear` and blank input is
    /// recorded in the history, errors included.
    pub fn exec(&mut self, line: &str) -> Response {
        if self.is_broken() {
            return Response::default();
        }
        self.recall.push(line);
        let cmd = Command::parse(line.trim());
        match cmd {
            Command::Empty => Response::default(),
            Command::Clear => {
                self.history.clear();
                Response::default()
            }
            cmd => {
                let response = self.dispatch(cmd, line);
                self.history.push(HistoryEntry {
                    input: line.into(),
                    output: response.output.clone(),
                    timestamp: now_ms(),
                });
                response
            }
        }
    }

    fn dispatch(&mut self, cmd: Command, raw: &str) -> Response {
        match cmd {
            Command::Help => Response::new(content::help()),
            Command::Whoami => Response::new(content::whoami()),
            Command::Ls(dir) => Response::new(self.cmd_ls(dir.as_deref())),
            Command::Download(Some(name)) => self.cmd_download(&name),
            Command::Download(None) => usage("download <file>"),
            Command::Vim(Some(name)) => self.cmd_vim(&name),
            Command::Vim(None) => usage("vim <file>"),
            Command::Cat(Some(name)) => Response::new(self.cmd_cat(&name)),
            Command::Cat(None) => usage("cat <file>"),
            Command::Touch(Some(name)) => Response::new(self.cmd_touch(&name)),
            Command::Touch(None) => usage("touch <file>"),
            Command::Rm(Some(name)) => Response::new(self.cmd_rm(&name)),
            Command::Rm(None) => usage("rm <file>"),
            Command::Session(sub) => Response::new(self.cmd_session(sub)),
            Command::Open(Some(key)) => Response::new(match find_project(&key) {
                Some(p) => content::project_detail(p),
                None => Output::error(format!(
                    "Oops, project '{}' doesn't exist. Try 'ls projects' to see the list.",
                    key
                )),
            }),
            Command::Open(None) => usage("open <project>"),
            Command::Contact => Response::new(content::contact()),
            Command::Color(Some(name)) => Response::new(self.cmd_color(&name)),
            Command::Color(None) => usage(&format!("color <theme> ({})", Theme::names())),
            Command::Matrix => self.start_effect(
                EffectKind::Matrix,
                Output::success("Wake up, Neo...").styled(Style::Muted, "Press Ctrl+C to exit."),
            ),
            Command::Glitch => self.start_effect(
                EffectKind::Glitch,
                Output::warning("Something is wrong with the system..."),
            ),
            Command::HireMe => Response::new(content::hire_me()),
            Command::ClearAll => self.start_effect(
                EffectKind::Disintegrate,
                Output::new()
                    .styled(Style::Muted, "Starting advanced cleanup protocol...")
                    .styled(Style::Muted, "Processing molecular disintegration..."),
            ),
            Command::Unknown => Response::new(Output::error(format!(
                "'{}'? What command is that? Type 'help' to see the options.",
                raw
            ))),
            // handled by exec
            Command::Empty | Command::Clear => Response::default(),
        }
    }

    fn cmd_ls(&self, dir: Option<&str>) -> Output {
        let Some(dir) = dir else {
            return Output::new().line(
                Category::ALL
                    .iter()
                    .map(|c| Span::bold(format!("{}/  ", c.as_str())))
                    .collect(),
            );
        };
        match Category::parse(dir) {
            Some(Category::Projects) => content::project_cards(),
            Some(Category::Cv) => {
                let mut out = Output::new();
                for f in self.catalog.files(Category::Cv) {
                    out.push(file_line(f, false));
                }
                out
            }
            Some(Category::Documents) => {
                let mut out = Output::new();
                for f in self.catalog.files(Category::Documents) {
                    out.push(file_line(f, false));
                }
                for f in self.store.list_sorted() {
                    out.push(file_line(f, true));
                }
                out
            }
            None => Output::error(format!("ls: cannot access '{}': no such directory", dir)),
        }
    }

    fn cmd_download(&self, name: &str) -> Response {
        let Some(file) = self.catalog.find(name).or_else(|| self.store.get(name)) else {
            return Response::new(Output::error(format!("download: '{}': file not found", name)));
        };
        let source = match (&file.download_url, &file.content) {
            (Some(url), _) => DownloadSource::Url(url.clone()),
            (None, content) => DownloadSource::Inline(content.clone().unwrap_or_default()),
        };
        Response::new(Output::success(format!(
            "Downloading {} ({})...",
            file.name,
            format_file_size(file.size)
        )))
        .with(Request::Download {
            file_name: file.name.clone(),
            source,
        })
    }

    /// Session store first, then the public documents.
    fn resolve(&self, name: &str) -> Option<&FileRecord> {
        self.store
            .get(name)
            .or_else(|| self.catalog.find_in(Category::Documents, name))
    }

    fn cmd_vim(&mut self, name: &str) -> Response {
        let initial = self
            .resolve(name)
            .and_then(|f| f.content.clone())
            .unwrap_or_default();
        self.editor = Some(EditorSession::open(name, &initial));
        Response::new(Output::new().text(format!("Opening {} in vim...", name)))
            .with(Request::OpenEditor {
                file_name: name.into(),
                initial_content: initial,
            })
    }

    fn cmd_cat(&self, name: &str) -> Output {
        match self.resolve(name).and_then(|f| f.content.as_deref()) {
            Some(text) => Output::new().pre(text),
            None => Output::error(format!("cat: {}: no such file or no text content", name)),
        }
    }

    fn cmd_touch(&mut self, name: &str) -> Output {
        if self.store.contains(name) {
            return Output::warning(format!("touch: '{}' already exists", name));
        }
        self.store.save(name, "");
        Output::success(format!("Created {}", name))
    }

    fn cmd_rm(&mut self, name: &str) -> Output {
        if !self.store.contains(name) {
            return Output::error(format!("rm: '{}': not found in session files", name));
        }
        self.store.delete(name);
        Output::success(format!("Removed {}", name))
    }

    fn cmd_session(&mut self, sub: SessionCommand) -> Output {
        match sub {
            SessionCommand::Info => {
                let total = self.store.total_size();
                let mut out = Output::new()
                    .styled(Style::Bold, "Session files")
                    .text(format!("Files: {}", self.store.len()))
                    .text(format!(
                        "Total size: {} bytes ({})",
                        total,
                        format_file_size(total)
                    ));
                for f in self.store.list_sorted() {
                    out = out.bullet(format!("{} ({} bytes)", f.name, f.size));
                }
                out
            }
            SessionCommand::Clear => {
                let n = self.store.len();
                self.store.clear_all();
                Output::success(format!("Session cleared ({} file(s) removed)", n))
            }
            SessionCommand::Help => content::session_help(),
        }
    }

    fn cmd_color(&mut self, name: &str) -> Output {
        match Theme::parse(name) {
            Some(theme) => {
                self.theme = theme;
                Output::success(format!("Done! Theme is now: {}", theme.as_str()))
            }
            None => Output::error(format!(
                "Invalid theme '{}'. Try one of: {}",
                name,
                Theme::names()
            )),
        }
    }

    fn start_effect(&mut self, kind: EffectKind, output: Output) -> Response {
        self.effects.request(kind);
        Response::new(output).with(Request::StartEffect {
            effect: kind,
            delay_ms: self.config.delay_for(kind),
        })
    }

    /// Host callback once the start delay has elapsed.
    pub fn begin_effect(&mut self, kind: EffectKind) -> bool {
        if self.is_broken() {
            return false;
        }
        self.effects.begin(kind)
    }

    /// Host callback when an effect finished or was cancelled. Finishing the
    /// disintegration leaves the session broken for good.
    pub fn complete_effect(&mut self, kind: EffectKind) -> bool {
        if !self.effects.complete(kind) {
            return false;
        }
        if kind == EffectKind::Disintegrate {
            self.state = SessionState::Broken;
            self.editor = None;
            log::warn("reality has been disintegrated");
        }
        true
    }

    /// Editor save event. Ignored unless an editor is open.
    pub fn editor_save(&mut self, name: &str, content: &str) -> Option<Response> {
        if self.is_broken() {
            return None;
        }
        let editor = self.editor.as_mut()?;
        editor.file_name = name.into();
        editor.mark_saved(content);
        let record = self.store.save(name, content);
        let response = Response::new(Output::success(format!(
            "\"{}\" {}B written",
            record.name, record.size
        )));
        self.history.push(HistoryEntry {
            input: format!(":w {}", name),
            output: response.output.clone(),
            timestamp: now_ms(),
        });
        Some(response)
    }

    pub fn editor_exit(&mut self) -> bool {
        self.editor.take().is_some()
    }

    /// Candidate full lines for tab completion, sorted.
    pub fn complete(&self, partial: &str) -> Vec<String> {
        let partial = partial.trim_start();
        let Some((cmd, arg)) = partial.split_once(' ') else {
            let lower = partial.to_lowercase();
            return COMMAND_NAMES
                .iter()
                .filter(|c| c.starts_with(&lower))
                .map(|c| c.to_string())
                .collect();
        };
        let cmd = cmd.to_lowercase();
        let arg = arg.trim_start();
        let mut candidates: Vec<String> = match cmd.as_str() {
            "ls" => Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            "open" => PROJECTS.iter().map(|p| p.key.to_string()).collect(),
            "color" => Theme::ALL.iter().map(|t| t.as_str().to_string()).collect(),
            "session" => vec!["info".into(), "clear".into()],
            "sudo" => vec!["hire-me".into()],
            "download" => self
                .catalog
                .names()
                .map(String::from)
                .chain(self.store.list().iter().map(|f| f.name.clone()))
                .collect(),
            "cat" | "vim" => self
                .catalog
                .files(Category::Documents)
                .iter()
                .map(|f| f.name.clone())
                .chain(self.store.list().iter().map(|f| f.name.clone()))
                .collect(),
            "rm" | "touch" => self.store.list().iter().map(|f| f.name.clone()).collect(),
            _ => Vec::new(),
        };
        candidates.retain(|c| c.starts_with(arg));
        candidates.sort();
        candidates.dedup();
        candidates
            .into_iter()
            .map(|c| format!("{} {}", cmd, c))
            .collect()
    }
}

fn file_line(f: &FileRecord, session: bool) -> Block {
    let mut spans = vec![
        Span::plain(format!("{} ", file_icon(&f.extension))),
        Span::bold(f.name.clone()),
        Span::new(format!("  {}", format_file_size(f.size)), Style::Muted),
    ];
    if session {
        spans.push(Span::new("  [session]", Style::Success));
    }
    Block::Line { spans }
}
