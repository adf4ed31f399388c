use crate::{
    browser,
    content::{self, BOOT_LINES},
    effects::EffectKind,
    log,
    persist::LocalStorage,
    shell::PROMPT,
    terminal::{Request, Response, Terminal, TerminalConfig},
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::error(&format!("failed to serialize response: {}", e));
            "{}".into()
        }
    }
}

fn effect(kind: &str) -> Option<EffectKind> {
    let parsed = EffectKind::parse(kind);
    if parsed.is_none() {
        log::warn(&format!("unknown effect '{}'", kind));
    }
    parsed
}

/// The page's handle on the terminal. Every method is an event from the
/// page: a submitted line, a timer firing, an animation finishing, an
/// editor callback.
#[wasm_bindgen]
pub struct System {
    term: Terminal<LocalStorage>,
}

impl System {
    fn apply_downloads(&self, response: &Response) {
        for req in &response.requests {
            if let Request::Download { file_name, source } = req {
                if let Err(e) = browser::trigger_download(file_name, source) {
                    log::error(&format!("download of {} failed: {:?}", file_name, e));
                }
            }
        }
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl System {
    #[wasm_bindgen(constructor)]
    pub fn new() -> System {
        System {
            term: Terminal::new(LocalStorage::new(), TerminalConfig::default()),
        }
    }

    /// Same as `new` with custom effect start delays in milliseconds.
    #[wasm_bindgen(js_name = withDelays)]
    pub fn with_delays(matrix_ms: u32, glitch_ms: u32, disintegrate_ms: u32) -> System {
        let config = TerminalConfig {
            matrix_delay_ms: matrix_ms,
            glitch_delay_ms: glitch_ms,
            disintegrate_delay_ms: disintegrate_ms,
            ..TerminalConfig::default()
        };
        System {
            term: Terminal::new(LocalStorage::new(), config),
        }
    }

    #[wasm_bindgen]
    pub fn prompt(&self) -> String {
        PROMPT.into()
    }

    #[wasm_bindgen]
    pub fn boot_lines(&self) -> Vec<JsValue> {
        BOOT_LINES.iter().map(|l| JsValue::from_str(l)).collect()
    }

    /// Runs one line and returns the `Response` as JSON. Downloads are
    /// started here; effect and editor requests are left to the page.
    #[wasm_bindgen]
    pub fn exec(&mut self, line: &str) -> String {
        let response = self.term.exec(line);
        self.apply_downloads(&response);
        to_json(&response)
    }

    #[wasm_bindgen]
    pub fn history_json(&self) -> String {
        to_json(self.term.history())
    }

    #[wasm_bindgen]
    pub fn theme(&self) -> String {
        self.term.theme().as_str().into()
    }

    #[wasm_bindgen]
    pub fn theme_class(&self) -> String {
        self.term.theme().css_class().into()
    }

    #[wasm_bindgen]
    pub fn is_broken(&self) -> bool {
        self.term.is_broken()
    }

    #[wasm_bindgen]
    pub fn broken_screen_json(&self) -> String {
        to_json(&content::broken_screen())
    }

    #[wasm_bindgen]
    pub fn begin_effect(&mut self, kind: &str) -> bool {
        effect(kind).is_some_and(|k| self.term.begin_effect(k))
    }

    #[wasm_bindgen]
    pub fn complete_effect(&mut self, kind: &str) -> bool {
        effect(kind).is_some_and(|k| self.term.complete_effect(k))
    }

    #[wasm_bindgen]
    pub fn is_effect_active(&self, kind: &str) -> bool {
        effect(kind).is_some_and(|k| self.term.effects().is_active(k))
    }

    /// Empty string when no editor is open.
    #[wasm_bindgen]
    pub fn editor_save(&mut self, name: &str, content: &str) -> String {
        self.term
            .editor_save(name, content)
            .map(|r| to_json(&r))
            .unwrap_or_default()
    }

    #[wasm_bindgen]
    pub fn editor_exit(&mut self) -> bool {
        self.term.editor_exit()
    }

    #[wasm_bindgen]
    pub fn editor_file(&self) -> Option<String> {
        self.term.editor().map(|e| e.file_name.clone())
    }

    #[wasm_bindgen]
    pub fn editor_modified(&self, current: &str) -> bool {
        self.term.editor().is_some_and(|e| e.is_modified(current))
    }

    #[wasm_bindgen]
    pub fn recall_previous(&mut self) -> Option<String> {
        self.term.recall_previous()
    }

    #[wasm_bindgen]
    pub fn recall_next(&mut self) -> Option<String> {
        self.term.recall_next()
    }

    #[wasm_bindgen]
    pub fn complete(&self, partial: &str) -> Vec<JsValue> {
        self.term
            .complete(partial)
            .iter()
            .map(|c| JsValue::from_str(c))
            .collect()
    }
}
