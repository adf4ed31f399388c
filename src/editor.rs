/// An open editor: the page owns the widget, we only remember what it was
/// opened on and what was last written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    pub file_name: String,
    pub initial_content: String,
    saved_content: String,
}

impl EditorSession {
    pub fn open(file_name: &str, initial_content: &str) -> Self {
        EditorSession {
            file_name: file_name.into(),
            initial_content: initial_content.into(),
            saved_content: initial_content.into(),
        }
    }

    pub fn mark_saved(&mut self, content: &str) {
        self.saved_content = content.into();
    }

    /// Whether `current` differs from the last saved (or initial) content.
    pub fn is_modified(&self, current: &str) -> bool {
        self.saved_content != current
    }
}
