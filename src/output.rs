//! Styled transcript output.
//!
//! Commands render into an [`Output`], a flat list of blocks the page turns
//! into DOM nodes. It serializes to JSON as
//! `[{"kind":"line","spans":[{"text":..,"style":..}]}, ...]`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Normal,
    Bold,
    Heading,
    Muted,
    Error,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Span {
            text: text.into(),
            style,
            href: None,
        }
    }
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::Normal)
    }
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, Style::Bold)
    }
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            style: Style::Normal,
            href: Some(href.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Line { spans: Vec<Span> },
    Bullet { spans: Vec<Span> },
    Pre { text: String },
    Card { title: String, body: String },
    Gap,
}

impl Block {
    fn plain_text(&self) -> String {
        let join = |spans: &[Span]| spans.iter().map(|s| s.text.as_str()).collect::<String>();
        match self {
            Block::Line { spans } => join(spans),
            Block::Bullet { spans } => format!("- {}", join(spans)),
            Block::Pre { text } => text.clone(),
            Block::Card { title, body } => format!("{}\n{}", title, body),
            Block::Gap => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Output {
    blocks: Vec<Block>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::new().styled(Style::Error, msg)
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::new().styled(Style::Success, msg)
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::new().styled(Style::Warning, msg)
    }

    pub fn line(mut self, spans: Vec<Span>) -> Self {
        self.blocks.push(Block::Line { spans });
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.line(vec![Span::plain(text)])
    }

    pub fn styled(self, style: Style, text: impl Into<String>) -> Self {
        self.line(vec![Span::new(text, style)])
    }

    pub fn bullet(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Bullet {
            spans: vec![Span::plain(text)],
        });
        self
    }

    pub fn pre(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Pre { text: text.into() });
        self
    }

    pub fn card(mut self, title: impl Into<String>, body: impl Into<String>) -> Self {
        self.blocks.push(Block::Card {
            title: title.into(),
            body: body.into(),
        });
        self
    }

    pub fn gap(mut self) -> Self {
        self.blocks.push(Block::Gap);
        self
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// True when any span is styled as an error.
    pub fn is_error(&self) -> bool {
        self.blocks.iter().any(|b| match b {
            Block::Line { spans } | Block::Bullet { spans } => {
                spans.iter().any(|s| s.style == Style::Error)
            }
            _ => false,
        })
    }

    /// Newline-joined text with styling dropped.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_flattens_blocks() {
        let out = Output::new()
            .line(vec![Span::bold("a"), Span::plain("b")])
            .bullet("c")
            .pre("x\ny")
            .card("T", "body");
        assert_eq!(out.plain_text(), "ab\n- c\nx\ny\nT\nbody");
        assert!(!out.is_error());
        assert!(Output::error("nope").is_error());
    }

    #[test]
    fn serializes_as_tagged_blocks() {
        let out = Output::new()
            .line(vec![Span::link("gh", "https://github.com")])
            .gap();
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json[0]["kind"], "line");
        assert_eq!(json[0]["spans"][0]["href"], "https://github.com");
        assert_eq!(json[0]["spans"][0]["style"], "normal");
        assert_eq!(json[1]["kind"], "gap");
    }
}
