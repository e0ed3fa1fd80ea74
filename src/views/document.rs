// src/views/document.rs
//
// Terminal rendering target: an ordered list of lines plus the numbered
// links a reader can follow from them.

use console::{style, StyledObject};

use crate::application::router::Route;

/// Colour intent of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Muted,
    Gold,
    Orange,
    Yellow,
    Blue,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Heading(String),
    Text(String, Tone),
    Field { label: String, value: String, tone: Tone },
    Link { index: usize, label: String, route: Route },
    Badge(String),
    Blank,
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    indent: usize,
    line: Line,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: Vec<Entry>,
    links: Vec<Route>,
    indent: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, line: Line) -> &mut Self {
        self.entries.push(Entry {
            indent: self.indent,
            line,
        });
        self
    }

    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Line::Heading(text.into()))
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Line::Text(text.into(), Tone::Plain))
    }

    pub fn styled(&mut self, text: impl Into<String>, tone: Tone) -> &mut Self {
        self.push(Line::Text(text.into(), tone))
    }

    pub fn field(&mut self, label: impl Into<String>, value: impl ToString) -> &mut Self {
        self.field_toned(label, value, Tone::Plain)
    }

    pub fn field_toned(&mut self, label: impl Into<String>, value: impl ToString, tone: Tone) -> &mut Self {
        self.push(Line::Field {
            label: label.into(),
            value: value.to_string(),
            tone,
        })
    }

    /// Adds a followable link; its number is its 1-based position
    pub fn link(&mut self, label: impl Into<String>, route: Route) -> usize {
        self.links.push(route);
        let index = self.links.len();
        self.push(Line::Link {
            index,
            label: label.into(),
            route,
        });
        index
    }

    pub fn badge(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Line::Badge(text.into()))
    }

    pub fn blank(&mut self) -> &mut Self {
        self.push(Line::Blank)
    }

    /// Lines added inside `build` are indented one level
    pub fn indented<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut Document),
    {
        self.indent += 1;
        build(self);
        self.indent -= 1;
        self
    }

    pub fn links(&self) -> &[Route] {
        &self.links
    }

    /// Route behind link number `index` (1-based)
    pub fn follow(&self, index: usize) -> Option<Route> {
        index.checked_sub(1).and_then(|i| self.links.get(i)).copied()
    }

    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let pad = "  ".repeat(entry.indent);
            let body = match &entry.line {
                Line::Heading(text) => paint(style(format!("== {} ==", text)).bold().yellow(), color),
                Line::Text(text, tone) => paint(toned(text.clone(), *tone), color),
                Line::Field { label, value, tone } => format!(
                    "{} {}",
                    paint(style(format!("{}:", label)).cyan().bold(), color),
                    paint(toned(value.clone(), *tone), color)
                ),
                Line::Link { index, label, .. } => format!(
                    "{} {}",
                    paint(style(format!("[{}]", index)).dim(), color),
                    paint(style(label.clone()).underlined(), color)
                ),
                Line::Badge(text) => paint(style(format!("[{}]", text)).green().bold(), color),
                Line::Blank => String::new(),
            };
            if body.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&pad);
                out.push_str(&body);
                out.push('\n');
            }
        }
        out
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(false))
    }
}

fn toned(text: String, tone: Tone) -> StyledObject<String> {
    let styled = style(text);
    match tone {
        Tone::Plain => styled,
        Tone::Muted => styled.dim(),
        Tone::Gold => styled.color256(220).bold(),
        Tone::Orange => styled.color256(208),
        Tone::Yellow => styled.yellow(),
        Tone::Blue => styled.blue(),
        Tone::Danger => styled.red().bold(),
    }
}

fn paint(styled: StyledObject<String>, color: bool) -> String {
    if color {
        styled.to_string()
    } else {
        styled.force_styling(false).to_string()
    }
}
