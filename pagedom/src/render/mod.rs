//! Turns a document into styled terminal lines.
//!
//! Layout is a single column: every visible element gets its own row, nested
//! elements are indented, sections are separated by a blank row.

use unicode_width::UnicodeWidthChar;

use crate::document::Document;
use crate::element::{Element, ElementKind, InputKind};
use crate::types::{Palette, Style, Theme};

const INDENT: usize = 2;
const INPUT_WIDTH: usize = 32;
const MASK_CHAR: char = '•';

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One terminal row, tagged with the element it shows (for hit testing).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub target: Option<String>,
    pub spans: Vec<Span>,
}

impl Line {
    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Everything the terminal needs to paint one frame.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub lines: Vec<Line>,
    /// Column/row of the text cursor when an input is focused.
    pub cursor: Option<(u16, u16)>,
}

impl Frame {
    /// Element shown on `row`, if any.
    pub fn target_at(&self, row: u16) -> Option<&str> {
        self.lines.get(row as usize)?.target.as_deref()
    }

    /// First row showing element `id`.
    pub fn row_of(&self, id: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.target.as_deref() == Some(id))
    }

    /// The `height` rows starting at `offset`, in screen coordinates.
    ///
    /// The cursor is dropped when its row is scrolled out.
    pub fn viewport(&self, offset: usize, height: u16) -> Frame {
        let lines = self
            .lines
            .iter()
            .skip(offset)
            .take(height as usize)
            .cloned()
            .collect();
        let cursor = self.cursor.and_then(|(col, row)| {
            let row = (row as usize).checked_sub(offset)?;
            (row < height as usize).then_some((col, row as u16))
        });
        Frame { lines, cursor }
    }
}

/// Render the document. `cursor` is the byte offset of the focused input's cursor.
pub fn render(
    document: &Document,
    focused: Option<&str>,
    cursor: Option<usize>,
    palette: &Palette,
    width: u16,
) -> Frame {
    let mut ctx = RenderContext {
        frame: Frame::default(),
        focused,
        cursor,
        palette,
        width: width as usize,
    };
    ctx.element(document.body(), 0);
    ctx.frame
}

struct RenderContext<'a> {
    frame: Frame,
    focused: Option<&'a str>,
    cursor: Option<usize>,
    palette: &'a Palette,
    width: usize,
}

impl RenderContext<'_> {
    fn element(&mut self, el: &Element, depth: usize) {
        let indent = " ".repeat(depth.saturating_sub(1) * INDENT);
        let focused = self.focused == Some(el.id.as_str());
        let base = Style::new().fg(self.palette.foreground);

        match el.kind {
            ElementKind::Body | ElementKind::Form => {
                for child in &el.children {
                    self.element(child, depth + 1);
                }
            }
            ElementKind::Section => {
                if !self.frame.lines.is_empty() {
                    self.push(None, vec![]);
                }
                for child in &el.children {
                    self.element(child, depth + 1);
                }
            }
            ElementKind::Heading => {
                let style = Style::new().fg(self.palette.primary).bold();
                self.push(
                    Some(&el.id),
                    vec![Span::new(indent, base), Span::new(el.text.clone(), style)],
                );
            }
            ElementKind::Paragraph | ElementKind::Label => {
                let style = self.class_style(el, base);
                self.push(
                    Some(&el.id),
                    vec![Span::new(indent, base), Span::new(el.text.clone(), style)],
                );
            }
            ElementKind::Button => {
                let mut style = Style::new().fg(self.palette.primary).bold();
                if focused {
                    style = style.reversed();
                }
                self.push(
                    Some(&el.id),
                    vec![
                        Span::new(indent, base),
                        Span::new(format!("[ {} ]", el.text), style),
                    ],
                );
            }
            ElementKind::Input(kind) => {
                let shown = match kind {
                    InputKind::Password => MASK_CHAR.to_string().repeat(el.value.chars().count()),
                    InputKind::Text | InputKind::Email => el.value.clone(),
                };

                let mut field_style = Style::new().fg(self.palette.foreground).bg(self.palette.surface);
                if focused {
                    field_style = field_style.underline();
                }

                let (content, content_style) = match (&el.placeholder, shown.is_empty() && !focused) {
                    (Some(placeholder), true) => (placeholder.clone(), field_style.fg(self.palette.muted).dim()),
                    _ => (shown.clone(), field_style),
                };

                let padding = INPUT_WIDTH.saturating_sub(display_width(&content));
                let row = self.frame.lines.len();

                if focused {
                    // Masked chars may differ in byte length, so count chars up to the cursor.
                    let byte_cursor = self.cursor.unwrap_or(el.value.len()).min(el.value.len());
                    let before = match kind {
                        InputKind::Password => el.value[..byte_cursor].chars().count(),
                        InputKind::Text | InputKind::Email => display_width(&el.value[..byte_cursor]),
                    };
                    let col = display_width(&indent) + 1 + before;
                    self.frame.cursor = Some((col as u16, row as u16));
                }

                self.push(
                    Some(&el.id),
                    vec![
                        Span::new(indent, base),
                        Span::new(" ", field_style),
                        Span::new(content, content_style),
                        Span::new(" ".repeat(padding + 1), field_style),
                    ],
                );
            }
        }
    }

    /// Style for text elements: the first class the palette knows colors the text.
    fn class_style(&self, el: &Element, base: Style) -> Style {
        el.classes
            .iter()
            .find_map(|class| self.palette.resolve(class))
            .map(|color| base.fg(color))
            .unwrap_or(base)
    }

    fn push(&mut self, target: Option<&str>, spans: Vec<Span>) {
        let spans = truncate(spans, self.width);
        self.frame.lines.push(Line {
            target: target.map(str::to_string),
            spans,
        });
    }
}

/// Terminal column width of `text`.
pub fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

fn truncate(spans: Vec<Span>, width: usize) -> Vec<Span> {
    let mut remaining = width;
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if remaining == 0 {
            break;
        }
        let mut text = String::new();
        for c in span.text.chars() {
            let w = c.width().unwrap_or(0);
            if w > remaining {
                remaining = 0;
                break;
            }
            remaining -= w;
            text.push(c);
        }
        out.push(Span::new(text, span.style));
    }

    out
}
