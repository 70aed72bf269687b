use colored::{ColoredString, Colorize};

use super::layout::{Element, FontStyle, Page, ReportDocument, Rgb, PAGE_WIDTH};
use super::wrap::display_width;

/// Millimetres per rendered column.
const COLUMN_MM: f32 = 2.0;
/// Millimetres per rendered row.
const ROW_MM: f32 = 3.0;
const COLUMNS: usize = (PAGE_WIDTH / COLUMN_MM) as usize;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Emit truecolor ANSI escapes for colours and font styles.
    pub ansi: bool,
}

struct Span {
    row: usize,
    column: usize,
    text: String,
    color: Rgb,
    background: Option<Rgb>,
    style: FontStyle,
}

fn row_of(y: f32) -> usize {
    (y.max(0.0) / ROW_MM).round() as usize
}

fn column_of(x: f32) -> usize {
    (x.max(0.0) / COLUMN_MM).round() as usize
}

/// Fill colour of the last filled rectangle on the page covering `(x, y)`.
fn background_at(page: &Page, x: f32, y: f32, own: &Element) -> Option<Rgb> {
    page.elements
        .iter()
        .take_while(|e| !std::ptr::eq(*e, own))
        .filter_map(|e| match e {
            Element::Rect {
                x: rx,
                y: ry,
                width,
                height,
                fill: Some(fill),
                ..
            } if x >= *rx && x <= rx + width && y >= *ry && y <= ry + height => Some(*fill),
            _ => None,
        })
        .last()
}

fn spans(page: &Page) -> Vec<Span> {
    let mut spans: Vec<Span> = page
        .elements
        .iter()
        .filter_map(|element| match element {
            Element::Text {
                x,
                y,
                content,
                font,
                color,
            } => Some(Span {
                row: row_of(*y),
                column: column_of(*x),
                text: content.clone(),
                color: *color,
                background: background_at(page, *x, *y, element),
                style: font.style,
            }),
            Element::Line {
                x1, y1, x2, color, ..
            } => {
                let (start, end) = (column_of(x1.min(*x2)), column_of(x1.max(*x2)));
                Some(Span {
                    row: row_of(*y1),
                    column: start,
                    text: "─".repeat(end.saturating_sub(start).max(1)),
                    color: *color,
                    background: None,
                    style: FontStyle::Normal,
                })
            }
            Element::Rect { .. } => None,
        })
        .collect();
    spans.sort_by_key(|s| (s.row, s.column));
    spans
}

fn paint(span: &Span, ansi: bool) -> String {
    if !ansi {
        return span.text.clone();
    }
    let Rgb(r, g, b) = span.color;
    let mut painted: ColoredString = span.text.truecolor(r, g, b);
    painted = match span.style {
        FontStyle::Bold => painted.bold(),
        FontStyle::Italic => painted.italic(),
        FontStyle::Normal => painted,
    };
    if let Some(Rgb(r, g, b)) = span.background {
        painted = painted.on_truecolor(r, g, b);
    }
    painted.to_string()
}

fn render_page(page: &Page, ansi: bool) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_row = None;
    let mut line = String::new();
    let mut width = 0;

    for span in spans(page) {
        if current_row != Some(span.row) {
            if let Some(previous) = current_row {
                lines.push(std::mem::take(&mut line));
                // Collapse vertical gaps to a single blank line.
                if span.row > previous + 1 {
                    lines.push(String::new());
                }
            }
            current_row = Some(span.row);
            width = 0;
        }
        let gap = if width == 0 {
            span.column
        } else {
            span.column.saturating_sub(width).max(1)
        };
        line.push_str(&" ".repeat(gap));
        line.push_str(&paint(&span, ansi));
        width += gap + display_width(&span.text);
    }
    if current_row.is_some() {
        lines.push(line);
    }
    lines
}

/// Renders every page as fixed-width text, pages separated by a rule.
pub fn render_text(doc: &ReportDocument, options: RenderOptions) -> String {
    let separator = "═".repeat(COLUMNS);
    let mut out = String::new();
    for (i, page) in doc.pages.iter().enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(&separator);
            out.push_str("\n\n");
        }
        for line in render_page(page, options.ansi) {
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}
