//! Page model for the printable digest.
//!
//! Coordinates are millimetres from the top-left corner of an A4 page. The
//! builder only ever appends; pages are closed when the cursor would run into
//! the footer area.

use serde::Serialize;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 20.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - MARGIN * 2.0;
/// Height of the coloured band at the top of each page.
pub const HEADER_HEIGHT: f32 = 35.0;
/// Where content starts on every page, just under the header band.
pub const CONTENT_TOP: f32 = 45.0;
/// Space kept free at the bottom of each page for the footer.
pub const FOOTER_RESERVE: f32 = 30.0;

const PT_TO_MM: f32 = 0.3528;
const LINE_SPACING: f32 = 1.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const AP_BLUE: Rgb = Rgb(30, 64, 175);
pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BORDER_GREY: Rgb = Rgb(200, 200, 200);
pub const BOX_GREY: Rgb = Rgb(100, 100, 100);
pub const TABLE_HEADER_FILL: Rgb = Rgb(240, 240, 240);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    /// Points.
    pub size: f32,
    pub style: FontStyle,
}

impl Font {
    pub const fn new(size: f32, style: FontStyle) -> Self {
        Self { size, style }
    }

    pub const fn normal(size: f32) -> Self {
        Self::new(size, FontStyle::Normal)
    }

    pub const fn bold(size: f32) -> Self {
        Self::new(size, FontStyle::Bold)
    }

    pub const fn italic(size: f32) -> Self {
        Self::new(size, FontStyle::Italic)
    }

    /// Baseline-to-baseline distance in millimetres.
    pub fn line_height(&self) -> f32 {
        self.size * LINE_SPACING * PT_TO_MM
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    Text {
        x: f32,
        y: f32,
        content: String,
        font: Font,
        color: Rgb,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgb>,
        stroke: Option<Rgb>,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgb,
    },
}

impl Element {
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Element::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub elements: Vec<Element>,
}

impl Page {
    /// All text on the page in emission order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(Element::text_content)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

/// Sections of the report, recorded with the page they start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "block", content = "index", rename_all = "camelCase")]
pub enum BlockKind {
    Title,
    Details,
    ExecutiveSummary,
    AlertsHeading,
    /// Zero-based position in the alert list.
    Alert(usize),
    ClustersHeading,
    /// Zero-based position in the digest's cluster list.
    Cluster(usize),
    Statistics,
    Distribution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Zero-based page index.
    pub page: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub title: String,
    pub pages: Vec<Page>,
    pub blocks: Vec<Block>,
}

impl ReportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn blocks_of(&self, matches: impl Fn(&BlockKind) -> bool) -> Vec<Block> {
        self.blocks
            .iter()
            .filter(|b| matches(&b.kind))
            .copied()
            .collect()
    }
}

/// Append-only writer that tracks the vertical cursor and breaks pages.
pub(crate) struct PageWriter {
    pages: Vec<Page>,
    blocks: Vec<Block>,
    header: Vec<Element>,
    pub y: f32,
}

impl PageWriter {
    /// Starts the first page, stamping `header` onto it and every later page.
    pub fn new(header: Vec<Element>) -> Self {
        Self {
            pages: vec![Page {
                elements: header.clone(),
            }],
            blocks: Vec::new(),
            header,
            y: CONTENT_TOP,
        }
    }

    pub fn current_page(&self) -> usize {
        self.pages.len() - 1
    }

    /// Starts a new page if `required` millimetres no longer fit.
    pub fn ensure(&mut self, required: f32) -> bool {
        if self.y + required > PAGE_HEIGHT - FOOTER_RESERVE {
            self.pages.push(Page {
                elements: self.header.clone(),
            });
            self.y = CONTENT_TOP;
            return true;
        }
        false
    }

    /// Opens a block, breaking the page first when needed.
    pub fn begin(&mut self, kind: BlockKind, required: f32) {
        self.ensure(required);
        let page = self.current_page();
        self.blocks.push(Block { kind, page });
    }

    pub fn push(&mut self, element: Element) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    /// Text at `x`, `dy` below the cursor. The cursor does not move.
    pub fn text(&mut self, x: f32, dy: f32, content: impl Into<String>, font: Font, color: Rgb) {
        let y = self.y + dy;
        self.push(Element::Text {
            x,
            y,
            content: content.into(),
            font,
            color,
        });
    }

    /// One text element per line, spaced by `line_height`.
    pub fn lines(&mut self, x: f32, dy: f32, lines: &[String], font: Font, color: Rgb, line_height: f32) {
        for (i, line) in lines.iter().enumerate() {
            self.text(x, dy + i as f32 * line_height, line.clone(), font, color);
        }
    }

    pub fn rect(&mut self, x: f32, dy: f32, width: f32, height: f32, fill: Option<Rgb>, stroke: Option<Rgb>) {
        let y = self.y + dy;
        self.push(Element::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        });
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Applies `footer(page_number, total)` to every page and closes the document.
    pub fn finish(
        mut self,
        title: String,
        footer: impl Fn(usize, usize) -> Vec<Element>,
    ) -> ReportDocument {
        let total = self.pages.len();
        for (i, page) in self.pages.iter_mut().enumerate() {
            page.elements.extend(footer(i + 1, total));
        }
        ReportDocument {
            title,
            pages: self.pages,
            blocks: self.blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<Element> {
        vec![Element::Rect {
            x: 0.0,
            y: 0.0,
            width: PAGE_WIDTH,
            height: HEADER_HEIGHT,
            fill: Some(AP_BLUE),
            stroke: None,
        }]
    }

    #[test]
    fn test_break_resets_cursor_below_header() {
        let mut writer = PageWriter::new(header());
        writer.advance(200.0);
        assert!(!writer.ensure(20.0));
        assert!(writer.ensure(30.0));
        assert_eq!(writer.y, CONTENT_TOP);
        assert_eq!(writer.current_page(), 1);
    }

    #[test]
    fn test_every_page_gets_header_and_footer() {
        let mut writer = PageWriter::new(header());
        writer.begin(BlockKind::Title, 10.0);
        writer.advance(250.0);
        writer.begin(BlockKind::Statistics, 10.0);

        let doc = writer.finish("t".to_string(), |i, n| {
            vec![Element::Text {
                x: MARGIN,
                y: 285.0,
                content: format!("Page {} of {}", i, n),
                font: Font::normal(8.0),
                color: BLACK,
            }]
        });
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.blocks[1], Block { kind: BlockKind::Statistics, page: 1 });
        for (i, page) in doc.pages.iter().enumerate() {
            assert!(matches!(page.elements[0], Element::Rect { .. }));
            assert!(page.contains_text(&format!("Page {} of 2", i + 1)));
        }
    }
}
