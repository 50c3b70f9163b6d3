//! SVG rendering for capability tables.
//!
//! The table is laid out as a grid of fixed-height rows. Each column is as
//! wide as its widest cell (by Unicode display width) plus padding. Every
//! cell becomes a `<rect>` and, unless empty, a `<text>`:
//!
//! | Cell                  | Class     |
//! |-----------------------|-----------|
//! | top-left corner       | `corner`  |
//! | header label          | `feature` |
//! | entity name           | `name`    |
//! | presence marker       | `has`     |
//! | absence marker        | `has-not` |
//!
//! Rows are grouped in `<g class="row">`, the header in
//! `<g class="row header">`. A style document, when given, is embedded as
//! the content of a single `<style>` element and can target these classes.
//! Without one the image only carries plain presentation attributes.

use std::fmt;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use unicode_width::UnicodeWidthStr;

use super::{RenderError, TableRenderer};
use crate::table::{Cell, Table};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Geometry and typography for [`SvgRenderer`], in SVG user units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgLayout {
    /// Font size of all cell text.
    pub font_size: u32,
    /// Width assumed for one display column of text.
    pub char_width: u32,
    /// Horizontal padding on each side of a cell.
    pub padding: u32,
    /// Height of every row.
    pub row_height: u32,
    /// Font family attribute on the root element.
    pub font_family: String,
}

impl Default for SvgLayout {
    fn default() -> Self {
        Self {
            font_size: 14,
            char_width: 8,
            padding: 10,
            row_height: 28,
            font_family: "sans-serif".to_string(),
        }
    }
}

impl SvgLayout {
    /// Width of each column, in table column order.
    pub fn column_widths(&self, grid: &[Vec<String>]) -> Vec<u32> {
        let columns = grid.first().map_or(0, Vec::len);
        (0..columns)
            .map(|col| {
                let widest = grid
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|text| text.width() as u32)
                    .max()
                    .unwrap_or(0);
                widest * self.char_width + 2 * self.padding
            })
            .collect()
    }
}

/// Renders a [`Table`] as a standalone SVG document.
///
/// # Example
///
/// ```rust
/// use featmatrix::{build, EntityRecord, SvgRenderer, TableRenderer, DEFAULT_HAS, DEFAULT_HAS_NOT};
///
/// let table = build(&[EntityRecord::new("Batman", ["fly"])], DEFAULT_HAS, DEFAULT_HAS_NOT);
/// let bytes = SvgRenderer::default().render(&table, None).unwrap();
/// let svg = String::from_utf8(bytes).unwrap();
/// assert!(svg.contains("Batman"));
/// assert!(!svg.contains("<style"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    layout: SvgLayout,
}

impl SvgRenderer {
    pub fn new(layout: SvgLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &SvgLayout {
        &self.layout
    }
}

impl TableRenderer for SvgRenderer {
    fn render<M: fmt::Display>(
        &self,
        table: &Table<M>,
        style: Option<&str>,
    ) -> Result<Vec<u8>, RenderError> {
        let layout = &self.layout;
        let grid = table.to_grid();
        let widths = layout.column_widths(&grid);

        let total_width: u32 = widths.iter().sum();
        let total_height = layout.row_height * grid.len() as u32;

        let mut out = SvgWriter::new();
        out.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let width = total_width.to_string();
        let height = total_height.to_string();
        let view_box = format!("0 0 {} {}", total_width, total_height);
        let font_size = layout.font_size.to_string();
        out.start(
            "svg",
            &[
                ("xmlns", SVG_NAMESPACE),
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("viewBox", view_box.as_str()),
                ("class", "featmatrix"),
                ("font-family", layout.font_family.as_str()),
                ("font-size", font_size.as_str()),
            ],
        )?;

        if let Some(style) = style {
            out.start("style", &[])?;
            out.text(style)?;
            out.end("style")?;
        }

        for (row_index, (row, texts)) in table.rows().iter().zip(&grid).enumerate() {
            let top = row_index as u32 * layout.row_height;
            let group_class = if row_index == 0 { "row header" } else { "row" };
            out.start("g", &[("class", group_class)])?;

            let mut left = 0;
            for (col_index, ((cell, text), width)) in row.iter().zip(texts).zip(&widths).enumerate()
            {
                let class = cell_class(row_index, col_index, cell);
                let frame = CellFrame {
                    left,
                    top,
                    width: *width,
                    height: layout.row_height,
                };
                out.cell(class, &frame, text, layout.padding, col_index == 0)?;
                left += width;
            }

            out.end("g")?;
        }

        out.end("svg")?;
        tracing::debug!(
            rows = grid.len(),
            width = total_width,
            height = total_height,
            styled = style.is_some(),
            "rendered svg table"
        );
        Ok(out.finish())
    }
}

fn cell_class<M>(row: usize, col: usize, cell: &Cell<M>) -> &'static str {
    match (row, col, cell) {
        (0, 0, _) => "corner",
        (0, _, _) => "feature",
        (_, _, Cell::Present(_)) => "has",
        (_, _, Cell::Absent(_)) => "has-not",
        (_, _, Cell::Text(_)) => "name",
    }
}

struct CellFrame {
    left: u32,
    top: u32,
    width: u32,
    height: u32,
}

/// Thin wrapper over the quick-xml writer that maps its errors.
struct SvgWriter {
    inner: Writer<Vec<u8>>,
}

impl SvgWriter {
    fn new() -> Self {
        Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        self.inner
            .write_event(event)
            .map_err(|e| RenderError::Xml(e.to_string()))
    }

    fn element<'a>(name: &'a str, attributes: &[(&'a str, &'a str)]) -> BytesStart<'a> {
        let mut element = BytesStart::new(name);
        for attribute in attributes {
            element.push_attribute(*attribute);
        }
        element
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), RenderError> {
        self.event(Event::Start(Self::element(name, attributes)))
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), RenderError> {
        self.event(Event::Empty(Self::element(name, attributes)))
    }

    fn end(&mut self, name: &str) -> Result<(), RenderError> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.event(Event::Text(BytesText::new(text)))
    }

    fn cell(
        &mut self,
        class: &str,
        frame: &CellFrame,
        text: &str,
        padding: u32,
        leading: bool,
    ) -> Result<(), RenderError> {
        let rect_class = format!("cell {}", class);
        let x = frame.left.to_string();
        let y = frame.top.to_string();
        let width = frame.width.to_string();
        let height = frame.height.to_string();
        self.empty(
            "rect",
            &[
                ("class", rect_class.as_str()),
                ("x", x.as_str()),
                ("y", y.as_str()),
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("fill", "none"),
                ("stroke", "#999999"),
            ],
        )?;

        if text.is_empty() {
            return Ok(());
        }

        // Row labels hug the left edge, everything else is centred.
        let (text_x, anchor) = if leading {
            (frame.left + padding, "start")
        } else {
            (frame.left + frame.width / 2, "middle")
        };
        let text_x = text_x.to_string();
        let text_y = (frame.top + frame.height / 2).to_string();
        self.start(
            "text",
            &[
                ("class", class),
                ("x", text_x.as_str()),
                ("y", text_y.as_str()),
                ("text-anchor", anchor),
                ("dominant-baseline", "middle"),
            ],
        )?;
        self.text(text)?;
        self.end("text")
    }

    fn finish(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EntityRecord;
    use crate::table::build;

    fn render(table: &Table<&str>, style: Option<&str>) -> String {
        let bytes = SvgRenderer::default().render(table, style).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    fn heroes() -> Table<&'static str> {
        build(
            &[
                EntityRecord::new("Batman", ["rich", "fly"]),
                EntityRecord::new("Superman", ["fly", "strong"]),
            ],
            "yes",
            "no",
        )
    }

    #[test]
    fn test_column_widths() {
        let layout = SvgLayout::default();
        let grid = heroes().to_grid();
        // "Superman" is 8 wide, "strong" 6, "fly"/"yes" 3, "rich" 4.
        assert_eq!(layout.column_widths(&grid), vec![84, 44, 52, 68]);
    }

    #[test]
    fn test_column_widths_count_wide_chars() {
        let layout = SvgLayout::default();
        let grid = vec![vec!["日本".to_string()]];
        assert_eq!(layout.column_widths(&grid), vec![4 * 8 + 20]);
    }

    #[test]
    fn test_render_document_shape() {
        let svg = render(&heroes(), None);
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("width=\"248\""));
        assert!(svg.contains("height=\"84\""));
        assert!(svg.contains("viewBox=\"0 0 248 84\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_one_group_per_row() {
        let svg = render(&heroes(), None);
        assert_eq!(svg.matches("<g class=\"row header\">").count(), 1);
        assert_eq!(svg.matches("<g class=\"row\">").count(), 2);
        assert_eq!(svg.matches("<rect ").count(), 12);
    }

    #[test]
    fn test_render_cell_classes() {
        let svg = render(&heroes(), None);
        assert_eq!(svg.matches("class=\"cell corner\"").count(), 1);
        assert_eq!(svg.matches("class=\"cell feature\"").count(), 3);
        assert_eq!(svg.matches("class=\"cell name\"").count(), 2);
        assert_eq!(svg.matches("class=\"cell has\"").count(), 4);
        assert_eq!(svg.matches("class=\"cell has-not\"").count(), 2);
    }

    #[test]
    fn test_render_skips_empty_corner_text() {
        let svg = render(&heroes(), None);
        assert_eq!(svg.matches("<text ").count(), 11);
    }

    #[test]
    fn test_render_without_style_has_no_style_element() {
        assert!(!render(&heroes(), None).contains("<style"));
    }

    #[test]
    fn test_render_embeds_style() {
        let svg = render(&heroes(), Some(".has { fill: green; }"));
        assert!(svg.contains("<style>.has { fill: green; }</style>"));
    }

    #[test]
    fn test_render_escapes_text() {
        let table = build(&[EntityRecord::new("A & <B>", ["x\"y"])], "yes", "no");
        let svg = render(&table, Some("g > rect { stroke: red; }"));
        assert!(svg.contains("A &amp; &lt;B&gt;"));
        assert!(!svg.contains("A & <B>"));
        assert!(svg.contains("g &gt; rect"));
    }

    #[test]
    fn test_render_empty_table() {
        let table = build::<&str>(&[], "yes", "no");
        let svg = render(&table, None);
        assert!(svg.contains("viewBox=\"0 0 20 28\""));
        assert_eq!(svg.matches("<rect ").count(), 1);
        assert_eq!(svg.matches("<text ").count(), 0);
    }

    #[test]
    fn test_render_is_deterministic() {
        let table = heroes();
        assert_eq!(render(&table, Some("x")), render(&table, Some("x")));
    }

    #[test]
    fn test_custom_layout() {
        let layout = SvgLayout {
            row_height: 40,
            ..SvgLayout::default()
        };
        let bytes = SvgRenderer::new(layout).render(&heroes(), None).unwrap();
        let svg = String::from_utf8(bytes).unwrap();
        assert!(svg.contains("height=\"120\""));
    }
}
