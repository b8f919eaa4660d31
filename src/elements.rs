//! Custom element implementations built on top of `genpdf` primitives.
//!
//! This module adds the two building blocks the report documents need that the
//! upstream crate does not ship with: a fixed-height spacer and a data table
//! that repeats its header row on every page.

use genpdf::elements::Paragraph;
use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{render, Alignment, Element, Margins, Mm, Position, RenderResult, Size};

use crate::layout::ColumnLayout;

const CELL_PADDING_MM: f64 = 1.0;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// Vertical whitespace with a fixed height in millimetres.
pub struct Spacer {
    height: Mm,
}

impl Spacer {
    /// Creates a spacer of the given height.
    pub fn new(height_mm: f64) -> Self {
        Self {
            height: mm_from_f64(height_mm),
        }
    }
}

impl Element for Spacer {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };
        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

/// A cell grid whose header row is reproduced at the top of every page.
///
/// The element tracks how many body rows have been rendered so far; when a
/// row does not fully fit the remaining page area it reports `has_more` and
/// keeps the row's cell paragraphs, so the next page resumes with the lines
/// that have not been drawn yet instead of repeating the whole row.  Cells
/// are single paragraphs aligned per the column layout; the header row is
/// bold and centered.
pub struct TableWithHeader {
    layout: ColumnLayout,
    rows: Vec<Vec<String>>,
    row_cursor: usize,
    in_flight: Option<Vec<Paragraph>>,
}

impl TableWithHeader {
    /// Creates a table from a column layout and pre-formatted body rows.
    ///
    /// Every row must have exactly as many cells as the layout has columns.
    /// An empty row-set is replaced by a single blank row so the rendered
    /// table always has a header and at least one body row.
    pub fn new(layout: ColumnLayout, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == layout.columns()));
        let rows = if rows.is_empty() {
            vec![layout.blank_row()]
        } else {
            rows
        };
        Self {
            layout,
            rows,
            row_cursor: 0,
            in_flight: None,
        }
    }

    /// Number of body rows, after blank-row synthesis.
    pub fn body_row_count(&self) -> usize {
        self.rows.len()
    }

    /// Builds one paragraph per cell, aligned per the column layout (or
    /// centered for the header row).
    fn cell_paragraphs(&self, cells: &[String], centered: bool) -> Vec<Paragraph> {
        cells
            .iter()
            .zip(self.layout.alignments())
            .map(|(text, alignment)| {
                let mut paragraph = Paragraph::new(text.as_str());
                paragraph.set_alignment(if centered { Alignment::Center } else { *alignment });
                paragraph
            })
            .collect()
    }

    /// Renders one row into the top of `area`, draws its grid frame, and
    /// advances the area past it.  Returns the row height and whether any
    /// cell ran out of vertical space.  A cell paragraph that overflows
    /// retains its undrawn words, so rendering the same paragraphs again
    /// continues the row.  When nothing fits at all, the area is left
    /// untouched so the row starts cleanly on the next page.
    fn render_row(
        &self,
        context: &genpdf::Context,
        area: &mut render::Area<'_>,
        cells: &mut [Paragraph],
        style: Style,
    ) -> Result<(Mm, bool), Error> {
        let cell_areas = area.split_horizontally(self.layout.widths());
        let mut text_height = Mm::default();
        let mut overflow = false;

        for (paragraph, cell_area) in cells.iter_mut().zip(cell_areas) {
            let mut cell_area = cell_area;
            cell_area.add_margins(Margins::trbl(
                CELL_PADDING_MM,
                CELL_PADDING_MM,
                CELL_PADDING_MM,
                CELL_PADDING_MM,
            ));
            let cell_result = paragraph.render(context, cell_area, style)?;
            text_height = text_height.max(cell_result.size.height);
            overflow |= cell_result.has_more;
        }

        if overflow && text_height == Mm::default() {
            return Ok((Mm::default(), true));
        }

        let row_height = text_height + mm_from_f64(2.0 * CELL_PADDING_MM);
        self.draw_row_frame(area, row_height);
        area.add_offset(Position::new(0, row_height));
        Ok((row_height, overflow))
    }

    /// Draws the horizontal and vertical grid lines delimiting one row.
    fn draw_row_frame(&self, area: &mut render::Area<'_>, height: Mm) {
        let line_style = Style::new();
        let width = area.size().width;
        let total_weight: usize = self.layout.widths().iter().sum();

        area.draw_line(
            vec![Position::new(0, 0), Position::new(width, 0)],
            line_style,
        );
        area.draw_line(
            vec![Position::new(0, height), Position::new(width, height)],
            line_style,
        );

        area.draw_line(
            vec![Position::new(0, 0), Position::new(0, height)],
            line_style,
        );
        let mut cumulative = 0usize;
        for column_weight in self.layout.widths() {
            cumulative += column_weight;
            let x = width * (cumulative as f64 / total_weight as f64);
            area.draw_line(
                vec![Position::new(x, 0), Position::new(x, height)],
                line_style,
            );
        }
    }
}

impl Element for TableWithHeader {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        let width = area.size().width;
        let mut consumed = Mm::default();

        let header_labels: Vec<String> = self
            .layout
            .headers()
            .iter()
            .map(|label| (*label).to_string())
            .collect();
        let mut header = self.cell_paragraphs(&header_labels, true);
        let mut header_style = style;
        header_style.set_bold();
        let (header_height, header_overflow) =
            self.render_row(context, &mut area, &mut header, header_style)?;
        consumed += header_height;
        if header_overflow {
            result.size = Size::new(width, consumed);
            result.has_more = true;
            return Ok(result);
        }

        while self.row_cursor < self.rows.len() {
            let mut cells = match self.in_flight.take() {
                Some(cells) => cells,
                None => self.cell_paragraphs(&self.rows[self.row_cursor], false),
            };
            let (row_height, overflow) =
                self.render_row(context, &mut area, &mut cells, style)?;
            consumed += row_height;
            if overflow {
                self.in_flight = Some(cells);
                result.size = Size::new(width, consumed);
                result.has_more = true;
                return Ok(result);
            }
            self.row_cursor += 1;
        }

        result.size = Size::new(width, consumed);
        Ok(result)
    }
}
