//! Declarative column layouts.
//!
//! Each report kind owns two fixed layouts (daily and monthly; KPI has a
//! single one).  A layout bundles the header labels, the column widths in
//! millimetres, and the per-column body alignment so that the header row and
//! every data row are derived from the same descriptor.

use genpdf::Alignment;

/// Column layout for one report kind in one view mode.
#[derive(Clone, Copy, Debug)]
pub struct ColumnLayout {
    headers: &'static [&'static str],
    widths: &'static [usize],
    alignments: &'static [Alignment],
}

impl ColumnLayout {
    /// Creates a layout descriptor.
    ///
    /// Panics at construction when the three slices disagree on the column
    /// count; all layouts are `const` values, so a mismatch fails at compile
    /// time.
    pub const fn new(
        headers: &'static [&'static str],
        widths: &'static [usize],
        alignments: &'static [Alignment],
    ) -> Self {
        assert!(headers.len() == widths.len());
        assert!(headers.len() == alignments.len());
        Self {
            headers,
            widths,
            alignments,
        }
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.headers.len()
    }

    /// Header labels, in column order.
    pub fn headers(&self) -> &'static [&'static str] {
        self.headers
    }

    /// Column widths in millimetres, used as table column weights.
    pub fn widths(&self) -> &'static [usize] {
        self.widths
    }

    /// Per-column body alignment.
    pub fn alignments(&self) -> &'static [Alignment] {
        self.alignments
    }

    /// A row of empty strings matching the column count.
    pub fn blank_row(&self) -> Vec<String> {
        vec![String::new(); self.columns()]
    }
}
