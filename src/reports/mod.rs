//! The four report builders.
//!
//! Each builder is a pure function from a `{criteria, data}` payload to PDF
//! bytes: it resolves the view mode, picks the column layout for that mode,
//! maps every row to a formatted cell tuple, and hands the result to the
//! document assembly in [`crate::document`].  Malformed or missing row fields
//! never fail a build; they degrade to empty or placeholder cells.

pub mod kpi;
pub mod materials;
pub mod orders;
pub mod time;

#[cfg(test)]
mod tests {
    use crate::layout::ColumnLayout;

    fn assert_consistent(layout: &ColumnLayout) {
        assert_eq!(layout.headers().len(), layout.widths().len());
        assert_eq!(layout.headers().len(), layout.alignments().len());
        assert_eq!(layout.blank_row().len(), layout.columns());
    }

    #[test]
    fn all_layouts_are_internally_consistent() {
        for daily in [true, false] {
            assert_consistent(&super::orders::column_layout(daily));
            assert_consistent(&super::time::column_layout(daily));
            assert_consistent(&super::materials::column_layout(daily));
        }
        assert_consistent(&super::kpi::column_layout());
    }

    #[test]
    fn daily_and_monthly_column_counts() {
        assert_eq!(super::orders::column_layout(true).columns(), 10);
        assert_eq!(super::orders::column_layout(false).columns(), 6);
        assert_eq!(super::time::column_layout(true).columns(), 9);
        assert_eq!(super::time::column_layout(false).columns(), 6);
        assert_eq!(super::materials::column_layout(true).columns(), 12);
        assert_eq!(super::materials::column_layout(false).columns(), 10);
        assert_eq!(super::kpi::column_layout().columns(), 9);
    }
}
