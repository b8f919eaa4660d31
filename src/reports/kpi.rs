//! KPI report: a single fixed layout with raw pass-through cells.
//!
//! The simplest of the four builders: no view-mode switch, no numeric
//! formatting, and no metadata line.

use genpdf::error::Error;
use genpdf::Alignment;

use crate::document::TableReport;
use crate::format::raw_text;
use crate::layout::ColumnLayout;
use crate::model::{KpiRow, ReportPayload};

const DEFAULT_TITLE: &str = "KPI 리포트";

const LAYOUT: ColumnLayout = ColumnLayout::new(
    &[
        "Date",
        "Store",
        "Sales",
        "Transaction",
        "UPT",
        "ADS",
        "AUR",
        "Comp.MoM",
        "Comp.YoY",
    ],
    &[26, 40, 28, 24, 18, 24, 24, 24, 24],
    &[
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
    ],
);

pub(crate) fn column_layout() -> ColumnLayout {
    LAYOUT
}

fn map_row(row: &KpiRow) -> Vec<String> {
    vec![
        raw_text(row.date.as_ref()),
        raw_text(row.store_name.as_ref()),
        raw_text(row.sales.as_ref()),
        raw_text(row.transaction.as_ref()),
        raw_text(row.upt.as_ref()),
        raw_text(row.ads.as_ref()),
        raw_text(row.aur.as_ref()),
        raw_text(row.comp_mo_m.as_ref()),
        raw_text(row.comp_yo_y.as_ref()),
    ]
}

/// Renders the KPI report to PDF bytes.
pub fn generate(payload: &ReportPayload<KpiRow>) -> Result<Vec<u8>, Error> {
    let criteria = &payload.criteria;
    let body = payload.data.iter().map(map_row).collect();

    TableReport::new(criteria.title_or(DEFAULT_TITLE), column_layout())
        .with_body(body)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn values_pass_through_unformatted() {
        let row: KpiRow = serde_json::from_value(json!({
            "date": "2024-01-01",
            "storeName": "Gangnam",
            "sales": 1234567.5,
            "transaction": 420,
            "upt": 1.8,
            "compMoM": -0.03
        }))
        .expect("row parses");
        assert_eq!(
            map_row(&row),
            vec![
                "2024-01-01",
                "Gangnam",
                "1234567.5",
                "420",
                "1.8",
                "",
                "",
                "-0.03",
                ""
            ]
        );
    }

    #[test]
    fn row_width_matches_layout() {
        assert_eq!(map_row(&KpiRow::default()).len(), column_layout().columns());
        assert_eq!(
            map_row(&KpiRow::default()),
            vec![""; column_layout().columns()]
        );
    }
}
