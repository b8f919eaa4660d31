//! Material/inventory report: stock levels, purchase orders, and margin
//! metrics per material, with the purchase-order columns collapsed in
//! monthly view.

use genpdf::error::Error;
use genpdf::Alignment;

use crate::document::TableReport;
use crate::format::{format_number, format_percent, placeholder, raw_text};
use crate::layout::ColumnLayout;
use crate::model::{MaterialsRow, ReportPayload};

const DEFAULT_TITLE: &str = "재료 분석 리포트";

// The 12-column daily view is dense, so this report drops to 8 pt body text.
const BODY_FONT_SIZE: u8 = 8;

const DAILY: ColumnLayout = ColumnLayout::new(
    &[
        "Date", "Store", "Material", "Inv Qty", "PO ID", "PO Date", "PO Qty", "PO Amount",
        "Turnover", "Profit", "Margin", "Avg Usage",
    ],
    &[20, 30, 35, 15, 15, 20, 15, 20, 18, 20, 18, 18],
    &[
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
    ],
);

const MONTHLY: ColumnLayout = ColumnLayout::new(
    &[
        "Date", "Store", "Material", "Inv Qty", "PO Qty", "PO Amount", "Turnover", "Profit",
        "Margin", "Avg Usage",
    ],
    &[22, 35, 40, 18, 18, 22, 20, 22, 20, 20],
    &[
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
    ],
);

pub(crate) fn column_layout(daily: bool) -> ColumnLayout {
    if daily {
        DAILY
    } else {
        MONTHLY
    }
}

fn map_row(row: &MaterialsRow, daily: bool) -> Vec<String> {
    if daily {
        vec![
            raw_text(row.order_date.as_ref()),
            raw_text(row.store.as_ref()),
            raw_text(row.material.as_ref()),
            format_number(row.store_inventory_qty.as_ref(), 0),
            placeholder(row.purchase_order_id.as_ref()),
            placeholder(row.purchase_order_date.as_ref()),
            format_number(row.purchase_order_qty.as_ref(), 0),
            format_number(row.purchase_order_amount.as_ref(), 0),
            format_number(row.turnover_rate.as_ref(), 2),
            format_number(row.profit.as_ref(), 0),
            format_percent(row.margin.as_ref(), 2),
            format_number(row.avg_usage.as_ref(), 2),
        ]
    } else {
        vec![
            raw_text(row.order_date.as_ref()),
            raw_text(row.store.as_ref()),
            raw_text(row.material.as_ref()),
            format_number(row.store_inventory_qty.as_ref(), 0),
            format_number(row.purchase_order_qty.as_ref(), 0),
            format_number(row.purchase_order_amount.as_ref(), 0),
            format_number(row.turnover_rate.as_ref(), 2),
            format_number(row.profit.as_ref(), 0),
            format_percent(row.margin.as_ref(), 2),
            format_number(row.avg_usage.as_ref(), 2),
        ]
    }
}

/// Renders the material/inventory report to PDF bytes.
pub fn generate(payload: &ReportPayload<MaterialsRow>) -> Result<Vec<u8>, Error> {
    let criteria = &payload.criteria;
    let daily = criteria.is_daily();
    let body = payload
        .data
        .iter()
        .map(|row| map_row(row, daily))
        .collect();

    TableReport::new(criteria.title_or(DEFAULT_TITLE), column_layout(daily))
        .with_meta(criteria.period_line())
        .with_font_size(BODY_FONT_SIZE)
        .with_body(body)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_row() -> MaterialsRow {
        serde_json::from_value(json!({
            "orderDate": "2024-01",
            "store": "A",
            "material": "Milk",
            "storeInventoryQty": 120,
            "purchaseOrderQty": 300,
            "purchaseOrderAmount": 450000,
            "turnoverRate": 2.5,
            "profit": 100000,
            "margin": 0.18,
            "avgUsage": 12.345
        }))
        .expect("row parses")
    }

    #[test]
    fn monthly_row_mapping() {
        assert_eq!(
            map_row(&sample_row(), false),
            vec![
                "2024-01", "A", "Milk", "120", "300", "450,000", "2.50", "100,000", "18.00%",
                "12.35"
            ]
        );
    }

    #[test]
    fn daily_row_mapping_includes_purchase_order_placeholders() {
        let cells = map_row(&sample_row(), true);
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[4], "-");
        assert_eq!(cells[5], "-");
        assert_eq!(cells[6], "300");
        assert_eq!(cells[10], "18.00%");
    }

    #[test]
    fn purchase_order_id_passes_through_without_grouping() {
        let row: MaterialsRow =
            serde_json::from_value(json!({"purchaseOrderId": 100234})).expect("row parses");
        assert_eq!(map_row(&row, true)[4], "100234");
    }

    #[test]
    fn empty_row_degrades_cell_by_cell() {
        let cells = map_row(&MaterialsRow::default(), false);
        assert_eq!(
            cells,
            vec!["", "", "", "", "", "", "", "", "", ""]
        );
    }
}
