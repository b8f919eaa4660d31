//! Orders report: per-order rows in daily view, per-store aggregates in
//! monthly view.

use genpdf::error::Error;
use genpdf::Alignment;

use crate::document::TableReport;
use crate::format::{format_number_or_percent, placeholder, raw_text};
use crate::layout::ColumnLayout;
use crate::model::{OrdersRow, ReportPayload};

const DEFAULT_TITLE: &str = "주문 분석 리포트";

const DAILY: ColumnLayout = ColumnLayout::new(
    &[
        "Date",
        "OrderDate",
        "Store",
        "Category",
        "Menu",
        "MenuCount",
        "MenuSales",
        "OrderCount",
        "OrderSales",
        "OrderType",
    ],
    &[22, 28, 36, 24, 42, 18, 24, 18, 24, 20],
    &[
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Left,
    ],
);

const MONTHLY: ColumnLayout = ColumnLayout::new(
    &[
        "Date",
        "Store",
        "MenuCount",
        "MenuSales",
        "OrderCount",
        "OrderSales",
    ],
    &[28, 42, 22, 28, 22, 28],
    &[
        Alignment::Left,
        Alignment::Left,
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

fn map_row(row: &OrdersRow, daily: bool) -> Vec<String> {
    if daily {
        vec![
            raw_text(row.date.as_ref()),
            raw_text(row.order_date.as_ref()),
            raw_text(row.store_name.as_ref()),
            placeholder(row.category.as_ref()),
            placeholder(row.menu.as_ref()),
            format_number_or_percent(row.menu_count.as_ref(), false),
            format_number_or_percent(row.menu_sales.as_ref(), false),
            format_number_or_percent(row.order_count.as_ref(), false),
            format_number_or_percent(row.order_sales.as_ref(), false),
            placeholder(row.order_type.as_ref()),
        ]
    } else {
        vec![
            raw_text(row.date.as_ref()),
            raw_text(row.store_name.as_ref()),
            format_number_or_percent(row.menu_count.as_ref(), false),
            format_number_or_percent(row.menu_sales.as_ref(), false),
            format_number_or_percent(row.order_count.as_ref(), false),
            format_number_or_percent(row.order_sales.as_ref(), false),
        ]
    }
}

/// Renders the orders report to PDF bytes.
pub fn generate(payload: &ReportPayload<OrdersRow>) -> Result<Vec<u8>, Error> {
    let criteria = &payload.criteria;
    let daily = criteria.is_daily();
    let body = payload
        .data
        .iter()
        .map(|row| map_row(row, daily))
        .collect();

    TableReport::new(criteria.title_or(DEFAULT_TITLE), column_layout(daily))
        .with_meta(criteria.period_line())
        .with_body(body)
        .render()
}
