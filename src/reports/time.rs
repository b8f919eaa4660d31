//! Time-of-day/weekday report: individual orders with hour-slot and weekday
//! context in daily view, hour-slot aggregates in monthly view.

use genpdf::error::Error;
use genpdf::Alignment;

use crate::document::TableReport;
use crate::format::{format_number, placeholder, raw_text};
use crate::layout::ColumnLayout;
use crate::model::{ReportPayload, TimeRow};

const DEFAULT_TITLE: &str = "시간·요일 분석 리포트";

const DAILY: ColumnLayout = ColumnLayout::new(
    &[
        "Store",
        "시간대",
        "요일",
        "주문ID",
        "주문금액",
        "카테고리",
        "메뉴",
        "OrderType",
        "OrderDate",
    ],
    &[36, 26, 12, 18, 22, 24, 36, 18, 30],
    &[
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Right,
        Alignment::Right,
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
    ],
);

const MONTHLY: ColumnLayout = ColumnLayout::new(
    &["Date", "Store", "시간대", "요일", "주문금액", "OrderType"],
    &[22, 36, 22, 12, 22, 18],
    &[
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Left,
        Alignment::Right,
        Alignment::Left,
    ],
);

pub(crate) fn column_layout(daily: bool) -> ColumnLayout {
    if daily {
        DAILY
    } else {
        MONTHLY
    }
}

fn map_row(row: &TimeRow, daily: bool) -> Vec<String> {
    if daily {
        vec![
            raw_text(row.store_name.as_ref()),
            raw_text(row.hour_slot.as_ref()),
            raw_text(row.day_of_week.as_ref()),
            raw_text(row.order_id.as_ref()),
            format_number(row.order_amount.as_ref(), 0),
            placeholder(row.category.as_ref()),
            placeholder(row.menu.as_ref()),
            placeholder(row.order_type.as_ref()),
            raw_text(row.order_date.as_ref()),
        ]
    } else {
        vec![
            raw_text(row.date.as_ref()),
            raw_text(row.store_name.as_ref()),
            raw_text(row.hour_slot.as_ref()),
            raw_text(row.day_of_week.as_ref()),
            format_number(row.order_amount.as_ref(), 0),
            placeholder(row.order_type.as_ref()),
        ]
    }
}

/// Renders the time-of-day/weekday report to PDF bytes.
pub fn generate(payload: &ReportPayload<TimeRow>) -> Result<Vec<u8>, Error> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_row() -> TimeRow {
        serde_json::from_value(json!({
            "date": "2024-02",
            "storeName": "Hongdae",
            "hourSlot": "12:00-13:00",
            "dayOfWeek": "Fri",
            "orderId": 90210,
            "orderAmount": 15500,
            "category": "",
            "menu": "Americano",
            "orderType": "TAKEOUT",
            "orderDate": "2024-02-09"
        }))
        .expect("row parses")
    }

    #[test]
    fn daily_row_mapping() {
        assert_eq!(
            map_row(&sample_row(), true),
            vec![
                "Hongdae",
                "12:00-13:00",
                "Fri",
                "90210",
                "15,500",
                "-",
                "Americano",
                "TAKEOUT",
                "2024-02-09"
            ]
        );
    }

    #[test]
    fn monthly_row_mapping() {
        assert_eq!(
            map_row(&sample_row(), false),
            vec!["2024-02", "Hongdae", "12:00-13:00", "Fri", "15,500", "TAKEOUT"]
        );
    }

    #[test]
    fn missing_order_id_renders_empty_without_grouping() {
        let cells = map_row(&TimeRow::default(), true);
        assert_eq!(cells[3], "");
        assert_eq!(cells[4], "");
        assert_eq!(cells[5], "-");
    }

    #[test]
    fn row_width_matches_layout_in_both_modes() {
        for daily in [true, false] {
            assert_eq!(
                map_row(&sample_row(), daily).len(),
                column_layout(daily).columns()
            );
        }
    }
}
