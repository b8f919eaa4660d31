//! Wire-level payloads accepted by the report builders.
//!
//! Row fields are kept as loosely typed JSON values on purpose: upstream
//! computes the figures, and a missing, null, or oddly typed field must
//! degrade to an empty or placeholder cell instead of rejecting the request.

use serde::Deserialize;
use serde_json::Value;

use crate::criteria::ReportCriteria;

/// Envelope shared by all four report endpoints: `{criteria, data}`.
#[derive(Clone, Debug, Deserialize)]
pub struct ReportPayload<R> {
    #[serde(default)]
    pub criteria: ReportCriteria,
    #[serde(default)]
    pub data: Vec<R>,
}

impl<R> Default for ReportPayload<R> {
    fn default() -> Self {
        Self {
            criteria: ReportCriteria::default(),
            data: Vec::new(),
        }
    }
}

/// One row of the KPI report.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KpiRow {
    pub date: Option<Value>,
    pub store_name: Option<Value>,
    pub sales: Option<Value>,
    pub transaction: Option<Value>,
    pub upt: Option<Value>,
    pub ads: Option<Value>,
    pub aur: Option<Value>,
    pub comp_mo_m: Option<Value>,
    pub comp_yo_y: Option<Value>,
}

/// One row of the orders report.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrdersRow {
    pub date: Option<Value>,
    pub order_date: Option<Value>,
    pub store_name: Option<Value>,
    pub category: Option<Value>,
    pub menu: Option<Value>,
    pub menu_count: Option<Value>,
    pub menu_sales: Option<Value>,
    pub order_count: Option<Value>,
    pub order_sales: Option<Value>,
    pub order_type: Option<Value>,
}

/// One row of the time-of-day/weekday report.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeRow {
    pub date: Option<Value>,
    pub store_name: Option<Value>,
    pub hour_slot: Option<Value>,
    pub day_of_week: Option<Value>,
    pub order_id: Option<Value>,
    pub order_amount: Option<Value>,
    pub category: Option<Value>,
    pub menu: Option<Value>,
    pub order_type: Option<Value>,
    pub order_date: Option<Value>,
}

/// One row of the material/inventory report.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaterialsRow {
    pub order_date: Option<Value>,
    pub store: Option<Value>,
    pub material: Option<Value>,
    pub store_inventory_qty: Option<Value>,
    pub purchase_order_id: Option<Value>,
    pub purchase_order_date: Option<Value>,
    pub purchase_order_qty: Option<Value>,
    pub purchase_order_amount: Option<Value>,
    pub turnover_rate: Option<Value>,
    pub profit: Option<Value>,
    pub margin: Option<Value>,
    pub avg_usage: Option<Value>,
}
