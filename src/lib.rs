//! Paginated PDF reports for business-analytics tables.
//!
//! Four report builders (KPI, orders, time-of-day/weekday, materials) share
//! one formatting utility and one document-assembly path.  Each builder is a
//! pure function from a `{criteria, data}` payload to PDF bytes; the only
//! process-wide state is the read-only font registry in [`fonts`].

pub mod criteria;
pub mod document;
pub mod elements;
pub mod fonts;
pub mod format;
pub mod layout;
pub mod model;
pub mod reports;

pub use criteria::ReportCriteria;
pub use model::{KpiRow, MaterialsRow, OrdersRow, ReportPayload, TimeRow};
