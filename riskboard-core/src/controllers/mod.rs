pub mod metrics;
pub mod submit;
pub mod table;

pub use metrics::{MetricSlot, MetricsPoller};
pub use submit::{FormValues, IdGenerator, OptimisticSubmitController};
pub use table::{DataTableController, RefreshOutcome};
