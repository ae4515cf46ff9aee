use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::{normalize_filter, ScoringApi};
use crate::error::DashboardError;
use crate::rows::render_rows;
use crate::surface::DashboardSurface;

/// What a refresh did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The table now shows this many rows.
    Rendered(usize),
    /// A newer refresh was issued while this one was in flight; its response
    /// was dropped.
    Superseded,
}

/// Loads `/dashboard/data` and replaces the table body.
///
/// Only the most recently issued refresh may touch the table. A failed
/// refresh keeps the current rows and shows a status message instead.
#[derive(Clone)]
pub struct DataTableController<A, S> {
    api: A,
    surface: S,
    currency_label: String,
    generation: Arc<AtomicU64>,
}

impl<A: ScoringApi, S: DashboardSurface> DataTableController<A, S> {
    pub fn new(api: A, surface: S, currency_label: impl Into<String>) -> Self {
        Self {
            api,
            surface,
            currency_label: currency_label.into(),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn refresh(
        &self,
        category_filter: Option<&str>,
    ) -> Result<RefreshOutcome, DashboardError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let filter = normalize_filter(category_filter);

        let result = self.api.fetch_items(filter).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(
                "Dropping stale dashboard data (request {}, filter {:?})",
                ticket, filter
            );
            return Ok(RefreshOutcome::Superseded);
        }

        match result {
            Ok(records) => {
                let rows = render_rows(&records, &self.currency_label);
                let count = rows.len();
                self.surface.replace_rows(rows);
                self.surface.set_table_status(None);
                info!("Rendered {} dashboard rows (filter {:?})", count, filter);
                Ok(RefreshOutcome::Rendered(count))
            }
            Err(e) => {
                warn!("Failed to load dashboard data: {}", e);
                self.surface
                    .set_table_status(Some(format!("Failed to load data: {}", e)));
                Err(e)
            }
        }
    }
}
