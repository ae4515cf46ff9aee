use std::collections::HashMap;

use leptos::prelude::*;
use riskboard_core::{DashboardSurface, DisplayRow, MetricSlot};

/// Dashboard state held in signals; the controllers write it, the
/// components render it.
#[derive(Clone, Copy)]
pub struct SignalSurface {
    pub rows: RwSignal<Vec<DisplayRow>>,
    pub table_status: RwSignal<Option<String>>,
    pub result_text: RwSignal<String>,
    pub warnings_text: RwSignal<String>,
    pub metrics: RwSignal<HashMap<MetricSlot, String>>,
}

impl SignalSurface {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(vec![]),
            table_status: RwSignal::new(None),
            result_text: RwSignal::new(String::new()),
            warnings_text: RwSignal::new(String::new()),
            metrics: RwSignal::new(HashMap::new()),
        }
    }
}

impl DashboardSurface for SignalSurface {
    fn replace_rows(&self, rows: Vec<DisplayRow>) {
        self.rows.set(rows);
    }

    fn prepend_row(&self, row: DisplayRow) {
        self.rows.update(|rows| rows.insert(0, row));
    }

    fn set_table_status(&self, status: Option<String>) {
        self.table_status.set(status);
    }

    fn set_result_text(&self, text: String) {
        self.result_text.set(text);
    }

    fn set_warnings_text(&self, text: String) {
        self.warnings_text.set(text);
    }

    /// Only slots that are mounted on the page get written.
    fn set_metric(&self, slot: MetricSlot, text: String) -> bool {
        let mounted = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(slot.element_id()))
            .is_some();
        if mounted {
            self.metrics.update(|m| {
                m.insert(slot, text);
            });
        }
        mounted
    }
}
