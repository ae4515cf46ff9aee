//! The display seam between controllers and whatever renders the dashboard.
//!
//! Controllers only ever write through this trait, so the same controller
//! code drives the Leptos page and the in-memory surface used in tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::controllers::metrics::MetricSlot;
use crate::rows::DisplayRow;

pub trait DashboardSurface {
    /// Clear the table body and show `rows` in the given order.
    fn replace_rows(&self, rows: Vec<DisplayRow>);

    /// Insert `row` at position 0.
    fn prepend_row(&self, row: DisplayRow);

    /// Message shown above the table, `None` to hide it.
    fn set_table_status(&self, status: Option<String>);

    fn set_result_text(&self, text: String);

    fn set_warnings_text(&self, text: String);

    /// Write a metric slot. Returns `false` when this surface has no such slot.
    fn set_metric(&self, slot: MetricSlot, text: String) -> bool;
}

impl<S: DashboardSurface + ?Sized> DashboardSurface for Rc<S> {
    fn replace_rows(&self, rows: Vec<DisplayRow>) {
        (**self).replace_rows(rows)
    }
    fn prepend_row(&self, row: DisplayRow) {
        (**self).prepend_row(row)
    }
    fn set_table_status(&self, status: Option<String>) {
        (**self).set_table_status(status)
    }
    fn set_result_text(&self, text: String) {
        (**self).set_result_text(text)
    }
    fn set_warnings_text(&self, text: String) {
        (**self).set_warnings_text(text)
    }
    fn set_metric(&self, slot: MetricSlot, text: String) -> bool {
        (**self).set_metric(slot, text)
    }
}

/// Surface backed by plain memory. Useful headless and in tests.
#[derive(Debug, Default)]
pub struct MemorySurface {
    rows: RefCell<Vec<DisplayRow>>,
    table_status: RefCell<Option<String>>,
    result_text: RefCell<String>,
    warnings_text: RefCell<String>,
    metrics: RefCell<HashMap<MetricSlot, String>>,
    /// `None` means every slot exists.
    slots: Option<HashSet<MetricSlot>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface that only has the given metric slots.
    pub fn with_slots(slots: &[MetricSlot]) -> Self {
        Self {
            slots: Some(slots.iter().copied().collect()),
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<DisplayRow> {
        self.rows.borrow().clone()
    }

    pub fn table_status(&self) -> Option<String> {
        self.table_status.borrow().clone()
    }

    pub fn result_text(&self) -> String {
        self.result_text.borrow().clone()
    }

    pub fn warnings_text(&self) -> String {
        self.warnings_text.borrow().clone()
    }

    pub fn metric(&self, slot: MetricSlot) -> Option<String> {
        self.metrics.borrow().get(&slot).cloned()
    }
}

impl DashboardSurface for MemorySurface {
    fn replace_rows(&self, rows: Vec<DisplayRow>) {
        *self.rows.borrow_mut() = rows;
    }

    fn prepend_row(&self, row: DisplayRow) {
        self.rows.borrow_mut().insert(0, row);
    }

    fn set_table_status(&self, status: Option<String>) {
        *self.table_status.borrow_mut() = status;
    }

    fn set_result_text(&self, text: String) {
        *self.result_text.borrow_mut() = text;
    }

    fn set_warnings_text(&self, text: String) {
        *self.warnings_text.borrow_mut() = text;
    }

    fn set_metric(&self, slot: MetricSlot, text: String) -> bool {
        if let Some(slots) = &self.slots {
            if !slots.contains(&slot) {
                return false;
            }
        }
        self.metrics.borrow_mut().insert(slot, text);
        true
    }
}
