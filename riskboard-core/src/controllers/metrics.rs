use tracing::debug;

use crate::api::ScoringApi;
use crate::format::{format_count, format_metric};
use crate::surface::DashboardSurface;
use crate::types::MetricsSnapshot;

/// The summary slots the dashboard shows, one per recognized metric key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricSlot {
    Size,
    TestAccuracy,
    TestF1,
    TestRocAuc,
    TestPrAuc,
}

impl MetricSlot {
    pub const ALL: [MetricSlot; 5] = [
        MetricSlot::Size,
        MetricSlot::TestAccuracy,
        MetricSlot::TestF1,
        MetricSlot::TestRocAuc,
        MetricSlot::TestPrAuc,
    ];

    /// Key in the metrics snapshot.
    pub fn key(self) -> &'static str {
        match self {
            MetricSlot::Size => "size",
            MetricSlot::TestAccuracy => "test_acc",
            MetricSlot::TestF1 => "test_f1",
            MetricSlot::TestRocAuc => "test_roc_auc",
            MetricSlot::TestPrAuc => "test_pr_auc",
        }
    }

    /// Element id of the slot on the page.
    pub fn element_id(self) -> &'static str {
        match self {
            MetricSlot::Size => "m-size",
            MetricSlot::TestAccuracy => "m-test-acc",
            MetricSlot::TestF1 => "m-test-f1",
            MetricSlot::TestRocAuc => "m-test-roc",
            MetricSlot::TestPrAuc => "m-test-pr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricSlot::Size => "Training size",
            MetricSlot::TestAccuracy => "Accuracy",
            MetricSlot::TestF1 => "F1",
            MetricSlot::TestRocAuc => "ROC AUC",
            MetricSlot::TestPrAuc => "PR AUC",
        }
    }

    /// Display text for this slot. Size is a count and is shown as received.
    pub fn render(self, snapshot: &MetricsSnapshot) -> String {
        let value = snapshot.get(self.key());
        match self {
            MetricSlot::Size => format_count(value),
            _ => format_metric(value),
        }
    }
}

/// Best-effort metrics display: failures leave the slots untouched.
#[derive(Clone)]
pub struct MetricsPoller<A, S> {
    api: A,
    surface: S,
}

impl<A: ScoringApi, S: DashboardSurface> MetricsPoller<A, S> {
    pub fn new(api: A, surface: S) -> Self {
        Self { api, surface }
    }

    pub async fn load_metrics(&self) {
        match self.api.fetch_metrics().await {
            Ok(snapshot) => {
                let written = self.apply(&snapshot);
                debug!("Updated {} metric slots", written);
            }
            Err(e) => {
                debug!("Metrics unavailable: {}", e);
            }
        }
    }

    /// Write every slot the surface has. Returns how many were written.
    pub fn apply(&self, snapshot: &MetricsSnapshot) -> usize {
        let mut written = 0;
        for slot in MetricSlot::ALL {
            if self.surface.set_metric(slot, slot.render(snapshot)) {
                written += 1;
            }
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> MetricsSnapshot {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_render_numeric_string() {
        let s = snapshot(json!({"test_acc": "0.8765"}));
        assert_eq!(MetricSlot::TestAccuracy.render(&s), "0.876");
    }

    #[test]
    fn test_render_missing_is_placeholder() {
        let s = snapshot(json!({}));
        for slot in MetricSlot::ALL {
            assert_eq!(slot.render(&s), "\u{2014}", "slot {:?}", slot);
        }
    }

    #[test]
    fn test_render_size_as_count() {
        let s = snapshot(json!({"size": "800"}));
        assert_eq!(MetricSlot::Size.render(&s), "800");
        let s = snapshot(json!({"size": 1200}));
        assert_eq!(MetricSlot::Size.render(&s), "1200");
    }

    #[test]
    fn test_element_ids_are_distinct() {
        let mut ids: Vec<&str> = MetricSlot::ALL.iter().map(|s| s.element_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), MetricSlot::ALL.len());
    }
}
