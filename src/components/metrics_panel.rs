use std::collections::HashMap;

use leptos::prelude::*;
use riskboard_core::format::PLACEHOLDER;
use riskboard_core::MetricSlot;

#[component]
pub fn MetricsPanel(metrics: RwSignal<HashMap<MetricSlot, String>>) -> impl IntoView {
    view! {
        <section class="metrics-panel">
            <h3>"Model Metrics"</h3>
            <div class="card-grid">
                {MetricSlot::ALL
                    .into_iter()
                    .map(|slot| {
                        view! {
                            <div class="card metric-card">
                                <span class="metric-label">{slot.label()}</span>
                                <span class="metric-value" id=slot.element_id()>
                                    {move || {
                                        metrics
                                            .get()
                                            .get(&slot)
                                            .cloned()
                                            .unwrap_or_else(|| PLACEHOLDER.to_string())
                                    }}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
