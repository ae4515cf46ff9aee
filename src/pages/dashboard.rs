use leptos::prelude::*;
use riskboard_core::{
    DataTableController, FormValues, HttpApi, IdGenerator, MetricsPoller,
    OptimisticSubmitController, SubmitMode,
};
use wasm_bindgen_futures::spawn_local;

use crate::components::expense_table::ExpenseTable;
use crate::components::metrics_panel::MetricsPanel;
use crate::components::score_form::ScoreForm;
use crate::config::{self, ConfigContext};
use crate::surface::SignalSurface;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<ConfigContext>();
    let config = ctx.config.get_untracked();

    let api = match HttpApi::new(&config) {
        Ok(api) => api,
        Err(e) => {
            return view! {
                <div class="page dashboard-page">
                    <h2>"Expense Risk Dashboard"</h2>
                    <p class="status-text status-error">{e.to_string()}</p>
                    <a href="/settings" class="btn btn-primary">"Open Settings"</a>
                </div>
            }
            .into_any();
        }
    };

    let surface = SignalSurface::new();
    let category = RwSignal::new(String::new());

    let table = DataTableController::new(api.clone(), surface, config.currency_label.clone());
    let submitter = OptimisticSubmitController::new(
        api.clone(),
        surface,
        IdGenerator::seeded(config::id_seed()),
        config.currency_label.clone(),
        config.submit_mode,
    );
    let metrics = MetricsPoller::new(api, surface);

    // Initial table and metrics load
    let table_on_load = table.clone();
    Effect::new(move |_| {
        let table = table_on_load.clone();
        let metrics = metrics.clone();
        spawn_local(async move {
            let _ = table.refresh(None).await;
        });
        spawn_local(async move {
            metrics.load_metrics().await;
        });
    });

    let refresh_table = table.clone();
    let on_refresh = Callback::new(move |filter: String| {
        let table = refresh_table.clone();
        spawn_local(async move {
            // Failures are already shown in the table status
            let _ = table.refresh(Some(&filter)).await;
        });
    });

    let on_submit = Callback::new(move |form: FormValues| {
        let submitter = submitter.clone();
        let table = table.clone();
        spawn_local(async move {
            let scored = submitter.submit(&form).await.is_ok();
            if scored && submitter.mode() == SubmitMode::Refetch {
                let filter = category.get_untracked();
                let _ = table.refresh(Some(&filter)).await;
            }
        });
    });

    view! {
        <div class="page dashboard-page">
            <h2>"Expense Risk Dashboard"</h2>
            <p class="page-description">
                "Scored expenses from the risk service, newest what-if results first."
            </p>

            <MetricsPanel metrics=surface.metrics />

            <ScoreForm
                categories=config.categories.clone()
                result_text=surface.result_text
                warnings_text=surface.warnings_text
                on_submit=on_submit
            />

            <ExpenseTable
                surface=surface
                category=category
                categories=config.categories
                on_refresh=on_refresh
            />
        </div>
    }
    .into_any()
}
