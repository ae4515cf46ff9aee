use leptos::prelude::*;

use crate::components::risk_badge::RiskCell;
use crate::surface::SignalSurface;

#[component]
pub fn ExpenseTable(
    surface: SignalSurface,
    /// Selected category filter; empty means all categories.
    category: RwSignal<String>,
    categories: Vec<String>,
    /// Invoked with the current filter when the user asks for fresh data.
    on_refresh: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="expense-table">
            <div class="input-row table-toolbar">
                <label for="category">"Category"</label>
                <select
                    id="category"
                    class="input"
                    prop:value=move || category.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        category.set(value.clone());
                        on_refresh.run(value);
                    }
                >
                    <option value="">"All"</option>
                    {categories
                        .into_iter()
                        .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button
                    id="refresh"
                    class="btn btn-primary"
                    on:click=move |_| on_refresh.run(category.get())
                >
                    "Refresh"
                </button>
            </div>

            {move || {
                surface.table_status.get().map(|status| {
                    view! { <p class="status-text status-error">{status}</p> }
                })
            }}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Expense"</th>
                        <th>"Category"</th>
                        <th>"Amount"</th>
                        <th>"Department"</th>
                        <th>"Date"</th>
                        <th>"Score"</th>
                        <th>"Risk"</th>
                        <th>"Model"</th>
                    </tr>
                </thead>
                <tbody id="rows">
                    {move || {
                        surface
                            .rows
                            .get()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.expense_id}</td>
                                        <td>{row.category}</td>
                                        <td>{row.amount}</td>
                                        <td>{row.department}</td>
                                        <td>{row.date}</td>
                                        <td>{row.score}</td>
                                        <RiskCell risk=row.risk label=row.risk_label />
                                        <td>{row.model}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </section>
    }
}
