use leptos::prelude::*;
use riskboard_core::controllers::submit::{
    DEFAULT_APPROVER, DEFAULT_CURRENCY, DEFAULT_DEPARTMENT, DEFAULT_JOB_TITLE, DEFAULT_REQUESTER,
    DEFAULT_STATUS, DEFAULT_TRAVELLER,
};
use riskboard_core::format::{date_or, today_local};
use riskboard_core::FormValues;

/// Labeled text input bound to a signal.
#[component]
fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                type=input_type
                class="input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// What-if scoring form. Blank fields fall back to the service defaults
/// shown as placeholders.
#[component]
pub fn ScoreForm(
    categories: Vec<String>,
    result_text: RwSignal<String>,
    warnings_text: RwSignal<String>,
    on_submit: Callback<FormValues>,
) -> impl IntoView {
    let requester = RwSignal::new(String::new());
    let traveller = RwSignal::new(String::new());
    let approver = RwSignal::new(String::new());
    let request_date = RwSignal::new(String::new());
    let travel_date = RwSignal::new(String::new());
    let category = RwSignal::new(categories.first().cloned().unwrap_or_default());
    let description = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let currency = RwSignal::new(String::new());
    let job_title = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    // Fill blank dates with today on first load
    Effect::new(move |_| {
        let today = today_local();
        request_date.set(date_or(&request_date.get_untracked(), &today));
        travel_date.set(date_or(&travel_date.get_untracked(), &today));
    });

    let submit = move |_| {
        on_submit.run(FormValues {
            requester: requester.get(),
            traveller: traveller.get(),
            approver: approver.get(),
            request_date: request_date.get(),
            travel_date: travel_date.get(),
            category: category.get(),
            description: description.get(),
            amount: amount.get(),
            currency: currency.get(),
            job_title: job_title.get(),
            department: department.get(),
            status: status.get(),
        });
    };

    view! {
        <section class="score-form">
            <h3>"What-if Score"</h3>
            <div class="card-grid">
                <FormField id="in_requester" label="Requester" value=requester placeholder=DEFAULT_REQUESTER />
                <FormField id="in_traveller" label="Traveller" value=traveller placeholder=DEFAULT_TRAVELLER />
                <FormField id="in_approver" label="Approver" value=approver placeholder=DEFAULT_APPROVER />
                <FormField id="in_reqdate" label="Request date" value=request_date input_type="date" />
                <FormField id="in_traveldate" label="Travel date" value=travel_date input_type="date" />
                <div class="form-group">
                    <label for="in_category">"Category"</label>
                    <select
                        id="in_category"
                        class="input"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        {categories
                            .into_iter()
                            .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <FormField id="in_description" label="Description" value=description />
                <FormField id="in_amount" label="Amount" value=amount placeholder="0.00" input_type="number" />
                <FormField id="in_currency" label="Currency" value=currency placeholder=DEFAULT_CURRENCY />
                <FormField id="in_jobtitle" label="Job title" value=job_title placeholder=DEFAULT_JOB_TITLE />
                <FormField id="in_department" label="Department" value=department placeholder=DEFAULT_DEPARTMENT />
                <FormField id="in_status" label="Approval status" value=status placeholder=DEFAULT_STATUS />
            </div>

            <button id="calc-btn" class="btn btn-primary" on:click=submit>
                "Calculate Score"
            </button>

            <p id="calc-result" class="status-text">{move || result_text.get()}</p>
            <p id="calc-flags" class="status-text status-warning">{move || warnings_text.get()}</p>
        </section>
    }
}
