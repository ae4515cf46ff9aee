use leptos::prelude::*;
use riskboard_core::{DashboardConfig, SubmitMode};

use crate::config::{self, ConfigContext};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = expect_context::<ConfigContext>();
    let current = ctx.config.get_untracked();

    let (base_url, set_base_url) = signal(current.base_url.clone());
    let (api_key, set_api_key) = signal(current.api_key.clone().unwrap_or_default());
    let (submit_mode, set_submit_mode) = signal(current.submit_mode);
    let (save_status, set_save_status) = signal::<Option<Result<String, String>>>(None);

    let save = move |_| {
        let key = api_key.get();
        let updated = DashboardConfig {
            base_url: base_url.get().trim().to_string(),
            api_key: (!key.trim().is_empty()).then(|| key.trim().to_string()),
            submit_mode: submit_mode.get(),
            ..ctx.config.get_untracked()
        };
        match config::save_config(&updated) {
            Ok(()) => {
                ctx.config.set(updated);
                set_save_status.set(Some(Ok("Settings saved".to_string())));
            }
            Err(e) => {
                set_save_status.set(Some(Err(format!("Failed to save: {}", e))));
            }
        }
    };

    let reset = move |_| match config::clear_config() {
        Ok(()) => {
            let defaults = config::default_config();
            set_base_url.set(defaults.base_url.clone());
            set_api_key.set(String::new());
            set_submit_mode.set(defaults.submit_mode);
            ctx.config.set(defaults);
            set_save_status.set(Some(Ok("Settings reset to defaults".to_string())));
        }
        Err(e) => {
            set_save_status.set(Some(Err(format!("Failed to reset: {}", e))));
        }
    };

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="settings-section">
                <h3>"Scoring Service"</h3>
                <p class="section-description">"Settings are kept in this browser's local storage."</p>

                <div class="form-group">
                    <label for="base-url">"Service URL"</label>
                    <input
                        id="base-url"
                        type="text"
                        placeholder="http://localhost:8080"
                        class="input"
                        prop:value=move || base_url.get()
                        on:input=move |ev| set_base_url.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group api-key-form">
                    <label for="api-key">"API Key"</label>
                    <input
                        id="api-key"
                        type="password"
                        placeholder="Sent as X-API-Key when scoring"
                        class="input input-password"
                        prop:value=move || api_key.get()
                        on:input=move |ev| set_api_key.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="submit-mode">"After scoring"</label>
                    <select
                        id="submit-mode"
                        class="input"
                        on:change=move |ev| {
                            let mode = match event_target_value(&ev).as_str() {
                                "refetch" => SubmitMode::Refetch,
                                _ => SubmitMode::Optimistic,
                            };
                            set_submit_mode.set(mode);
                        }
                    >
                        <option
                            value="optimistic"
                            selected=move || submit_mode.get() == SubmitMode::Optimistic
                        >
                            "Add the scored row immediately"
                        </option>
                        <option
                            value="refetch"
                            selected=move || submit_mode.get() == SubmitMode::Refetch
                        >
                            "Reload the table"
                        </option>
                    </select>
                </div>

                <div class="input-row">
                    <button class="btn btn-save" on:click=save>"Save"</button>
                    <button class="btn btn-delete" on:click=reset>"Reset"</button>
                </div>

                {move || {
                    save_status.get().map(|status| match status {
                        Ok(msg) => view! { <span class="status-text status-saved">{msg}</span> }.into_any(),
                        Err(msg) => view! { <span class="status-text status-error">{msg}</span> }.into_any(),
                    })
                }}
            </section>
        </div>
    }
}
