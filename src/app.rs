use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::config::{self, ConfigContext};
use crate::pages::dashboard::DashboardPage;
use crate::pages::settings::SettingsPage;

#[component]
pub fn App() -> impl IntoView {
    // Saved overrides win over the page origin; a broken blob falls back to defaults
    let (initial, load_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (
            config::default_config(),
            Some(format!("Ignoring saved settings: {}", e)),
        ),
    };
    provide_context(ConfigContext {
        config: RwSignal::new(initial),
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    {load_error.map(|e| view! { <p class="status-text status-error">{e}</p> })}
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=DashboardPage />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
