use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Riskboard"</h1>
                <p class="sidebar-subtitle">"Expense Risk Scoring"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Dashboard"</a>
                </li>
                <li class="nav-item">
                    <a href="/settings" class="nav-link">"Settings"</a>
                </li>
            </ul>
        </nav>
    }
}
