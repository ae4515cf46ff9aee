use leptos::prelude::*;
use riskboard_core::Risk;

/// Table cell showing the server's risk label. The class comes from the
/// whitelisted `Risk`, never from the label text.
#[component]
pub fn RiskCell(
    risk: Risk,
    /// The label exactly as the service sent it, e.g. "alto"
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <td class=risk.css_class() title=risk.as_str()>{label}</td>
    }
}
