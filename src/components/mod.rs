pub mod expense_table;
pub mod metrics_panel;
pub mod risk_badge;
pub mod score_form;
pub mod sidebar;
