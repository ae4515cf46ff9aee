pub mod dashboard;
pub mod settings;
