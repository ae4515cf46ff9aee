mod app;
mod components;
mod config;
mod pages;
mod surface;

use app::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO)
            .build(),
    );

    tracing::info!("Starting riskboard");
    leptos::mount::mount_to_body(App);
}
