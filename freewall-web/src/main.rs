use freewall_client::Config;

mod share;
mod ui;

/// Connection settings baked in at build time, defaulting to the development project
fn config() -> Config {
    let config = Config::new(option_env!("FREEWALL_URL"), option_env!("FREEWALL_ANON_KEY"));
    match option_env!("FREEWALL_BUCKET") {
        Some(bucket) => config.with_bucket(String::from(bucket)),
        None => config,
    }
}

fn main() {
    tracing_wasm::set_as_global_default();
    tracing::info!("starting freedom wall");
    yew::Renderer::<ui::App>::new().render();
}
