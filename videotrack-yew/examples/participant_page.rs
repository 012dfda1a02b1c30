use videotrack_yew::App;

fn main() {
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting participant page demo");

    yew::Renderer::<App>::new().render();
}
