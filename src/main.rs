#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    folio::telemetry::init();
    folio::server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    folio::telemetry::init();
    folio::frontend::run();
}
