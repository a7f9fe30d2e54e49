#[tokio::main]
async fn main() {
    if let Err(e) = planet_catalog::run().await {
        eprintln!("Failed to start planet catalog: {:#}", e);
        std::process::exit(1);
    }
}
