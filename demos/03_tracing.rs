use messari_rs::MessariClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("messari_rs=debug")),
        )
        .init();

    let client = MessariClient::default();
    let body = client.list_all_markets(Some("exchange_name,pair")).await?;
    println!(
        "{} markets",
        body["data"].as_array().map_or(0, Vec::len)
    );
    Ok(())
}
