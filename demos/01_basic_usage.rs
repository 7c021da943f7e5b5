use messari_rs::{Asset, Envelope, MessariClient};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build a client, keyed when MESSARI_API_KEY is set.
    let mut builder = MessariClient::builder().timeout(Duration::from_secs(10));
    if let Ok(key) = std::env::var("MESSARI_API_KEY") {
        builder = builder.api_key(key);
    }
    let client = builder.build()?;

    // 2. Basic metadata; an unknown key comes back as an error envelope, not an Err.
    for key in ["btc", "btc1111"] {
        match Envelope::from(client.get_asset(key, Some("id,symbol,name")).await?) {
            Envelope::Data { data, .. } => println!("{key}: {} ({})", data["name"], data["symbol"]),
            Envelope::Error(e) => println!("{key}: error {} {:?}", e.code, e.message),
            Envelope::Unrecognized(v) => println!("{key}: unexpected body {v}"),
        }
    }
    println!();

    // 3. A server-pruned profile.
    let eth = Asset::new(&client, "eth");
    let profile = eth
        .profile(Some("symbol,name,profile/general/overview/project_details"))
        .await?;
    println!(
        "ETH overview: {}",
        profile["data"]["profile"]["general"]["overview"]["project_details"]
    );
    println!();

    // 4. First page of assets with embedded metrics.
    let assets = client.list_assets().with_metrics(true).limit(5).fetch().await?;
    if let Some(rows) = Envelope::from(assets).data().and_then(|d| d.as_array().cloned()) {
        for row in rows {
            println!(
                "  {:>6}  {}",
                row["symbol"].as_str().unwrap_or("?"),
                row["metrics"]["market_data"]["price_usd"]
            );
        }
    }

    Ok(())
}
