use chrono::{Duration, Utc};
use messari_rs::{Interval, MessariClient, SortOrder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = MessariClient::new(std::env::var("MESSARI_API_KEY").ok().as_deref())?;

    // 1. Last 30 days of daily closes.
    let today = Utc::now().date_naive();
    let series = client
        .asset_timeseries("btc", "price")
        .start(today - Duration::days(30))
        .end(today)
        .interval(Interval::D1)
        .order(SortOrder::Ascending)
        .columns("close")
        .fetch_series()
        .await?;

    match series {
        Some(s) => {
            println!("--- {} points of {:?} ---", s.len(), s.metric_id);
            let closes = s.column("close").unwrap_or_default();
            for (p, close) in s.points.iter().zip(closes) {
                if let (Some(ts), Some(c)) = (p.timestamp, close) {
                    println!("  {}  {:.2}", ts.date_naive(), c);
                }
            }
        }
        None => println!("no series returned"),
    }
    println!();

    // 2. The news feed, page by page until an empty page.
    for page in 1..=2 {
        let body = client.list_news(Some(page), Some("title,published_at")).await?;
        let items = body["data"].as_array().cloned().unwrap_or_default();
        if items.is_empty() {
            break;
        }
        println!("--- news page {page} ---");
        for item in items.iter().take(5) {
            println!("  {}  {}", item["published_at"], item["title"]);
        }
    }

    Ok(())
}
