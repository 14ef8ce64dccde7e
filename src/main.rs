use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use presensi::{ApiClient, Config, Notifier};
use presensi::flow::catalog::ActivityCatalog;

/// Connectivity check: loads today's activity catalog and prints it, the
/// same call path the form page takes on mount.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();

    info!(base_url = %config.api_base_url, "presensi client starting");

    let client = ApiClient::new(&config).context("failed to build API client")?;
    let (notifier, mut notifications) = Notifier::channel();

    let mut catalog = ActivityCatalog::default();
    catalog
        .load(&client, Some(chrono::Local::now().date_naive()), None, &notifier)
        .await;

    for activity in catalog.activities() {
        println!("[{}] {}", activity.id, activity.activity_name);
    }
    while let Ok(notification) = notifications.try_recv() {
        println!(
            "{}: {}: {}",
            notification.level, notification.title, notification.message
        );
    }

    Ok(())
}
