use anyhow::Context;
use time::format_description::well_known::Rfc3339;
use tracing_subscriber::{
    fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

mod app_state;
mod clock;
mod config;
mod domain;
mod page_store;
mod router;
mod routes;
mod views;

use crate::{app_state::AppState, clock::SystemClock};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = config::read_config().context("Failed to read configuration")?;

    // Must run before the runtime spawns its worker threads.
    let clock = SystemClock::resolve(settings.pages.utc_offset.as_deref())
        .context("Invalid pages.utc_offset, expected e.g. \"+05:30\"")?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build the tokio runtime")?
        .block_on(serve(settings, clock))
}

async fn serve(settings: config::Settings, clock: SystemClock) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checkin_web=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer().with_timer(OffsetTime::new(clock.offset(), Rfc3339)),
        )
        .init();

    tracing::info!("Greeting clock runs at UTC offset {}", clock.offset());

    let app_state = AppState::new(&settings.pages, clock);
    let app = router::create(app_state);

    let address = settings.application.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await.context("Server error")
}
