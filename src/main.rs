use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{info, info_span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use uuid::Uuid;

use seating_system::{
    config::{Config, LogFormat},
    telemetry::TracingEvents,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::load().context("invalid configuration")?;

    // stdout занят протоколом, логи идут в stderr
    let fmt_layer = match config.app.log_format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(fmt_layer)
        .init();

    let run_id = Uuid::new_v4();
    let _span = info_span!("allocation_run", %run_id).entered();
    info!(
        rows = config.grid.rows,
        columns = config.grid.columns,
        "Starting seat allocation"
    );

    let state = AppState::new(config).context("cannot build seating plan")?;

    // Читаем весь вход: запросы зависят друг от друга и идут строго по порядку
    let text = match &state.config.app.input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("cannot read input file {}", path.display()))?,
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("cannot read stdin")?;
            text
        }
    };

    let output = state.process_text(&text, TracingEvents)?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await.context("cannot write output")?;
    stdout.flush().await.context("cannot flush output")?;
    Ok(())
}
