// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use atcs::cli::Args;
use atcs::opener::ConsoleOpener;
use atcs::session::{run, OutputMode};
use atcs::Navigator;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the screen (or the JSON feed) owns stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "atcs_monitor=info,atcs=info,atcs_core=info,atcs_stream=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let dataset = args
        .load_dataset()
        .inspect_err(|e| error!("cannot load dataset: {e}"))?;
    let issues = dataset.log_diagnostics();
    info!(
        provinces = dataset.provinces.len(),
        issues,
        source = ?args.dataset,
        "dataset loaded"
    );

    let lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    let mut stdout = std::io::stdout();
    match OutputMode::from_json_flag(args.json) {
        OutputMode::Text => {
            let navigator = Navigator::new(dataset, ConsoleOpener::stdout());
            run(lines, navigator, OutputMode::Text, &mut stdout).await
        }
        // Portal hand-offs travel inside the JSON feed; the opener only logs them.
        OutputMode::Json => {
            let navigator = Navigator::with_dataset(dataset);
            run(lines, navigator, OutputMode::Json, &mut stdout).await
        }
    }
}
