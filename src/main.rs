mod cli;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use promptmirror::{Mirror, MirrorConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = cli::Cli::parse();
    let mirror = Mirror::new(MirrorConfig {
        url: args.url,
        output: args.output,
    });

    let report = mirror.run().await;

    // Failures were already logged by the stage that hit them; the process
    // exits 0 either way.
    if report.written {
        info!("run finished: {} prompts archived", report.records);
    } else if let Some(err) = &report.error {
        info!("run finished without writing: {}", err);
    } else {
        info!("run finished: nothing to archive");
    }
}
