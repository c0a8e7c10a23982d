use std::path::PathBuf;

use clap::Parser;
use url::Url;

use promptmirror::{DEFAULT_FEED_URL, DEFAULT_OUTPUT_FILE};

/// Fetch, normalize, and archive a remote prompt collection
#[derive(Debug, Parser)]
#[command(name = "promptmirror")]
#[command(about = "Mirror a remote prompt collection into a local JSON archive", long_about = None)]
pub struct Cli {
    /// Collection endpoint to fetch
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    pub url: Url,

    /// Path of the JSON archive to write (overwritten if present)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
}
