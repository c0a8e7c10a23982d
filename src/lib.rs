pub mod error;
pub mod fetch;
pub mod mapping;
pub mod storage;
pub mod transform;
pub mod types;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::error::FetchError;
    pub use crate::storage::{JsonFileSink, Sink};
    pub use crate::types::{PromptRecord, RawPrompt};
    pub use crate::{Mirror, MirrorConfig, RunReport};
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{error, info};
use url::Url;

use crate::fetch::Fetcher;
use crate::storage::{JsonFileSink, Sink};

/// Default collection endpoint: first page, effectively unbounded page size,
/// newest entries first.
pub const DEFAULT_FEED_URL: &str =
    "https://api-prompt.leops.cn/api/prompt?page=1&limit=10000&sort=new";

/// Default archive filename, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "transformed_prompts.json";

/// Where to fetch from and where to write. Passed into the pipeline rather
/// than read from globals so tests can substitute both ends.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    pub url: Url,
    pub output: PathBuf,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_FEED_URL).expect("default feed URL is valid"),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Outcome of one mirror run. The run itself never fails; a failed stage
/// shows up here as text instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub fetched: bool,
    pub records: usize,
    pub written: bool,
    pub error: Option<String>,
}

/// Async library entry point. Owns the HTTP client and run configuration.
pub struct Mirror {
    fetcher: Fetcher,
    config: MirrorConfig,
}

impl Mirror {
    pub fn new(config: MirrorConfig) -> Self {
        Self {
            fetcher: Fetcher::new(),
            config,
        }
    }

    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Run the whole pipeline once, writing through the configured file sink.
    pub async fn run(&self) -> RunReport {
        let sink = JsonFileSink::new(self.config.output.clone());
        self.run_with_sink(&sink).await
    }

    /// Fetch, transform, and hand the document to `sink`.
    ///
    /// Every stage failure is logged and folded into the report. Nothing is
    /// written unless the transform produced at least one record, and the
    /// call never panics or returns an error.
    pub async fn run_with_sink(&self, sink: &dyn Sink) -> RunReport {
        info!("fetching prompt collection from {}", self.config.url);
        let payload = match self.fetcher.fetch(&self.config.url).await {
            Ok(payload) => payload,
            Err(e) => {
                error!("failed to fetch {}: {}", self.config.url, e);
                return RunReport {
                    fetched: false,
                    records: 0,
                    written: false,
                    error: Some(e.to_string()),
                };
            }
        };

        info!("collection fetched, transforming");
        let records = transform::transform(&payload).await;
        if records.is_empty() {
            info!("transformation produced no records; nothing to write");
            return RunReport {
                fetched: true,
                records: 0,
                written: false,
                error: None,
            };
        }

        match sink.store(&records).await {
            Ok(()) => {
                info!("archived {} prompts", records.len());
                RunReport {
                    fetched: true,
                    records: records.len(),
                    written: true,
                    error: None,
                }
            }
            Err(e) => {
                error!("failed to store archive: {:#}", e);
                RunReport {
                    fetched: true,
                    records: records.len(),
                    written: false,
                    error: Some(format!("{e:#}")),
                }
            }
        }
    }
}
