//! ScoreBuddy Voice Skill
//!
//! Local invocation driver: reads newline-delimited JSON request envelopes
//! on stdin and writes response envelopes to stdout. The platform transport
//! (HTTP or Lambda) fronts the same `Skill` type in deployment.

#![allow(non_snake_case)]

use std::sync::Arc;

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};

use ScoreBuddy::{
    config::Settings,
    models::request::RequestEnvelope,
    skill::{Skill, SkillContext},
    storage::{GameStore, InMemoryGameStore, RedisGameStore},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting ScoreBuddy skill ({})", ScoreBuddy::info());

    // Initialize the session store
    let store: Arc<dyn GameStore> = match settings.storage.backend.as_str() {
        "memory" => {
            info!("Using in-memory session store");
            Arc::new(InMemoryGameStore::new())
        }
        _ => {
            info!("Connecting to Redis at {}", settings.storage.redis.url);
            Arc::new(RedisGameStore::new(settings.storage.redis.clone()).await?)
        }
    };

    let skill = Skill::new(store);
    let mut ctx = SkillContext::default();

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    info!("ScoreBuddy skill is ready, waiting for request envelopes");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let envelope: RequestEnvelope = match serde_json::from_str(line) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(error = %e, "Skipping malformed request envelope");
                continue;
            }
        };

        match skill.handle(&envelope, &mut ctx).await {
            Ok(Some(response)) => {
                let wire = serde_json::to_string(&response.into_envelope())?;
                stdout.write_all(wire.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
            Ok(None) => {}
            Err(e) if e.is_recoverable() => {
                error!(error = %e, "Request failed");
            }
            Err(e) => {
                error!(error = %e, "Fatal request failure");
                return Err(e.into());
            }
        }
    }

    info!("ScoreBuddy skill shut down");
    Ok(())
}
