//! Dry-run harness for interaction tuning.
//!
//! Replays a JSON scenario (accessor state plus a list of targets) against
//! scripted collaborators and logs every outcome together with the pointer
//! calls it produced, in both canvas and screen coordinates.
//!
//! # Examples
//!
//! ```bash
//! # Instant replay with debug logging of path decisions
//! RUST_LOG=interaction_runtime=debug cargo run -p interaction-sim -- crates/sim/scenarios/stacked_bones.json
//!
//! # Humanized pacing and a lenient match policy
//! INTERACTION_MATCH_POLICY=contains cargo run -p interaction-sim -- scenario.json --realtime
//! ```
mod scenario;

use std::path::PathBuf;

use anyhow::{Result, bail};
use interaction_runtime::InteractorConfig;

use crate::scenario::Scenario;

const USAGE: &str = "usage: interaction-sim <scenario.json> [--realtime]";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut path = None;
    let mut realtime = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => realtime = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if path.is_none() => path = Some(PathBuf::from(&arg)),
            other => bail!("unexpected argument '{other}'\n{USAGE}"),
        }
    }
    let Some(path) = path else {
        bail!(USAGE);
    };

    let config = InteractorConfig::from_env();
    let scenario = Scenario::load(&path)?;

    tracing::info!("Replaying {}", scenario.title(&path));
    tracing::info!("Match policy: {}", config.interaction.match_policy);
    tracing::info!("Realtime delays: {}", realtime);

    let outcomes = scenario::replay(&scenario, config, realtime).await?;

    let succeeded = outcomes.iter().filter(|outcome| outcome.is_success()).count();
    tracing::info!("{}/{} interactions succeeded", succeeded, outcomes.len());

    Ok(())
}
