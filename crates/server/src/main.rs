//! Bridge - Java to Bedrock translation core
//!
//! Startup binary: loads configuration and mapping tables, builds the
//! translator registry and replays a JSON-lines capture of Java packets
//! through one translation session.

use anyhow::{Context, Result};
use bridge_config::{BridgeConfig, DEFAULT_CONFIG_PATH};
use bridge_protocol::{BedrockPacket, JavaPacket};
use bridge_registry::Registries;
use bridge_translator::{BridgeSession, TranslatorRegistry};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info, warn, Instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let loaded = BridgeConfig::load_default();
    let filter = loaded.as_ref().map(|config| config.log_filter()).unwrap_or("info");

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    info!("🚀 Bridge starting up...");

    let config = match loaded {
        Ok(config) => {
            info!("✓ Configuration loaded from {}", DEFAULT_CONFIG_PATH);
            config
        }
        Err(e) => {
            warn!("⚠️  Failed to load {}: {}", DEFAULT_CONFIG_PATH, e);
            warn!("   Using default configuration");
            BridgeConfig::default()
        }
    };
    config.display();

    let (registries, translators) = build_core(&config).context("failed to start the translation core")?;
    let translators = Arc::new(translators);
    info!("✓ Translation core ready");

    let Some(capture) = std::env::args().nth(1) else {
        info!("No capture given, nothing to replay (usage: bridge <capture.jsonl>)");
        return Ok(());
    };

    let (session, upstream) =
        BridgeSession::new(1, registries, config.enable_optional_pack_required_features);
    let writer = tokio::spawn(log_upstream(upstream));

    let span = session.span().clone();
    let translated = replay(&capture, &translators, session).instrument(span).await?;
    let sent = writer.await.context("upstream writer panicked")?;

    info!("👋 Replayed {} packets, sent {} Bedrock packets", translated, sent);
    Ok(())
}

/// Load the mapping tables and build the translator registry
fn build_core(config: &BridgeConfig) -> bridge_core::Result<(Arc<Registries>, TranslatorRegistry)> {
    let registries = match &config.mappings_dir {
        Some(dir) => Registries::load_from_dir(dir)?,
        None => Registries::load_embedded()?,
    };
    let registries = Arc::new(registries);

    let translators = TranslatorRegistry::with_defaults(Arc::clone(&registries))?;
    Ok((registries, translators))
}

/// Parse one line of a JSON-lines capture
fn parse_packet(line: &str) -> bridge_core::Result<JavaPacket> {
    Ok(serde_json::from_str(line)?)
}

/// Feed every packet of a JSON-lines capture through `session`
///
/// # Returns
/// The number of packets dispatched. Lines that do not parse and packets
/// that fail translation are logged and skipped.
async fn replay(path: &str, translators: &TranslatorRegistry, mut session: BridgeSession) -> Result<usize> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("failed to open capture {}", path))?;
    let mut lines = BufReader::new(file).lines();

    info!("📂 Replaying {}", path);

    let mut dispatched = 0;
    let mut line_number = 0;
    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let packet = match parse_packet(&line) {
            Ok(packet) => packet,
            Err(e) => {
                warn!("Skipping line {}: {}", line_number, e);
                continue;
            }
        };

        dispatched += 1;
        if let Err(e) = translators.dispatch(&mut session, &packet) {
            if e.is_contract_violation() {
                error!("Contract violation on line {} ({:?}): {}", line_number, packet.kind(), e);
            } else {
                error!("Failed to translate line {}: {}", line_number, e);
            }
        }
    }

    Ok(dispatched)
}

/// Stand-in for the Bedrock transport: logs every outbound packet
async fn log_upstream(mut upstream: mpsc::UnboundedReceiver<BedrockPacket>) -> usize {
    let mut sent = 0;
    while let Some(packet) = upstream.recv().await {
        sent += 1;
        match serde_json::to_string(&packet) {
            Ok(json) => info!("→ {}", json),
            Err(e) => warn!("Failed to encode {:?}: {}", packet, e),
        }
    }
    sent
}
