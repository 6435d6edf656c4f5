//! Decodes a sample FIX session and prints every message as JSON.
//!
//! Pass a file path to decode its contents instead of the built-in sample.
use fixlens::prelude::*;
use tracing::{info, warn};
mod common;
use common::{DemoConfig, init_logging, sample_session};

fn main() -> anyhow::Result<()> {
    init_logging();
    let cfg = DemoConfig::from_env();
    info!("Decoding with {:?}", cfg);

    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => sample_session(),
    };

    let parser = FixParser::builder()
        .with_config(cfg.decoder_config())
        .build()?;
    info!(
        "Dictionary {} with {} tags",
        parser.dictionary().version(),
        parser.dictionary().len()
    );

    let messages = parser.extract_messages(&text)?;
    let batch_delimiter = parser.batch_delimiter(&messages)?;
    let mut decoded = Vec::with_capacity(messages.len());
    for raw in &messages {
        let delimiter = match batch_delimiter {
            Some(delimiter) => delimiter,
            None => parser.guess_delimiter(raw)?,
        };
        let fields = parser.split_key_vals(raw, delimiter);
        let dropped = parser.unresolved_tags(&fields);
        if !dropped.is_empty() {
            warn!(
                "{}: tags not in dictionary: {:?}",
                raw.begin_string().unwrap_or("?"),
                dropped
            );
        }
        let message = parser.decorate(&fields)?;
        println!("{}", serde_json::to_string_pretty(&message)?);
        decoded.push(message);
    }

    info!(
        "Decoded {} messages, {} orders remembered",
        decoded.len(),
        parser.store().len()
    );
    Ok(())
}
