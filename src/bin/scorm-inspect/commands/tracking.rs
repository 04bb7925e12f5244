//! `scorm-inspect tracking` command

use std::io::Read;

use anyhow::{Context, Result};
use scorm_core::cmi::TrackingUpdate;

use crate::cli::TrackingArgs;

pub fn execute(args: TrackingArgs) -> Result<i32> {
    let payload = read_payload(&args.payload)?;
    let update = TrackingUpdate::from_payload(&payload);
    println!("{}", serde_json::to_string_pretty(&update)?);
    Ok(0)
}

/// Read a CMI payload from a file, or stdin for `-`.
///
/// A `{"cmiData": {...}}` request body is unwrapped.
fn read_payload(source: &str) -> Result<serde_json::Value> {
    let text = if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read CMI payload from stdin")?;
        text
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read {}", source))?
    };

    let mut value: serde_json::Value =
        serde_json::from_str(&text).context("CMI payload is not valid JSON")?;
    if let Some(inner) = value.get_mut("cmiData").map(serde_json::Value::take) {
        value = inner;
    }
    Ok(value)
}
