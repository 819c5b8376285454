use anyhow::Context;
use serde_json::json;

use ringlab_core::{Config, ExperimentResult};

/// Machine-readable output: the effective config plus the full result tree.
pub fn write_result_stdout(cfg: &Config, result: &ExperimentResult) -> anyhow::Result<()> {
    let doc = json!({
        "config": cfg,
        "result": result,
    });
    let text = serde_json::to_string_pretty(&doc).context("serialize result json")?;
    println!("{text}");
    Ok(())
}
