use crate::types::Package;
use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// The built-in reference packages, used when no file is given.
pub fn sample_packages() -> Vec<Package> {
    [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
    .into_iter()
    .map(|(code, data)| Package {
        code: code.to_string(),
        data,
    })
    .collect()
}

/// Load packages from a JSON file holding an array of
/// `["CODE", [numbers...]]` pairs.
///
/// Only the shape is checked here; type codes and field counts are
/// validated later by the dispatcher.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading packages file: {}", path.display()))?;
    let json: JsonValue = serde_json::from_str(&raw)
        .with_context(|| format!("parsing packages file: {}", path.display()))?;

    let Some(entries) = json.as_array() else {
        bail!("packages file must hold a JSON array: {}", path.display());
    };

    let mut out = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        out.push(parse_entry(entry).with_context(|| format!("package #{}", i + 1))?);
    }

    Ok(out)
}

fn parse_entry(entry: &JsonValue) -> Result<Package> {
    let Some(pair) = entry.as_array() else {
        bail!("expected a [code, data] pair, got: {entry}");
    };
    let [code, data] = pair.as_slice() else {
        bail!("expected exactly 2 elements, got {}", pair.len());
    };

    let Some(code) = code.as_str() else {
        bail!("type code must be a string, got: {code}");
    };
    let Some(data) = data.as_array() else {
        bail!("data must be an array of numbers, got: {data}");
    };

    let mut fields = Vec::with_capacity(data.len());
    for v in data {
        let Some(n) = v.as_f64() else {
            bail!("data field must be a number, got: {v}");
        };
        fields.push(n);
    }

    Ok(Package {
        code: code.to_string(),
        data: fields,
    })
}
