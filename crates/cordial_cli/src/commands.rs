//! Subcommand implementations.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use miette::{IntoDiagnostic, Result, miette};
use owo_colors::OwoColorize;
use serde_json::{Map, Value};

use cordial_core::{CordialConfig, ToolRegistry, catalog};

use crate::output::Output;

fn build_registry(config: &CordialConfig) -> Result<ToolRegistry> {
    let invoker = config.build_invoker()?;
    Ok(catalog::registry(invoker))
}

pub fn list(config: &CordialConfig) -> Result<()> {
    let registry = build_registry(config)?;
    let output = Output::new();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Tool", "Description"]);

    for definition in registry.definitions() {
        table.add_row(vec![
            definition["name"].as_str().unwrap_or_default(),
            definition["description"].as_str().unwrap_or_default(),
        ]);
    }

    output.status(&table.to_string());
    output.status(&format!("{} tools", registry.len()));
    Ok(())
}

pub fn schema(config: &CordialConfig, tool: &str) -> Result<()> {
    let registry = build_registry(config)?;
    let descriptor = registry
        .get(tool)
        .ok_or_else(|| miette!("unknown tool '{tool}'; run `cordial list` to see the catalog"))?;

    let rendered =
        serde_json::to_string_pretty(&descriptor.definition()).into_diagnostic()?;
    println!("{rendered}");
    Ok(())
}

pub fn catalog(config: &CordialConfig) -> Result<()> {
    let registry = build_registry(config)?;
    let rendered =
        serde_json::to_string_pretty(&Value::Array(registry.definitions())).into_diagnostic()?;
    println!("{rendered}");
    Ok(())
}

pub async fn invoke(
    config: &CordialConfig,
    tool: &str,
    args_json: Option<&str>,
    arg_pairs: &[String],
) -> Result<()> {
    let registry = build_registry(config)?;
    let output = Output::new();

    let arguments = parse_arguments(args_json, arg_pairs)?;
    match registry.execute(tool, &arguments).await {
        Ok(data) => {
            let rendered = serde_json::to_string_pretty(&data).into_diagnostic()?;
            println!("{rendered}");
            output.success(&format!("{} completed", tool.bright_cyan()));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Accepts either a single JSON object (`--args '{"k": "v"}'`) or repeated
/// `-a key=value` pairs; pair values parse as JSON when they can, strings
/// otherwise, so `-a limit=5` is a number and `-a name=general` a string.
fn parse_arguments(
    args_json: Option<&str>,
    arg_pairs: &[String],
) -> Result<Map<String, Value>> {
    if let Some(raw) = args_json {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| miette!("--args must be a JSON object: {e}"))?;
        return match value {
            Value::Object(map) => Ok(map),
            other => Err(miette!("--args must be a JSON object, got: {other}")),
        };
    }

    let mut map = Map::new();
    for pair in arg_pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| miette!("argument '{pair}' is not in key=value form"))?;
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        map.insert(key.to_string(), value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pairs_parse_json_values_with_string_fallback() {
        let map = parse_arguments(
            None,
            &[
                "channel_id=123".to_string(),
                "limit=5".to_string(),
                "nsfw=false".to_string(),
                "name=general".to_string(),
            ],
        )
        .unwrap();

        assert_eq!(map["channel_id"], json!(123));
        assert_eq!(map["limit"], json!(5));
        assert_eq!(map["nsfw"], json!(false));
        assert_eq!(map["name"], json!("general"));
    }

    #[test]
    fn json_object_wins_over_pairs() {
        let map = parse_arguments(Some(r#"{"guild_id": "9"}"#), &[]).unwrap();
        assert_eq!(map["guild_id"], json!("9"));
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(parse_arguments(Some("[1,2]"), &[]).is_err());
        assert!(parse_arguments(Some("not json"), &[]).is_err());
        assert!(parse_arguments(None, &["no-equals".to_string()]).is_err());
    }
}
