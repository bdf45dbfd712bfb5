//! End-to-end integration tests for the routedoc CLI

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use std::path::Path;
use std::process::{Command, Output};

const MANIFEST: &str = r#"
converters: slug
routes:
  - path: /pets/<int:id>
    arguments:
      - name: fields
        location: args
        action: append
        help: Fields to return
      - name: session
        location: cookie
    fields:
      id: Integer
      born: DateTime
  - path: /owners/<slug:owner>
"#;

/// Run the routedoc binary with the given arguments
fn routedoc<I, S>(args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_routedoc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .context("Failed to execute routedoc")
}

/// Run routedoc and parse its stdout as JSON, failing on a non-zero exit
fn routedoc_json<I, S>(args: I) -> Result<Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = routedoc(args)?;
    if !output.status.success() {
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        bail!("routedoc exited with {}", output.status);
    }
    serde_json::from_slice(&output.stdout).context("routedoc did not print JSON")
}

fn write_manifest(dir: &Path) -> Result<String> {
    let path = dir.join("routes.yaml");
    std::fs::write(&path, MANIFEST)?;
    Ok(path.to_string_lossy().to_string())
}

#[test]
fn test_path_command() -> Result<()> {
    let value = routedoc_json(["path", "/pets/<int:id>/files/<path:name>"])?;
    assert_eq!(
        value,
        json!({
            "path": "/pets/{id}/files/{name}",
            "parameters": [
                {"name": "id", "paramType": "path", "required": true, "type": "integer"},
                {"name": "name", "paramType": "path", "required": true, "type": "string"}
            ]
        })
    );
    Ok(())
}

#[test]
fn test_path_command_custom_converter() -> Result<()> {
    let value = routedoc_json(["path", "/owners/<slug:owner>", "--converter", "slug"])?;
    assert_eq!(value["parameters"][0]["type"], json!("string"));
    Ok(())
}

#[test]
fn test_path_command_unsupported_converter() -> Result<()> {
    let output = routedoc(["path", "/files/<path:name>", "--no-builtin-converters"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unsupported type converter 'path'"),
        "unexpected stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn test_field_command() -> Result<()> {
    assert_eq!(
        routedoc_json(["field", "DateTime"])?,
        json!({"type": "string", "format": "date-time"})
    );
    assert_eq!(routedoc_json(["field", "Geometry"])?, json!({"type": "string"}));
    Ok(())
}

#[test]
fn test_render_manifest_to_stdout() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let manifest = write_manifest(dir.path())?;

    let value = routedoc_json(["render", "--manifest", manifest.as_str()])?;
    assert_eq!(
        value,
        json!([
            {
                "path": "/pets/{id}",
                "pathParameters": [
                    {"name": "id", "paramType": "path", "required": true, "type": "integer"}
                ],
                "parameters": {
                    "fields": {
                        "paramType": "query",
                        "type": "string",
                        "description": "Fields to return",
                        "allowMultiple": true
                    }
                },
                "properties": {
                    "id": {"type": "integer"},
                    "born": {"type": "string", "format": "date-time"}
                }
            },
            {
                "path": "/owners/{owner}",
                "pathParameters": [
                    {"name": "owner", "paramType": "path", "required": true, "type": "string"}
                ],
                "parameters": {},
                "properties": {}
            }
        ])
    );
    Ok(())
}

#[test]
fn test_render_with_config_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let manifest = write_manifest(dir.path())?;
    let output_path = dir.path().join("fragments.json");
    let config_path = dir.path().join("routedoc.json");
    std::fs::write(
        &config_path,
        serde_json::to_string(&json!({
            "manifest_path": manifest,
            "output": output_path.to_string_lossy(),
            "pretty": false
        }))?,
    )?;

    let config_arg = config_path.to_string_lossy().to_string();
    let output = routedoc(["render", "--config", config_arg.as_str()])?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let written = std::fs::read_to_string(&output_path)?;
    assert!(!written.contains('\n'));
    let value: Value = serde_json::from_str(&written)?;
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn test_render_requires_input() -> Result<()> {
    let output = routedoc(["render"])?;
    assert!(!output.status.success());
    Ok(())
}
