//! Fragment rendering entry point

use crate::{config::Config, error::Result, fragment::RouteFragment, manifest::RouteManifest};

/// Main entry point for rendering a manifest's route fragments
pub async fn generate(config: &Config) -> Result<Vec<RouteFragment>> {
    // 1. Load the route manifest
    let manifest = RouteManifest::from_file(&config.manifest_path).await?;

    // 2. Merge the configured converters with those the application registers
    let mut registry = config.registry();
    registry.extend(manifest.converters.iter().cloned());
    log::debug!("Converter registry: {}", registry.names().collect::<Vec<_>>().join(", "));

    // 3. Build one fragment per route
    RouteFragment::build_all(&manifest.routes, &registry)
}

/// Serialize rendered fragments as JSON
pub fn to_json(fragments: &[RouteFragment], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(fragments)?
    } else {
        serde_json::to_string(fragments)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"
converters: [slug]
routes:
  - path: /pets/<slug:name>/<path:rest>
    fields:
      name: String
"#;

    #[tokio::test]
    async fn test_generate_merges_registries() -> Result<()> {
        let dir = tempdir()?;
        let manifest_path = dir.path().join("routes.yaml");
        tokio::fs::write(&manifest_path, MANIFEST).await?;

        let config = Config::new(manifest_path.to_string_lossy());
        let fragments = generate(&config).await?;
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].path, "/pets/{name}/{rest}");
        assert_eq!(fragments[0].path_parameters.len(), 2);

        let json = to_json(&fragments, false)?;
        assert!(json.starts_with(r#"[{"path":"/pets/{name}/{rest}""#));
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_without_builtins() -> Result<()> {
        let dir = tempdir()?;
        let manifest_path = dir.path().join("routes.yaml");
        tokio::fs::write(&manifest_path, MANIFEST).await?;

        let mut config = Config::new(manifest_path.to_string_lossy());
        config.builtin_converters = false;
        let result = generate(&config).await;
        assert!(matches!(
            result,
            Err(Error::UnsupportedConverter { converter, .. }) if converter == "path"
        ));
        Ok(())
    }
}
