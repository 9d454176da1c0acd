use std::path::Path;

use common::error::{Error, Result};
use common::types::VertexId;
use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;

use super::mst::MstKind;

/// Prefix for environment overrides, e.g. `GRAPH_ALGOS__MST__STRATEGY=kruskal`.
pub const ENV_PREFIX: &str = "GRAPH_ALGOS";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MstConfig {
    pub strategy: MstKind,
    /// Vertex to grow the tree from. Falls back to the first vertex when unset
    /// or not part of the analysed graph.
    pub start_vertex: Option<VertexId>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NegativeCycleConfig {
    pub enabled: bool,
}

impl Default for NegativeCycleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    pub mst: MstConfig,
    pub negative_cycle: NegativeCycleConfig,
}

/// Loads configuration from a file and environment variables.
///
/// Environment variables prefixed with [`ENV_PREFIX`] override file values;
/// nested keys are separated by `__`.
pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    if !path.exists() {
        return Err(Error::Config(format!(
            "Configuration file not found at path: {}",
            path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .separator("__"),
        )
        .build()
        .map_err(|e| Error::Config(e.to_string()))?;

    let analysis_config: AnalysisConfig = s
        .try_deserialize()
        .map_err(|e| Error::Config(format!("Failed to deserialize config: {}", e)))?;

    Ok(analysis_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Mutex, MutexGuard};

    // Every loader test reads the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Sets environment variables for the lifetime of the guard.
    struct EnvOverrides {
        keys: Vec<&'static str>,
    }

    impl EnvOverrides {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            for (key, value) in vars {
                // SAFETY: callers hold ENV_LOCK, so no other test touches the
                // environment concurrently.
                unsafe { std::env::set_var(key, value) };
            }
            Self {
                keys: vars.iter().map(|(key, _)| *key).collect(),
            }
        }
    }

    impl Drop for EnvOverrides {
        fn drop(&mut self) {
            for key in &self.keys {
                // SAFETY: see `EnvOverrides::set`.
                unsafe { std::env::remove_var(key) };
            }
        }
    }

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_use_prim_and_enable_cycle_search() {
        let config = AnalysisConfig::default();

        assert_eq!(config.mst.strategy, MstKind::Prim);
        assert_eq!(config.mst.start_vertex, None);
        assert!(config.negative_cycle.enabled);
    }

    #[test]
    fn loads_full_file() {
        let _env = lock_env();
        let (_dir, path) = write_config(
            r#"
            [mst]
            strategy = "kruskal"
            start_vertex = 3

            [negative_cycle]
            enabled = false
            "#,
        );

        let config = load_config(&path).unwrap();

        assert_eq!(config.mst.strategy, MstKind::Kruskal);
        assert_eq!(config.mst.start_vertex, Some(3));
        assert!(!config.negative_cycle.enabled);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let _env = lock_env();
        let (_dir, path) = write_config("[mst]\nstart_vertex = 1\n");

        let config = load_config(&path).unwrap();

        assert_eq!(config.mst.strategy, MstKind::Prim);
        assert_eq!(config.mst.start_vertex, Some(1));
        assert!(config.negative_cycle.enabled);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let _env = lock_env();
        let (_dir, path) = write_config("[mst]\nstrategy = \"boruvka\"\n");

        assert!(matches!(load_config(&path), Err(Error::Config(_))));
    }

    #[test]
    fn missing_file_is_rejected() {
        let _env = lock_env();
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            load_config(&dir.path().join("absent.toml")),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn environment_overrides_file_values() {
        let _env = lock_env();
        let (_dir, path) = write_config("[mst]\nstrategy = \"prim\"\nstart_vertex = 1\n");
        let _overrides = EnvOverrides::set(&[
            ("GRAPH_ALGOS__MST__STRATEGY", "kruskal"),
            ("GRAPH_ALGOS__MST__START_VERTEX", "7"),
        ]);

        let config = load_config(&path).unwrap();

        assert_eq!(config.mst.strategy, MstKind::Kruskal);
        assert_eq!(config.mst.start_vertex, Some(7));
        assert!(config.negative_cycle.enabled);
    }
}
