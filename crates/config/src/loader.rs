use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{env_subst::substitute_env, schema::ParcelConfig};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &["parcel.toml", "parcel.yaml", "parcel.yml", "parcel.json"];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<ParcelConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let raw = substitute_env(&raw);
    parse_config(&raw, path)
}

/// Load an explicitly given config file, or fall back to discovery.
///
/// An explicit path that fails to load is an error; discovery never fails.
pub fn load_or_discover(path: Option<&Path>) -> anyhow::Result<ParcelConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_config(path)
        },
        None => Ok(discover_and_load()),
    }
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./parcel.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/parcel/parcel.{toml,yaml,yml,json}` (user-global)
///
/// Returns `ParcelConfig::default()` if no config file is found.
pub fn discover_and_load() -> ParcelConfig {
    let mut dirs = vec![PathBuf::from(".")];
    dirs.extend(config_dir());
    discover_in(&dirs)
}

fn discover_in(dirs: &[PathBuf]) -> ParcelConfig {
    if let Some(path) = find_config_file(dirs) {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    ParcelConfig::default()
}

/// First existing config file, directories in order, names in order.
fn find_config_file(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| CONFIG_FILENAMES.iter().map(move |name| dir.join(name)))
        .find(|p| p.exists())
}

/// Returns the user-global config directory (`~/.config/parcel/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "parcel").map(|d| d.config_dir().to_path_buf())
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<ParcelConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::schema::PlayerEntry,
        parcel_common::CapacityPolicy,
    };

    #[test]
    fn loads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parcel.toml");
        std::fs::write(&path, "[world]\ninbox_capacity = 4\n").unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.world.inbox_capacity, 4);
    }

    #[test]
    fn loads_yaml_and_json() {
        let dir = tempfile::tempdir().unwrap();

        let yaml = dir.path().join("parcel.yaml");
        std::fs::write(&yaml, "delivery:\n  capacity: enforce\n").unwrap();
        assert_eq!(
            load_config(&yaml).unwrap().delivery.capacity,
            CapacityPolicy::Enforce
        );

        let json = dir.path().join("parcel.json");
        std::fs::write(
            &json,
            r#"{"world": {"stored": [{"name": "carol", "online": false}]}}"#,
        )
        .unwrap();
        assert_eq!(load_config(&json).unwrap().world.stored, vec![
            PlayerEntry::new("carol", false)
        ]);
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parcel.ini");
        std::fs::write(&path, "").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported config format"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(load_or_discover(Some(&path)).is_err());
    }

    #[test]
    fn discovery_prefers_earlier_dirs() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(
            first.path().join("parcel.yml"),
            "world:\n  inbox_capacity: 1\n",
        )
        .unwrap();
        std::fs::write(
            second.path().join("parcel.toml"),
            "[world]\ninbox_capacity = 2\n",
        )
        .unwrap();

        let cfg = discover_in(&[first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(cfg.world.inbox_capacity, 1);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("parcel.toml"), "[world\n").unwrap();

        let cfg = discover_in(&[dir.path().to_path_buf()]);
        assert_eq!(cfg, ParcelConfig::default());
    }

    #[test]
    fn nothing_found_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            discover_in(&[dir.path().to_path_buf()]),
            ParcelConfig::default()
        );
    }
}
