mod circular_detection;

use std::{
    fs,
    path::{Path, PathBuf},
};

use toml::{Value, map::Map};
use tracing::{debug, info, instrument};

use super::{Config, ConfigPaths};
use crate::{MarqueeError, Result};
use circular_detection::ImportChain;

const DEFAULT_CONFIG_HEADER: &str = "# Marquee player configuration\n";

impl Config {
    /// Loads the main configuration file from the user's config directory.
    ///
    /// The file is created (empty) if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined or the
    /// file cannot be loaded (see [`Config::load_from`]).
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config().map_err(MarqueeError::ConfigDir)?;
        Self::load_from(&path)
    }

    /// Loads a configuration file, resolving `imports = ["@file"]` entries.
    ///
    /// Imported files are merged first, in order, and the importing file
    /// wins on conflicting keys. Import paths are relative to the importing
    /// file and default to a `.toml` extension.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read or created
    /// - Any TOML content is invalid
    /// - An imported file cannot be loaded
    /// - Imports form a cycle
    /// - The merged configuration does not match the schema
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            info!("Creating default config file at {}", path.display());
            create_default_config_file(path)?;
        }

        let canonical_path = path.canonicalize().map_err(|source| MarqueeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut chain = ImportChain::default();
        let merged = load_with_imports(&canonical_path, &mut chain)?;

        merged.try_into().map_err(|source| MarqueeError::Schema {
            path: Some(canonical_path),
            source: Box::new(source),
        })
    }

    /// Parses a configuration from a TOML string. Imports are not resolved.
    ///
    /// # Errors
    /// Returns `MarqueeError::Parse` for malformed TOML and
    /// `MarqueeError::Schema` when the document does not fit the schema.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let value: Value = toml::from_str(content).map_err(|source| MarqueeError::Parse {
            path: None,
            source: Box::new(source),
        })?;

        value.try_into().map_err(|source| MarqueeError::Schema {
            path: None,
            source: Box::new(source),
        })
    }
}

fn load_with_imports(path: &Path, chain: &mut ImportChain) -> Result<Value> {
    chain.enter(path)?;
    let result = load_file(path, chain);
    chain.leave();
    result
}

fn load_file(path: &Path, chain: &mut ImportChain) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| MarqueeError::Import {
        path: path.to_path_buf(),
        source,
    })?;
    let mut value: Value = toml::from_str(&content).map_err(|source| MarqueeError::Parse {
        path: Some(path.to_path_buf()),
        source: Box::new(source),
    })?;

    let imports = take_imports(&mut value);
    let mut merged = Value::Table(Map::new());

    for import in imports {
        let resolved = resolve_import_path(path, &import);
        let canonical = resolved
            .canonicalize()
            .map_err(|source| MarqueeError::Import {
                path: resolved.clone(),
                source,
            })?;

        debug!("Importing {} into {}", canonical.display(), path.display());
        let imported = load_with_imports(&canonical, chain)?;
        merged = merge(merged, imported);
    }

    Ok(merge(merged, value))
}

/// Removes the `imports` array from the document and returns the `@`-prefixed entries.
fn take_imports(value: &mut Value) -> Vec<String> {
    let Value::Table(table) = value else {
        return Vec::new();
    };

    match table.remove("imports") {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .filter_map(|s| s.strip_prefix('@'))
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

/// Import paths are relative to the importing file's directory.
fn resolve_import_path(base_path: &Path, import_path: &str) -> PathBuf {
    let mut import_path = PathBuf::from(import_path);
    if import_path.extension().is_none() {
        import_path.set_extension("toml");
    }

    match base_path.parent() {
        Some(dir) => dir.join(import_path),
        None => import_path,
    }
}

/// Deep merge where `overlay` wins. Tables merge key by key, anything else
/// is replaced wholesale.
fn merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(mut overlay_table)) => {
            for (key, base_value) in base_table {
                let merged_value = match overlay_table.remove(&key) {
                    Some(overlay_value) => merge(base_value, overlay_value),
                    None => base_value,
                };
                overlay_table.insert(key, merged_value);
            }

            Value::Table(overlay_table)
        }
        (_, overlay) => overlay,
    }
}

fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| MarqueeError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, DEFAULT_CONFIG_HEADER).map_err(|source| MarqueeError::Io {
        path: path.to_path_buf(),
        source,
    })
}
