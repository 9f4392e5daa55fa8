//! Settings files.
//!
//! A settings file is a single top-level mapping of option names to values,
//! in YAML or JSON. Key order is preserved in both directions.

use std::path::Path;

use pn_core::Value;
use serde::Serialize;

use crate::Mapping;
use crate::error::{SettingsError, SettingsResult};
use crate::store::SettingsStore;

pub fn parse_yaml(content: &str) -> SettingsResult<Mapping> {
    let doc: serde_yaml::Value = serde_yaml::from_str(content)?;
    yaml_to_mapping(doc, "YAML document")
}

pub fn parse_json(content: &str) -> SettingsResult<Mapping> {
    let doc: serde_json::Value = serde_json::from_str(content)?;
    let serde_json::Value::Object(map) = doc else {
        return Err(SettingsError::NotAMapping {
            what: "JSON document".to_string(),
        });
    };
    map.into_iter()
        .map(|(name, value)| Ok((name, serde_json::from_value::<Value>(value)?)))
        .collect()
}

pub fn load_yaml(path: &Path) -> SettingsResult<Mapping> {
    let content = std::fs::read_to_string(path)?;
    let mapping = parse_yaml(&content)?;
    tracing::debug!(path = %path.display(), options = mapping.len(), "loaded settings");
    Ok(mapping)
}

pub fn load_json(path: &Path) -> SettingsResult<Mapping> {
    let content = std::fs::read_to_string(path)?;
    let mapping = parse_json(&content)?;
    tracing::debug!(path = %path.display(), options = mapping.len(), "loaded settings");
    Ok(mapping)
}

pub fn save_yaml(path: &Path, store: &SettingsStore) -> SettingsResult<()> {
    let mut doc = serde_yaml::Mapping::new();
    for entry in store.iter() {
        doc.insert(
            serde_yaml::Value::String(entry.name.clone()),
            serde_yaml::to_value(&entry.value)?,
        );
    }
    let content = serde_yaml::to_string(&doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn save_json(path: &Path, store: &SettingsStore) -> SettingsResult<()> {
    let mut doc = serde_json::Map::new();
    for entry in store.iter() {
        doc.insert(entry.name.clone(), serde_json::to_value(&entry.value)?);
    }
    let content = serde_json::to_string_pretty(&serde_json::Value::Object(doc))?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Serialize a plain struct into ordered name/value pairs.
pub(crate) fn to_mapping<T: Serialize>(object: &T) -> SettingsResult<Mapping> {
    let doc = serde_yaml::to_value(object)?;
    yaml_to_mapping(doc, std::any::type_name::<T>())
}

fn yaml_to_mapping(doc: serde_yaml::Value, what: &str) -> SettingsResult<Mapping> {
    let serde_yaml::Value::Mapping(map) = doc else {
        return Err(SettingsError::NotAMapping {
            what: what.to_string(),
        });
    };
    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let serde_yaml::Value::String(name) = key else {
            return Err(SettingsError::NotAMapping {
                what: format!("{what} (non-string key)"),
            });
        };
        pairs.push((name, serde_yaml::from_value::<Value>(value)?));
    }
    Ok(pairs)
}
