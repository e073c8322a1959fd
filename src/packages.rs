//! Sensor package loading.
//!
//! A package file is a JSON array. Each entry is either a `[code, [fields...]]`
//! pair or an object `{"code": ..., "fields": [...]}`.

use std::path::Path;

use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::error::LoadError;

/// One raw reading from the sensors: a workout code and its numeric fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawPackage")]
pub struct Package {
    pub code: String,
    pub fields: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, fields: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            fields,
        }
    }
}

/// Accepted on-disk shapes of a package.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPackage {
    Pair(String, Vec<f64>),
    Object { code: String, fields: Vec<f64> },
}

impl From<RawPackage> for Package {
    fn from(raw: RawPackage) -> Self {
        match raw {
            RawPackage::Pair(code, fields) | RawPackage::Object { code, fields } => {
                Package { code, fields }
            }
        }
    }
}

/// Returns the built-in demo packages.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Loads packages from a JSON file.
///
/// Entries that cannot be read as a package are logged and skipped; the
/// remaining packages keep their file order.
///
/// # Errors
/// Returns LoadError if the file is missing, unreadable, or not a JSON array.
pub fn load_packages<P: AsRef<Path>>(path: P) -> Result<Vec<Package>, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadError::CannotRead(format!("{}: {}", path.display(), e)))?;

    parse_packages(&content)
}

/// Parses packages from JSON text. See [`load_packages`].
pub fn parse_packages(content: &str) -> Result<Vec<Package>, LoadError> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| LoadError::InvalidFormat(e.to_string()))?;

    let Value::Array(entries) = value else {
        return Err(LoadError::InvalidFormat(
            "expected a JSON array of packages".to_string(),
        ));
    };

    let mut packages = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.into_iter().enumerate() {
        let entry_num = idx + 1;
        match serde_json::from_value::<Package>(entry) {
            Ok(package) => packages.push(package),
            Err(e) => warn!("skipping package {}: {}", entry_num, e),
        }
    }

    Ok(packages)
}
