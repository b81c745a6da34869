use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::vehicle::Vehicle;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read vehicle data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse vehicle data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the handlers get their vehicles from. Every call is a fresh load;
/// implementations must not cache between calls.
pub trait VehicleSource: Send + Sync {
    fn load_all(&self) -> Result<Vec<Vehicle>, StoreError>;

    fn find_by_vrm(&self, vrm: &str) -> Result<Option<Vehicle>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|v| v.has_vrm(vrm)))
    }
}

/// A JSON array of vehicle records on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VehicleSource for JsonFileSource {
    fn load_all(&self) -> Result<Vec<Vehicle>, StoreError> {
        let bytes = std::fs::read(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// Fixed in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    vehicles: Vec<Vehicle>,
}

impl StaticSource {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }
}

impl VehicleSource for StaticSource {
    fn load_all(&self) -> Result<Vec<Vehicle>, StoreError> {
        Ok(self.vehicles.clone())
    }
}
