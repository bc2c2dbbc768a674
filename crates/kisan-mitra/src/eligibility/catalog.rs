use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::domain::{Scheme, SchemeId};

const EMBEDDED_CATALOG: &str = include_str!("../../data/schemes.json");

/// Read-only, validated collection of schemes loaded once per process.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
}

/// Failure to load or validate a scheme catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read scheme catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("scheme catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scheme at position {position} has a blank {field}")]
    BlankField {
        position: usize,
        field: &'static str,
    },
    #[error("duplicate scheme id '{0}'")]
    DuplicateId(SchemeId),
    #[error("scheme '{id}' has a negative {field} bound")]
    NegativeBound { id: SchemeId, field: &'static str },
    #[error("scheme '{id}' has minLand {min} greater than maxLand {max}")]
    InvertedLandRange { id: SchemeId, min: f64, max: f64 },
}

impl SchemeCatalog {
    /// Catalog bundled with the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let schemes: Vec<Scheme> = serde_json::from_str(raw)?;
        Self::new(schemes)
    }

    pub fn new(schemes: Vec<Scheme>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (position, scheme) in schemes.iter().enumerate() {
            validate(position, scheme)?;
            if !seen.insert(scheme.id.clone()) {
                return Err(CatalogError::DuplicateId(scheme.id.clone()));
            }
        }
        Ok(Self { schemes })
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Scheme> {
        self.schemes.iter().find(|scheme| scheme.id.as_str() == id)
    }
}

fn validate(position: usize, scheme: &Scheme) -> Result<(), CatalogError> {
    if scheme.id.as_str().trim().is_empty() {
        return Err(CatalogError::BlankField {
            position,
            field: "id",
        });
    }
    if scheme.name.trim().is_empty() {
        return Err(CatalogError::BlankField {
            position,
            field: "name",
        });
    }

    let rule = &scheme.rule;
    let bounds = [
        ("minLand", rule.min_land.value()),
        ("maxLand", rule.max_land.value()),
        ("incomeLimit", rule.income_limit.value()),
    ];
    for (field, bound) in bounds {
        if bound.is_some_and(|value| value < 0.0) {
            return Err(CatalogError::NegativeBound {
                id: scheme.id.clone(),
                field,
            });
        }
    }

    if let (Some(min), Some(max)) = (rule.min_land.value(), rule.max_land.value()) {
        if min > max {
            return Err(CatalogError::InvertedLandRange {
                id: scheme.id.clone(),
                min,
                max,
            });
        }
    }

    Ok(())
}
