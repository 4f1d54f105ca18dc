// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod validation;

pub use validation::{CatalogError, CatalogResult, validate_properties};

use anyhow::{Context, Result, bail};
use kylimmo_app::Property;
use std::fs;
use std::path::Path;

pub const APP_NAME: &str = "kylimmo";

/// Built-in dataset variants. The source shipped near-duplicate hardcoded
/// catalogs per locale; here they are data, selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    /// Main 18-listing catalog, FCFA prices.
    Abidjan,
    /// Featured-showcase set, EUR prices.
    Vitrine,
}

impl Dataset {
    pub const ALL: [Self; 2] = [Self::Abidjan, Self::Vitrine];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abidjan => "abidjan",
            Self::Vitrine => "vitrine",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "abidjan" => Some(Self::Abidjan),
            "vitrine" => Some(Self::Vitrine),
            _ => None,
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Abidjan => include_str!("../data/abidjan.json"),
            Self::Vitrine => include_str!("../data/vitrine.json"),
        }
    }
}

/// An ordered, read-only sequence of listings. All loads validate the
/// catalog invariants; after that there is no create/update/delete surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    pub fn builtin(dataset: Dataset) -> Result<Self> {
        Self::from_json(dataset.source())
            .with_context(|| format!("load builtin dataset {:?}", dataset.as_str()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let properties: Vec<Property> =
            serde_json::from_str(raw).context("parse catalog JSON")?;
        validate_properties(&properties).context("validate catalog")?;
        Ok(Self { properties })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read catalog file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("load catalog {}", path.display()))
    }

    /// Lookup by id. A missing id is `None`, rendered as a not-found
    /// screen, never an error.
    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|property| property.id.as_str() == id)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Catalog paths come from config; reject URI-looking values early so the
/// error names the config key instead of a confusing read failure.
pub fn validate_catalog_path(path: &str) -> Result<()> {
    if path.contains("://") || path.starts_with("file:") {
        bail!("catalog path {path:?} looks like a URI; use a plain filesystem path");
    }
    if path.contains('?') {
        bail!("catalog path {path:?} carries query parameters; use a plain filesystem path");
    }
    Ok(())
}
