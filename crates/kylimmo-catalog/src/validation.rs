// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;

use kylimmo_app::Property;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    BlankId,
    DuplicateId(String),
    BlankTitle(String),
    EmptyGallery(String),
    CoverMismatch(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => f.write_str("listing has a blank id"),
            Self::DuplicateId(id) => write!(f, "duplicate listing id {id:?}"),
            Self::BlankTitle(id) => write!(f, "listing {id:?} has a blank title"),
            Self::EmptyGallery(id) => write!(f, "listing {id:?} has an empty gallery"),
            Self::CoverMismatch(id) => {
                write!(f, "listing {id:?} gallery does not start with its cover image")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Load-time invariant checks. The catalog is read-only afterwards, so
/// these run exactly once per load path.
pub fn validate_properties(properties: &[Property]) -> CatalogResult<()> {
    let mut seen = BTreeSet::new();
    for property in properties {
        let id = property.id.as_str();
        if id.trim().is_empty() {
            return Err(CatalogError::BlankId);
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId(id.to_owned()));
        }
        if property.title.trim().is_empty() {
            return Err(CatalogError::BlankTitle(id.to_owned()));
        }
        if property.images.is_empty() {
            return Err(CatalogError::EmptyGallery(id.to_owned()));
        }
        if property.images[0] != property.image {
            return Err(CatalogError::CoverMismatch(id.to_owned()));
        }
    }
    Ok(())
}
