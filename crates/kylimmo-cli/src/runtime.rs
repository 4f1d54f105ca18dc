// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use kylimmo_app::Property;
use kylimmo_catalog::{Catalog, Dataset};

/// The loaded catalogs behind the UI: the browsable catalog plus the small
/// showcase set rendered on the home screen.
pub struct CatalogRuntime {
    catalog: Catalog,
    featured: Catalog,
    base_url: String,
}

impl CatalogRuntime {
    pub fn new(catalog: Catalog, base_url: &str) -> Result<Self> {
        Ok(Self {
            catalog,
            featured: Catalog::builtin(Dataset::Vitrine)?,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }
}

impl kylimmo_tui::CatalogSource for CatalogRuntime {
    fn properties(&self) -> &[Property] {
        self.catalog.properties()
    }

    fn featured(&self) -> &[Property] {
        self.featured.properties()
    }

    fn get(&self, id: &str) -> Option<&Property> {
        self.catalog.get(id)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
