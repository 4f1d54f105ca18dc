// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeMap;

use serde_json::json;

use crate::model::Property;

/// Meta descriptions are cut to this many characters for search engines.
pub const META_DESCRIPTION_MAX: usize = 160;

const LISTING_TITLE: &str = "Tous les biens immobiliers | Agence Immo";
const LISTING_DESCRIPTION: &str = "Catalogue complet des biens immobiliers à vendre et à louer. \
Filtrez et parcourez toutes nos annonces.";

/// The document-level metadata side table. Page visits overwrite it through
/// idempotent upserts; applying the same page twice leaves it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentHead {
    pub title: String,
    metas: BTreeMap<String, String>,
    pub canonical: Option<String>,
    pub structured_data: Option<String>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a named meta tag; a second call with the same name replaces
    /// the previous content instead of accumulating tags.
    pub fn set_meta_tag(&mut self, name: &str, content: &str) {
        self.metas.insert(name.to_owned(), content.to_owned());
    }

    pub fn meta(&self, name: &str) -> Option<&str> {
        self.metas.get(name).map(String::as_str)
    }

    /// Head state for the all-listings page: static title, description, and
    /// a canonical link under the site base URL.
    pub fn apply_listing(&mut self, base_url: &str) {
        self.title = LISTING_TITLE.to_owned();
        self.set_meta_tag("description", &truncate_chars(LISTING_DESCRIPTION, META_DESCRIPTION_MAX));
        self.canonical = Some(format!("{}/biens", base_url.trim_end_matches('/')));
        self.structured_data = None;
    }

    /// Head state for a detail page: `"{title} – {price}"` as the page
    /// title, a truncated description, a canonical detail URL, and a
    /// schema.org Residence offer for search-engine consumption.
    pub fn apply_property(&mut self, property: &Property, base_url: &str) {
        self.title = format!("{} – {}", property.title, property.price);

        let description = format!(
            "{} à {}. {}, {} chambres, {} salles de bain.",
            property.title,
            property.location,
            property.surface,
            property.bedrooms.unwrap_or(0),
            property.bathrooms.unwrap_or(0),
        );
        self.set_meta_tag("description", &truncate_chars(&description, META_DESCRIPTION_MAX));

        self.canonical = Some(format!(
            "{}/biens/{}",
            base_url.trim_end_matches('/'),
            property.id
        ));

        let block = json!({
            "@context": "https://schema.org",
            "@type": "Residence",
            "name": property.title,
            "address": {
                "@type": "PostalAddress",
                "addressLocality": property.location,
            },
            "offers": {
                "@type": "Offer",
                "price": property.price,
            },
        });
        self.structured_data = Some(block.to_string());
    }
}

/// Character-count truncation (not bytes); multi-byte text stays valid.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
