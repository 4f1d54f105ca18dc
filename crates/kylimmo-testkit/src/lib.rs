// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Deterministic listing fixtures for tests across the workspace.

use anyhow::{Context, Result};
use kylimmo_app::{Property, PropertyId};

const KINDS: [&str; 3] = ["Appartement", "Maison", "Villa"];
const COVERS: [&str; 3] = ["appartement-1.jpg", "maison-1.jpg", "villa-1.jpg"];
const DISTRICTS: [&str; 6] = [
    "Plateau, Abidjan",
    "Cocody, Abidjan",
    "Marcory, Abidjan",
    "Grand-Bassam, Comoé",
    "Bouaké Centre, Gbêkê",
    "Yamoussoukro Centre, Yamoussoukro",
];

/// Builder for a well-formed listing; every field has a sensible default so
/// tests only spell out what they assert on.
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    property: Property,
}

impl PropertyBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            property: Property {
                id: PropertyId::from(id),
                title: format!("Bien témoin {id}"),
                price: "100 000 000 FCFA".to_owned(),
                location: "Plateau, Abidjan".to_owned(),
                kind: "Appartement".to_owned(),
                surface: "100 m²".to_owned(),
                bedrooms: Some(2),
                bathrooms: Some(1),
                image: "appartement-1.jpg".to_owned(),
                images: vec!["appartement-1.jpg".to_owned(), "maison-1.jpg".to_owned()],
                is_new: None,
                is_favorite: None,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.property.title = title.to_owned();
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.property.location = location.to_owned();
        self
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.property.kind = kind.to_owned();
        self
    }

    pub fn price(mut self, price: &str) -> Self {
        self.property.price = price.to_owned();
        self
    }

    pub fn surface(mut self, surface: &str) -> Self {
        self.property.surface = surface.to_owned();
        self
    }

    pub fn rooms(mut self, bedrooms: Option<u32>, bathrooms: Option<u32>) -> Self {
        self.property.bedrooms = bedrooms;
        self.property.bathrooms = bathrooms;
        self
    }

    pub fn cover(mut self, cover: &str, extra: &[&str]) -> Self {
        self.property.image = cover.to_owned();
        self.property.images = std::iter::once(cover)
            .chain(extra.iter().copied())
            .map(str::to_owned)
            .collect();
        self
    }

    pub fn badges(mut self, is_new: bool, is_favorite: bool) -> Self {
        self.property.is_new = Some(is_new);
        self.property.is_favorite = Some(is_favorite);
        self
    }

    pub fn build(self) -> Property {
        self.property
    }
}

/// An 18-listing fixture mirroring the shipped catalog's shape: sequential
/// string ids with villas at ids 3, 7, 11, 14, and 17.
pub fn sample_properties() -> Vec<Property> {
    (1..=18)
        .map(|number| {
            let id = number.to_string();
            let villa = matches!(number, 3 | 7 | 11 | 14 | 17);
            let kind_index = if villa { 2 } else { number % 2 };
            let kind = KINDS[kind_index];
            let cover = COVERS[kind_index];
            PropertyBuilder::new(&id)
                .title(&format!("{kind} témoin n°{number}"))
                .kind(kind)
                .location(DISTRICTS[number % DISTRICTS.len()])
                .cover(cover, &["maison-1.jpg"])
                .badges(number % 3 == 0, number % 4 == 0)
                .build()
        })
        .collect()
}

/// The same fixture as JSON, for exercising load/validate paths.
pub fn sample_catalog_json() -> Result<String> {
    serde_json::to_string_pretty(&sample_properties()).context("encode fixture catalog")
}

#[cfg(test)]
mod tests {
    use super::{PropertyBuilder, sample_catalog_json, sample_properties};

    #[test]
    fn fixture_has_eighteen_listings_with_unique_ids() {
        let properties = sample_properties();
        assert_eq!(properties.len(), 18);
        let mut ids: Vec<&str> = properties.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 18);
    }

    #[test]
    fn fixture_villas_sit_at_the_canonical_ids() {
        let properties = sample_properties();
        let villas: Vec<&str> = properties
            .iter()
            .filter(|p| p.kind == "Villa")
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(villas, vec!["3", "7", "11", "14", "17"]);
    }

    #[test]
    fn builder_keeps_gallery_cover_first() {
        let property = PropertyBuilder::new("42")
            .cover("villa-1.jpg", &["appartement-1.jpg"])
            .build();
        assert_eq!(property.images[0], property.image);
        assert_eq!(property.images.len(), 2);
    }

    #[test]
    fn fixture_json_round_trips() {
        let raw = sample_catalog_json().expect("encode fixture");
        let decoded: Vec<kylimmo_app::Property> =
            serde_json::from_str(&raw).expect("decode fixture");
        assert_eq!(decoded, sample_properties());
    }
}
