// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::PropertyId;

/// One catalog listing. Immutable after load; `price` and `surface` are
/// pre-formatted display strings and are never parsed back into numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub price: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub surface: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    pub image: String,
    pub images: Vec<String>,
    #[serde(rename = "isNew", default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(rename = "isFavorite", default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl Property {
    pub fn badge_new(&self) -> bool {
        self.is_new.unwrap_or(false)
    }

    pub fn badge_favorite(&self) -> bool {
        self.is_favorite.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "grid" => Some(Self::Grid),
            "list" => Some(Self::List),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Property, ViewMode};

    fn sample_json() -> &'static str {
        r#"{
            "id": "1",
            "title": "Magnifique appartement avec vue panoramique",
            "price": "185 000 000 FCFA",
            "location": "Plateau, Abidjan",
            "type": "Appartement",
            "surface": "85 m²",
            "bedrooms": 3,
            "bathrooms": 2,
            "image": "appartement-1.jpg",
            "images": ["appartement-1.jpg", "maison-1.jpg", "villa-1.jpg"],
            "isNew": true,
            "isFavorite": false
        }"#
    }

    #[test]
    fn property_decodes_dataset_field_names() {
        let property: Property =
            serde_json::from_str(sample_json()).expect("decode sample listing");
        assert_eq!(property.id.as_str(), "1");
        assert_eq!(property.kind, "Appartement");
        assert_eq!(property.bedrooms, Some(3));
        assert!(property.badge_new());
        assert!(!property.badge_favorite());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let property: Property = serde_json::from_str(
            r#"{
                "id": "5",
                "title": "Terrain constructible",
                "price": "40 000 000 FCFA",
                "location": "Anyama, Abidjan",
                "type": "Terrain",
                "surface": "600 m²",
                "image": "terrain.jpg",
                "images": ["terrain.jpg"]
            }"#,
        )
        .expect("decode minimal listing");
        assert_eq!(property.bedrooms, None);
        assert_eq!(property.bathrooms, None);
        assert!(!property.badge_new());
        assert!(!property.badge_favorite());
    }

    #[test]
    fn view_mode_round_trips_and_toggles() {
        assert_eq!(ViewMode::parse("grid"), Some(ViewMode::Grid));
        assert_eq!(ViewMode::parse("list"), Some(ViewMode::List));
        assert_eq!(ViewMode::parse("table"), None);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.as_str(), "grid");
    }
}
