// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// The filter panel's fixed field set. Values are plain strings; numeric
/// fields are not parsed or range-checked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FilterField {
    Location,
    Transaction,
    PropertyType,
    MinPrice,
    MaxPrice,
    MinSurface,
    MaxSurface,
    Rooms,
    Bedrooms,
    Bathrooms,
    Parking,
}

impl FilterField {
    pub const ALL: [Self; 11] = [
        Self::Location,
        Self::Transaction,
        Self::PropertyType,
        Self::MinPrice,
        Self::MaxPrice,
        Self::MinSurface,
        Self::MaxSurface,
        Self::Rooms,
        Self::Bedrooms,
        Self::Bathrooms,
        Self::Parking,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Location => "localisation",
            Self::Transaction => "transaction",
            Self::PropertyType => "type de bien",
            Self::MinPrice => "prix min",
            Self::MaxPrice => "prix max",
            Self::MinSurface => "surface min",
            Self::MaxSurface => "surface max",
            Self::Rooms => "pièces",
            Self::Bedrooms => "chambres",
            Self::Bathrooms => "salles de bain",
            Self::Parking => "parking",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Filter panel values. Empty string means unset; every edit overwrites the
/// previous value. Created on panel open, discarded on close; nothing is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPanel {
    values: [String; FilterField::ALL.len()],
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FilterField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Number of fields with a non-blank value; shown as the badge count.
    pub fn active_count(&self) -> usize {
        self.values
            .iter()
            .filter(|value| !value.trim().is_empty())
            .count()
    }

    /// Clears every field back to empty.
    pub fn reset(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }
}
