// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::Property;

/// Free-text search over the catalog. A blank query keeps everything; a
/// non-blank query keeps a listing when it is a case-insensitive substring
/// of the title, location, or kind. Order is preserved; there is no ranking.
pub fn search<'a>(properties: &'a [Property], query: &str) -> Vec<&'a Property> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return properties.iter().collect();
    }

    properties
        .iter()
        .filter(|property| matches_query(property, &needle))
        .collect()
}

fn matches_query(property: &Property, lowered_query: &str) -> bool {
    [
        property.title.as_str(),
        property.location.as_str(),
        property.kind.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(lowered_query))
}
