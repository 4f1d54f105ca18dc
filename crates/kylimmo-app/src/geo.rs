// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Fixed zoom level for the detail-page map.
pub const MAP_ZOOM: u8 = 13;

/// Hand-maintained coordinates for the cities the catalog covers. Demo-grade
/// geocoding: substring match against the listing's free-text location.
const CITY_COORDINATES: [(&str, GeoPoint); 7] = [
    ("Abidjan", GeoPoint { lat: 5.3600, lng: -4.0083 }),
    ("Plateau", GeoPoint { lat: 5.3364, lng: -4.0267 }),
    ("Cocody", GeoPoint { lat: 5.3447, lng: -3.9832 }),
    ("Marcory", GeoPoint { lat: 5.2833, lng: -3.9833 }),
    ("Grand-Bassam", GeoPoint { lat: 5.2111, lng: -3.7389 }),
    ("Bouaké", GeoPoint { lat: 7.6942, lng: -5.0300 }),
    ("Yamoussoukro", GeoPoint { lat: 6.8276, lng: -5.2893 }),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Resolves a free-text location to a known city point, first table match
/// wins; unknown locations fall back to Abidjan.
pub fn locate(location: &str) -> GeoPoint {
    let lowered = location.to_lowercase();
    for (city, point) in CITY_COORDINATES {
        if lowered.contains(&city.to_lowercase()) {
            return point;
        }
    }
    CITY_COORDINATES[0].1
}
