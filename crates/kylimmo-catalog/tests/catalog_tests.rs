// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use kylimmo_app::search;
use kylimmo_catalog::{Catalog, Dataset, validate_catalog_path};
use kylimmo_testkit::{PropertyBuilder, sample_catalog_json};

#[test]
fn validate_catalog_path_rejects_uri_forms() {
    assert!(validate_catalog_path("file:catalog.json").is_err());
    assert!(validate_catalog_path("https://example.com/catalog.json").is_err());
    assert!(validate_catalog_path("catalog.json?mode=ro").is_err());
    assert!(validate_catalog_path("/tmp/catalog.json").is_ok());
}

#[test]
fn builtin_abidjan_matches_the_published_shape() -> Result<()> {
    let catalog = Catalog::builtin(Dataset::Abidjan)?;
    assert_eq!(catalog.len(), 18);

    let villas: Vec<&str> = catalog
        .properties()
        .iter()
        .filter(|p| p.kind == "Villa")
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(villas, vec!["3", "7", "11", "14", "17"]);

    for property in catalog.properties() {
        assert!(!property.images.is_empty());
        assert_eq!(property.images[0], property.image);
    }
    Ok(())
}

#[test]
fn builtin_vitrine_is_the_eur_variant() -> Result<()> {
    let catalog = Catalog::builtin(Dataset::Vitrine)?;
    assert_eq!(catalog.len(), 3);
    assert!(
        catalog
            .properties()
            .iter()
            .all(|p| p.price.contains('€')),
        "vitrine prices are EUR-framed"
    );
    Ok(())
}

#[test]
fn villa_query_over_abidjan_returns_exactly_the_villas() -> Result<()> {
    let catalog = Catalog::builtin(Dataset::Abidjan)?;
    let hits = search(catalog.properties(), "Villa");
    let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "7", "11", "14", "17"]);
    assert!(hits.iter().all(|p| p.kind == "Villa"));
    Ok(())
}

#[test]
fn unknown_id_misses_on_every_dataset_variant() -> Result<()> {
    for dataset in Dataset::ALL {
        let catalog = Catalog::builtin(dataset)?;
        assert!(catalog.get("999").is_none());
    }
    Ok(())
}

#[test]
fn fixture_catalog_loads_through_the_json_path() -> Result<()> {
    let raw = sample_catalog_json()?;
    let catalog = Catalog::from_json(&raw)?;
    assert_eq!(catalog.len(), 18);
    assert!(catalog.get("7").is_some());
    Ok(())
}

#[test]
fn catalog_loads_from_an_operator_file() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("catalog.json");
    std::fs::write(&path, sample_catalog_json()?)?;

    let catalog = Catalog::from_path(&path)?;
    assert_eq!(catalog.len(), 18);
    Ok(())
}

#[test]
fn missing_catalog_file_names_the_path() {
    let error = Catalog::from_path(std::path::Path::new("/nonexistent/catalog.json"))
        .expect_err("missing file should fail");
    assert!(format!("{error:#}").contains("/nonexistent/catalog.json"));
}

#[test]
fn duplicate_ids_fail_validation_with_the_id_named() -> Result<()> {
    let duplicated = vec![
        PropertyBuilder::new("7").build(),
        PropertyBuilder::new("7").build(),
    ];
    let raw = serde_json::to_string(&duplicated)?;
    let error = Catalog::from_json(&raw).expect_err("duplicate ids should fail");
    assert!(format!("{error:#}").contains("duplicate listing id"));
    Ok(())
}

#[test]
fn gallery_missing_its_cover_fails_validation() -> Result<()> {
    let bad = vec![
        PropertyBuilder::new("1")
            .cover("villa-1.jpg", &[])
            .build(),
    ];
    let mut value = serde_json::to_value(&bad)?;
    value[0]["images"] = serde_json::json!(["maison-1.jpg"]);
    let error =
        Catalog::from_json(&value.to_string()).expect_err("cover mismatch should fail");
    assert!(format!("{error:#}").contains("does not start with its cover image"));
    Ok(())
}
