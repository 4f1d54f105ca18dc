// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use kylimmo_catalog::Dataset;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;
const DEFAULT_BASE_URL: &str = "https://kylimmo.example";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub site: Site,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            catalog: CatalogSection::default(),
            ui: Ui::default(),
            site: Site::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSection {
    pub dataset: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub show_home: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            show_home: Some(true),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub base_url: Option<String>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            base_url: Some(DEFAULT_BASE_URL.to_owned()),
        }
    }
}

/// Where the main catalog comes from after config resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogChoice {
    Builtin(Dataset),
    File(PathBuf),
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("KYLIMMO_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set KYLIMMO_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(kylimmo_catalog::APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [catalog], [ui], and [site]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if self.catalog.dataset.is_some() && self.catalog.path.is_some() {
            bail!(
                "config {} sets both catalog.dataset and catalog.path; keep exactly one",
                path.display()
            );
        }

        if let Some(dataset) = &self.catalog.dataset
            && Dataset::parse(dataset).is_none()
        {
            bail!(
                "unknown catalog.dataset {:?} in {}; expected one of: {}",
                dataset,
                path.display(),
                Dataset::ALL.map(Dataset::as_str).join(", ")
            );
        }

        if let Some(catalog_path) = &self.catalog.path {
            kylimmo_catalog::validate_catalog_path(catalog_path)?;
        }

        if let Some(base_url) = &self.site.base_url
            && base_url.trim().is_empty()
        {
            bail!("site.base_url in {} must not be blank", path.display());
        }

        Ok(())
    }

    pub fn catalog_choice(&self) -> Result<CatalogChoice> {
        if let Some(path) = &self.catalog.path {
            return Ok(CatalogChoice::File(PathBuf::from(path)));
        }
        match &self.catalog.dataset {
            Some(dataset) => Dataset::parse(dataset)
                .map(CatalogChoice::Builtin)
                .ok_or_else(|| anyhow!("unknown catalog dataset {dataset:?}")),
            None => Ok(CatalogChoice::Builtin(Dataset::Abidjan)),
        }
    }

    pub fn show_home(&self) -> bool {
        self.ui.show_home.unwrap_or(true)
    }

    pub fn base_url(&self) -> &str {
        self.site
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# kylimmo config\n# Place this file at: {}\n\nversion = 1\n\n[catalog]\n# Pick one of the embedded datasets, or point at a catalog JSON file.\n# Setting both is an error.\ndataset = \"{}\"\n# path = \"/absolute/path/to/catalog.json\"\n\n[ui]\nshow_home = true\n\n[site]\nbase_url = \"{}\"\n",
            path.display(),
            Dataset::Abidjan.as_str(),
            DEFAULT_BASE_URL,
        )
    }
}
