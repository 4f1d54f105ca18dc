// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::PropertyId;

/// Application routes. `parse` is total: anything it does not recognize is
/// the catch-all `NotFound`, which renders a dedicated screen rather than
/// failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Properties,
    PropertyDetail(PropertyId),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(trimmed);
        match normalized {
            "/" | "" => Self::Home,
            "/biens" => Self::Properties,
            _ => match normalized.strip_prefix("/biens/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Self::PropertyDetail(PropertyId::from(id))
                }
                _ => Self::NotFound,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Properties => "/biens".to_owned(),
            Self::PropertyDetail(id) => format!("/biens/{id}"),
            Self::NotFound => "/404".to_owned(),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "accueil",
            Self::Properties => "biens",
            Self::PropertyDetail(_) => "détail du bien",
            Self::NotFound => "introuvable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use crate::ids::PropertyId;

    #[test]
    fn root_paths_map_to_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn listing_and_detail_paths_parse() {
        assert_eq!(Route::parse("/biens"), Route::Properties);
        assert_eq!(Route::parse("/biens/"), Route::Properties);
        assert_eq!(
            Route::parse("/biens/7"),
            Route::PropertyDetail(PropertyId::from("7"))
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::parse("/contact"), Route::NotFound);
        assert_eq!(Route::parse("/biens/7/photos"), Route::NotFound);
        assert_eq!(Route::parse("biens"), Route::NotFound);
    }

    #[test]
    fn detail_path_round_trips() {
        let route = Route::PropertyDetail(PropertyId::from("12"));
        assert_eq!(Route::parse(&route.path()), route);
    }
}
