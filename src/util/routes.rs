//! Loads the outbound route dataset: the bundled `assets/routes.json`, or a
//! JSON file named by the `routes_file` setting.

use std::{fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::domain::{split_state_list, RouteRecord};

use super::assets;

#[derive(Debug, Error)]
pub enum RouteDataError {
    #[error("bundled route dataset {0} is missing")]
    MissingAsset(&'static str),
    #[error("failed to read route dataset: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse route dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("route dataset contains no destinations")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct RouteRowDto {
    #[serde(alias = "Dropoff Location")]
    dropoff_location: String,
    #[serde(alias = "States Along Route", default)]
    states_along_route: String,
    #[serde(alias = "Base Cost", default)]
    base_cost: f64,
}

impl RouteRowDto {
    fn into_record(self, origin: &str) -> Option<RouteRecord> {
        let destination = self.dropoff_location.trim();
        if destination.is_empty() {
            return None;
        }
        Some(RouteRecord {
            origin: origin.to_string(),
            destination: destination.to_string(),
            states: split_state_list(&self.states_along_route),
            base_cost: if self.base_cost.is_finite() {
                self.base_cost
            } else {
                0.0
            },
        })
    }
}

pub fn load_routes(config: &Config) -> Result<Vec<RouteRecord>, RouteDataError> {
    match &config.routes_file {
        Some(path) => load_routes_from(path, &config.origin_label),
        None => {
            let raw = assets::routes_json().ok_or(RouteDataError::MissingAsset(assets::ROUTES_ASSET))?;
            let routes = parse_routes(raw, &config.origin_label)?;
            tracing::info!(routes = routes.len(), "loaded bundled route dataset");
            Ok(routes)
        }
    }
}

pub fn load_routes_from(path: &Path, origin: &str) -> Result<Vec<RouteRecord>, RouteDataError> {
    let raw = fs::read_to_string(path)?;
    let routes = parse_routes(&raw, origin)?;
    tracing::info!(routes = routes.len(), path = %path.display(), "loaded route dataset");
    Ok(routes)
}

/// Parses the dataset, dropping rows without a destination and keeping the
/// first row per destination. Routes come back sorted by destination.
pub fn parse_routes(raw: &str, origin: &str) -> Result<Vec<RouteRecord>, RouteDataError> {
    let rows: Vec<RouteRowDto> = serde_json::from_str(raw)?;
    let mut routes: Vec<RouteRecord> = Vec::with_capacity(rows.len());

    for record in rows.into_iter().filter_map(|row| row.into_record(origin)) {
        if routes.iter().any(|known| known.destination == record.destination) {
            tracing::warn!(destination = %record.destination, "duplicate destination ignored");
            continue;
        }
        if record.states.is_empty() {
            tracing::warn!(destination = %record.destination, "route lists no states");
        }
        routes.push(record);
    }

    if routes.is_empty() {
        return Err(RouteDataError::Empty);
    }
    routes.sort_by(|a, b| a.destination.cmp(&b.destination));
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::domain::DEFAULT_ORIGIN;

    #[test]
    fn parses_rows_into_ordered_state_lists() {
        let raw = r#"[
            { "dropoff_location": "Columbus, Ohio", "states_along_route": "Maine, New Hampshire , Massachusetts, New York, Pennsylvania, Ohio", "base_cost": 2240.0 },
            { "dropoff_location": "Boston, Massachusetts", "states_along_route": "Maine,New Hampshire,Massachusetts", "base_cost": 650 }
        ]"#;

        let routes = parse_routes(raw, DEFAULT_ORIGIN).unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].destination, "Boston, Massachusetts");
        assert_eq!(routes[0].states, ["Maine", "New Hampshire", "Massachusetts"]);
        assert_eq!(routes[1].states[1], "New Hampshire");
        assert_eq!(routes[1].states.len(), 6);
        assert_eq!(routes[1].origin, "Portland, Maine");
        assert_eq!(routes[1].base_cost, 2240.0);
    }

    #[test]
    fn accepts_spreadsheet_style_headers() {
        let raw = r#"[{ "Dropoff Location": "Albany, New York", "States Along Route": "Maine, New York", "Base Cost": 1050.5 }]"#;
        let routes = parse_routes(raw, "Bangor, Maine").unwrap();
        assert_eq!(routes[0].destination, "Albany, New York");
        assert_eq!(routes[0].origin, "Bangor, Maine");
        assert_eq!(routes[0].base_cost, 1050.5);
    }

    #[test]
    fn blank_and_duplicate_destinations_are_dropped() {
        let raw = r#"[
            { "dropoff_location": "  ", "states_along_route": "Maine" },
            { "dropoff_location": "Albany, New York", "states_along_route": "Maine", "base_cost": 1.0 },
            { "dropoff_location": "Albany, New York", "states_along_route": "Ohio", "base_cost": 2.0 }
        ]"#;
        let routes = parse_routes(raw, DEFAULT_ORIGIN).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].states, ["Maine"]);
    }

    #[test]
    fn empty_or_malformed_datasets_fail() {
        assert!(matches!(parse_routes("[]", DEFAULT_ORIGIN), Err(RouteDataError::Empty)));
        assert!(matches!(
            parse_routes("{ not json", DEFAULT_ORIGIN),
            Err(RouteDataError::Parse(_))
        ));
    }

    #[test]
    fn bundled_dataset_loads() {
        let routes = load_routes(&Config::new()).unwrap();
        assert!(routes.len() >= 10);
        assert!(routes.iter().all(|route| route.states.first().map(String::as_str) == Some("Maine")));
    }

    #[test]
    fn routes_file_overrides_the_bundle() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "dropoff_location": "Concord, New Hampshire", "states_along_route": "Maine, New Hampshire", "base_cost": 300 }}]"#
        )
        .unwrap();

        let config = Config {
            routes_file: Some(file.path().to_path_buf()),
            ..Config::new()
        };
        let routes = load_routes(&config).unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].city(), "Concord");
    }

    #[test]
    fn missing_routes_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Config {
            routes_file: Some(dir.path().join("missing.json")),
            ..Config::new()
        };
        assert!(matches!(load_routes(&missing), Err(RouteDataError::Io(_))));
    }
}
