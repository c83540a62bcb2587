use serde::Serialize;

pub const DEFAULT_ORIGIN: &str = "Portland, Maine";

/// One outbound lane as supplied by the route dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteRecord {
    pub origin: String,
    /// "City, State".
    pub destination: String,
    /// States in travel order.
    pub states: Vec<String>,
    pub base_cost: f64,
}

impl RouteRecord {
    pub fn city(&self) -> &str {
        self.destination
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or(self.destination.as_str())
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.destination.to_lowercase().contains(&query)
    }
}

/// Splits "Maine, New Hampshire, Massachusetts" into ordered tokens.
pub fn split_state_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Finds the route whose destination matches `query`, preferring an exact
/// (case-insensitive) destination or city match over a substring match.
pub fn find_route<'a>(routes: &'a [RouteRecord], query: &str) -> Option<&'a RouteRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    routes
        .iter()
        .find(|route| {
            route.destination.to_lowercase() == needle || route.city().to_lowercase() == needle
        })
        .or_else(|| {
            routes
                .iter()
                .find(|route| route.destination.to_lowercase().contains(&needle))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(destination: &str) -> RouteRecord {
        RouteRecord {
            origin: DEFAULT_ORIGIN.to_string(),
            destination: destination.to_string(),
            states: vec!["Maine".to_string()],
            base_cost: 1000.0,
        }
    }

    #[test]
    fn splits_and_trims_state_lists() {
        assert_eq!(
            split_state_list("Maine, New Hampshire ,Massachusetts,, "),
            ["Maine", "New Hampshire", "Massachusetts"]
        );
        assert!(split_state_list("").is_empty());
    }

    #[test]
    fn city_is_the_part_before_the_comma() {
        assert_eq!(route("Columbus, Ohio").city(), "Columbus");
        assert_eq!(route("Boston").city(), "Boston");
    }

    #[test]
    fn find_prefers_exact_city_match() {
        let routes = vec![route("North Albany, Oregon"), route("Albany, New York")];
        assert_eq!(
            find_route(&routes, "albany").map(|r| r.destination.as_str()),
            Some("Albany, New York")
        );
        assert_eq!(
            find_route(&routes, "oregon").map(|r| r.destination.as_str()),
            Some("North Albany, Oregon")
        );
        assert!(find_route(&routes, "Denver").is_none());
        assert!(find_route(&routes, "  ").is_none());
    }
}
