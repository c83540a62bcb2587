//! Representative coordinates (state capitals) for the contiguous route states.

use std::{collections::HashMap, sync::OnceLock};

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StateCoordinate {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn state(name: &'static str, latitude: f64, longitude: f64) -> StateCoordinate {
    StateCoordinate {
        name,
        latitude,
        longitude,
    }
}

static STATE_COORDINATES: [StateCoordinate; 50] = [
    state("Alabama", 32.3770, -86.3000),
    state("Alaska", 58.3019, -134.4197),
    state("Arizona", 33.4484, -112.0740),
    state("Arkansas", 34.7465, -92.2896),
    state("California", 38.5767, -121.4936),
    state("Colorado", 39.7392, -104.9903),
    state("Connecticut", 41.7658, -72.6734),
    state("Delaware", 39.1582, -75.5244),
    state("Florida", 30.4383, -84.2807),
    state("Georgia", 33.7490, -84.3880),
    state("Hawaii", 21.3070, -157.8584),
    state("Idaho", 43.6150, -116.2023),
    state("Illinois", 39.7980, -89.6440),
    state("Indiana", 39.7684, -86.1581),
    state("Iowa", 41.5868, -93.6250),
    state("Kansas", 39.0473, -95.6752),
    state("Kentucky", 38.1867, -84.8753),
    state("Louisiana", 30.4571, -91.1874),
    state("Maine", 44.3106, -69.7795),
    state("Maryland", 38.9784, -76.4922),
    state("Massachusetts", 42.3601, -71.0589),
    state("Michigan", 42.7337, -84.5555),
    state("Minnesota", 44.9537, -93.0900),
    state("Mississippi", 32.2988, -90.1848),
    state("Missouri", 38.5767, -92.1735),
    state("Montana", 46.5891, -112.0391),
    state("Nebraska", 40.8136, -96.7026),
    state("Nevada", 39.1638, -119.7674),
    state("New Hampshire", 43.1939, -71.5724),
    state("New Jersey", 40.2206, -74.7597),
    state("New Mexico", 35.6868, -105.9378),
    state("New York", 42.6526, -73.7562),
    state("North Carolina", 35.7796, -78.6382),
    state("North Dakota", 46.8083, -100.7837),
    state("Ohio", 39.9612, -82.9988),
    state("Oklahoma", 35.4676, -97.5164),
    state("Oregon", 44.9429, -123.0351),
    state("Pennsylvania", 40.2732, -76.8867),
    state("Rhode Island", 41.8309, -71.4146),
    state("South Carolina", 34.0007, -81.0348),
    state("South Dakota", 44.3670, -100.3364),
    state("Tennessee", 36.1627, -86.7816),
    state("Texas", 30.2672, -97.7431),
    state("Utah", 40.7608, -111.8910),
    state("Vermont", 44.2601, -72.5754),
    state("Virginia", 37.5407, -77.4360),
    state("Washington", 47.0379, -122.9007),
    state("West Virginia", 38.3364, -81.6123),
    state("Wisconsin", 43.0747, -89.3844),
    state("Wyoming", 41.1400, -104.8202),
];

static INDEX: OnceLock<HashMap<&'static str, StateCoordinate>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, StateCoordinate> {
    INDEX.get_or_init(|| {
        STATE_COORDINATES
            .iter()
            .map(|coord| (coord.name, *coord))
            .collect()
    })
}

/// Exact, case-sensitive lookup. Unknown names yield `None`.
pub fn lookup(name: &str) -> Option<StateCoordinate> {
    index().get(name).copied()
}

pub fn all() -> &'static [StateCoordinate] {
    &STATE_COORDINATES
}
