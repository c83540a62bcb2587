//! Dry or reefer: truck recommendations from forecast temperatures along an
//! outbound route.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infra;
pub mod util;

#[cfg(feature = "desktop")]
pub mod app;
#[cfg(feature = "desktop")]
pub mod ui;
