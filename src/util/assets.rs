use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

pub const ROUTES_ASSET: &str = "routes.json";

#[cfg(feature = "desktop")]
static MAIN_CSS: OnceLock<String> = OnceLock::new();
static ROUTES_JSON: OnceLock<Option<String>> = OnceLock::new();

/// Returns the contents of `assets/main.css`, or an empty stylesheet when the
/// asset is missing.
#[cfg(feature = "desktop")]
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css").unwrap_or_default())
        .as_str()
}

/// The bundled route dataset, if it was embedded.
pub fn routes_json() -> Option<&'static str> {
    ROUTES_JSON
        .get_or_init(|| load_text(ROUTES_ASSET))
        .as_deref()
}

fn load_text(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    match String::from_utf8(asset.into_owned()) {
        Ok(text) => Some(text),
        Err(_) => {
            tracing::error!(path, "embedded asset is not valid UTF-8");
            None
        }
    }
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let canonical = canonical_asset_path(path);
    let asset = EmbeddedAssets::get(&canonical).map(|file| file.data);
    if asset.is_none() {
        tracing::error!(path, "failed to locate embedded asset");
    }
    asset
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_are_relative_to_the_folder() {
        assert_eq!(canonical_asset_path("/assets/main.css"), "main.css");
        assert_eq!(canonical_asset_path("routes.json"), "routes.json");
    }

    #[test]
    fn route_dataset_is_bundled() {
        let raw = routes_json().unwrap();
        assert!(raw.trim_start().starts_with('['));
    }
}
