//! Theme catalog.
//!
//! The panel consumes the catalog once as a read-only snapshot. The
//! [`ThemeSource`] trait is the seam a remote catalog would implement;
//! the builtin source serves the bundled identifiers.

use anyhow::Result;
use async_trait::async_trait;
use phf::phf_map;

/// Ordered theme identifiers, as presented in the theme selector.
pub const THEME_IDS: [&str; 10] = [
    "github",
    "github_dark",
    "dracula",
    "nord",
    "monokai",
    "gruvbox",
    "one_dark",
    "solarized_light",
    "solarized_dark",
    "tokyo_night",
];

/// Human-readable labels for the bundled themes.
static THEME_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "github" => "GitHub Light",
    "github_dark" => "GitHub Dark",
    "dracula" => "Dracula",
    "nord" => "Nord",
    "monokai" => "Monokai",
    "gruvbox" => "Gruvbox",
    "one_dark" => "One Dark",
    "solarized_light" => "Solarized Light",
    "solarized_dark" => "Solarized Dark",
    "tokyo_night" => "Tokyo Night",
};

/// Label for a theme identifier, falling back to the identifier itself.
pub fn theme_label(id: &str) -> &str {
    THEME_LABELS.get(id).copied().unwrap_or(id)
}

/// Read-only provider of the ordered theme catalog.
#[async_trait]
pub trait ThemeSource: Send + Sync {
    async fn themes(&self) -> Result<Vec<String>>;
}

/// The bundled catalog.
pub struct BuiltinThemes;

#[async_trait]
impl ThemeSource for BuiltinThemes {
    async fn themes(&self) -> Result<Vec<String>> {
        Ok(THEME_IDS.iter().map(|s| s.to_string()).collect())
    }
}
