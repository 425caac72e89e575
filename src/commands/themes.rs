//! List the theme catalog.

use anyhow::Result;

use crate::themes::{theme_label, ThemeSource};

pub async fn run(source: &dyn ThemeSource) -> Result<()> {
    let themes = source.themes().await?;
    for id in &themes {
        println!("{:<18} {}", id, theme_label(id));
    }
    Ok(())
}
