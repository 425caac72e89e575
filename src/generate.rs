//! Shareable-link generation.
//!
//! Encodes the full parameter tuple into a query string over the badge
//! service base URL. The encoding is the wire contract with the rendering
//! service: keep parameter names and the line syntax stable.

use crate::options::{Align, FontWeight, Line};

/// Badge service endpoint used when the config file does not override it.
pub const DEFAULT_BASE_URL: &str = "https://stackbadge.dev/api/badge";

/// Build the shareable link from the full parameter tuple against the
/// default base URL.
#[allow(clippy::too_many_arguments)]
pub fn generate_link(
    title: &str,
    line_count: &str,
    theme: &str,
    align: Align,
    lines: &[Line],
    show_border: bool,
    border_radius: &str,
    font_weight: FontWeight,
    font_size: &str,
) -> String {
    generate_link_with_base(
        DEFAULT_BASE_URL,
        title,
        line_count,
        theme,
        align,
        lines,
        show_border,
        border_radius,
        font_weight,
        font_size,
    )
}

/// Same as [`generate_link`] with an explicit base URL.
#[allow(clippy::too_many_arguments)]
pub fn generate_link_with_base(
    base_url: &str,
    title: &str,
    line_count: &str,
    theme: &str,
    align: Align,
    lines: &[Line],
    show_border: bool,
    border_radius: &str,
    font_weight: FontWeight,
    font_size: &str,
) -> String {
    format!(
        "{}?title={}&lineCount={}&theme={}&align={}&lines={}&showBorder={}&borderRadius={}&fontWeight={}&fontSize={}",
        base_url,
        urlencoding::encode(title),
        urlencoding::encode(line_count),
        urlencoding::encode(theme),
        align,
        encode_lines(lines),
        show_border,
        urlencoding::encode(border_radius),
        font_weight,
        urlencoding::encode(font_size),
    )
}

/// Encode the line list as `number:badge,badge;number:badge`.
///
/// Badge identifiers are percent-encoded individually so the `:`/`,`/`;`
/// separators stay unambiguous.
fn encode_lines(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| {
            let badges = line
                .badges
                .iter()
                .map(|b| urlencoding::encode(&b.id).into_owned())
                .collect::<Vec<_>>()
                .join(",");
            format!("{}:{}", line.line_number, badges)
        })
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Badge;

    fn line(n: &str, badges: &[&str]) -> Line {
        Line {
            line_number: n.to_string(),
            badges: badges.iter().map(|b| Badge::new(*b)).collect(),
        }
    }

    #[test]
    fn test_generate_link_encodes_all_parameters() {
        let lines = vec![line("1", &["rust", "react"])];
        let link = generate_link(
            "My Tech Stack",
            "1",
            "github",
            Align::Left,
            &lines,
            true,
            "4.5",
            FontWeight::Semibold,
            "18",
        );

        assert!(link.starts_with(DEFAULT_BASE_URL));
        assert!(link.contains("title=My%20Tech%20Stack"));
        assert!(link.contains("lineCount=1"));
        assert!(link.contains("theme=github"));
        assert!(link.contains("align=left"));
        assert!(link.contains("lines=1:rust,react"));
        assert!(link.contains("showBorder=true"));
        assert!(link.contains("borderRadius=4.5"));
        assert!(link.contains("fontWeight=semibold"));
        assert!(link.contains("fontSize=18"));
    }

    #[test]
    fn test_generate_link_is_deterministic() {
        let lines = vec![line("1", &[])];
        let a = generate_link("t", "1", "github", Align::Center, &lines, false, "0", FontWeight::Thin, "15");
        let b = generate_link("t", "1", "github", Align::Center, &lines, false, "0", FontWeight::Thin, "15");
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_lines_multiple_lines() {
        let lines = vec![line("1", &["rust"]), line("2", &["go", "zig"])];
        assert_eq!(encode_lines(&lines), "1:rust;2:go,zig");
    }

    #[test]
    fn test_encode_lines_escapes_separators_in_badge_ids() {
        let lines = vec![line("1", &["c++", "a;b"])];
        let encoded = encode_lines(&lines);
        assert_eq!(encoded, "1:c%2B%2B,a%3Bb");
    }

    #[test]
    fn test_custom_base_url() {
        let link = generate_link_with_base(
            "http://localhost:3000/badge",
            "t",
            "1",
            "github",
            Align::Left,
            &[],
            true,
            "4.5",
            FontWeight::Semibold,
            "18",
        );
        assert!(link.starts_with("http://localhost:3000/badge?"));
    }
}
