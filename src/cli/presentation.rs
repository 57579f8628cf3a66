//! CLI presentation: formatting of generated output.

/// Format a generated digit map for printing.
///
/// Grandstream devices expect the map wrapped in braces.
pub fn format_digitmap(map: &str, braces: bool) -> String {
    if braces {
        format!("{{{}}}", map)
    } else {
        map.to_string()
    }
}
