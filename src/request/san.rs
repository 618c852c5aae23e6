/// Turns the raw alias argument into the ordered list of alternative
/// names. Splitting happens on `,` only; segments are not trimmed, and an
/// input with no comma is a single alias even if it contains spaces.
pub fn split_aliases(raw: Option<&str>) -> Vec<String> {
    match raw {
        None | Some("") => Vec::new(),
        Some(raw) => raw.split(',').map(str::to_owned).collect(),
    }
}
