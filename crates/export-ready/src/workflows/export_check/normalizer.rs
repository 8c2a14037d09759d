/// Canonical lookup key for a destination name: lower-cased, trimmed, with
/// periods and commas removed and whitespace runs collapsed.
pub fn normalize_country(raw: &str) -> String {
    let cleaned = raw.replace(['.', ','], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}
