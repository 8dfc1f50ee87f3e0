/// Parse a semicolon-separated tag list, filtering empty segments
///
/// Both the CSV `tags` column and the bookmarks-HTML `TAGS` attribute use
/// `;` as the separator in this catalog's exchange formats.
pub fn parse_tags(tags_str: &str) -> Vec<String> {
    tags_str
        .split(';')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Join tags back into the semicolon-separated exchange form
pub fn join_tags(tags: &[String]) -> String {
    tags.join(";")
}
