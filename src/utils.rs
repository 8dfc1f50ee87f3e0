/// Lowercase slug of an application name, used as the export filename prefix
///
/// Alphanumeric characters are kept (lowercased); every other run of
/// characters collapses into a single `-`. Leading and trailing separators
/// are dropped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    slug
}
