//! URL-safe slug derivation from product titles.

/// Derives a URL-safe slug from a human-readable title.
///
/// The title is lowercased, each whitespace run collapses to a single hyphen,
/// and every remaining character that is not an ASCII word character or a
/// hyphen is stripped. Hyphens already present in the title survive, so
/// "Sony WH-1000XM5" becomes "sony-wh-1000xm5".
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            slug.push(ch);
        }
    }

    slug
}
