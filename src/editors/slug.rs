//! URL slugs for blog posts.

/// Symbols spelled out as words before punctuation is stripped.
fn symbol_word(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("and"),
        '$' => Some("dollar"),
        '%' => Some("percent"),
        '<' => Some("less"),
        '>' => Some("greater"),
        '|' => Some("or"),
        _ => None,
    }
}

/// Lowercase, hyphen-joined, punctuation-stripped form of `title`.
///
/// Non-ASCII letters are transliterated first, so `Café Crème` becomes
/// `cafe-creme`. Whitespace and hyphens separate words; any other
/// punctuation is dropped in place (`Lover's` becomes `lovers`).
pub fn slugify(title: &str) -> String {
    let mut expanded = String::with_capacity(title.len());
    for ch in title.chars() {
        if let Some(word) = symbol_word(ch) {
            expanded.push_str(word);
        } else if ch == '-' || ch.is_whitespace() {
            expanded.push(' ');
        } else if ch.is_ascii() {
            expanded.push(ch);
        } else if let Some(ascii) = deunicode::deunicode_char(ch) {
            expanded.push_str(ascii);
        }
    }

    expanded
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphanumeric)
                .map(|c| c.to_ascii_lowercase())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(
            slugify("A Culinary Journey Through Italy: A Food Lover's Guide"),
            "a-culinary-journey-through-italy-a-food-lovers-guide"
        );
    }

    #[test]
    fn test_slugify_symbols_and_separators() {
        assert_eq!(slugify("Rock & Roll"), "rock-and-roll");
        assert_eq!(slugify("  Self-Guided   Tours_2024 "), "self-guided-tours2024");
        assert_eq!(slugify("?!"), "");
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Café Crème"), "cafe-creme");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let once = slugify("Discovering Hidden Gems in Southeast Asia");
        assert_eq!(once, "discovering-hidden-gems-in-southeast-asia");
        assert_eq!(slugify(&once), once);
    }
}
