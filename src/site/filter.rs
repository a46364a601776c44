//! Pure filtering over the in-memory catalogs.

use crate::models::{BlogPost, Destination};

/// Filter value that disables the category or tag filter.
pub const ALL: &str = "All";

fn is_all(filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(value) => value.is_empty() || value == ALL,
    }
}

/// Destinations whose city, country or description contains `search`
/// (case-insensitive, whitespace kept) and whose category equals `category`.
pub fn filter_destinations<'a>(
    destinations: &'a [Destination],
    search: &str,
    category: Option<&str>,
) -> Vec<&'a Destination> {
    let needle = search.to_lowercase();
    destinations
        .iter()
        .filter(|d| {
            needle.is_empty()
                || d.city.to_lowercase().contains(&needle)
                || d.country.to_lowercase().contains(&needle)
                || d.description.to_lowercase().contains(&needle)
        })
        .filter(|d| is_all(category) || Some(d.category.as_str()) == category)
        .collect()
}

/// `All` followed by each distinct category in first-seen order.
pub fn destination_categories(destinations: &[Destination]) -> Vec<String> {
    distinct(destinations.iter().map(|d| d.category.as_str()))
}

/// Posts whose title, excerpt or author contains `search` (case-insensitive)
/// and that carry `tag`.
pub fn filter_posts<'a>(posts: &'a [BlogPost], search: &str, tag: Option<&str>) -> Vec<&'a BlogPost> {
    let needle = search.to_lowercase();
    posts
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.excerpt.to_lowercase().contains(&needle)
                || p.author.to_lowercase().contains(&needle)
        })
        .filter(|p| match tag {
            Some(tag) if !is_all(Some(tag)) => p.tags.iter().any(|t| t == tag),
            _ => true,
        })
        .collect()
}

/// `All` followed by each distinct tag in first-seen order.
pub fn post_tags(posts: &[BlogPost]) -> Vec<String> {
    distinct(posts.iter().flat_map(|p| p.tags.iter().map(String::as_str)))
}

pub fn find_post_by_slug<'a>(posts: &'a [BlogPost], slug: &str) -> Option<&'a BlogPost> {
    posts.iter().find(|p| p.slug == slug)
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for value in values {
        if !out.iter().any(|seen| seen == value) {
            out.push(value.to_string());
        }
    }
    out
}
