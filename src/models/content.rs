//! Site content model. Field names serialize in camelCase so the persisted
//! document keeps the same shape as the browser-stored record.

use serde::{Deserialize, Serialize};

/// A navigation link in the header or footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub name: String,
    pub path: String,
}

/// Landing page hero copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub search_placeholder: String,
}

/// A destination highlighted on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedDestination {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image: String,
    pub description: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyChooseUsItem {
    /// Icon glyph, usually an emoji.
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub quote: String,
    pub author: String,
    pub location: String,
    pub avatar: String,
}

/// Call-to-action banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    pub background_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub company_history: String,
    pub mission: String,
    pub vision: String,
    pub team_members: Vec<TeamMember>,
}

/// A bookable destination in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub country: String,
    pub city: String,
    pub image: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// A blog post. `slug` is derived from `title` by the blog editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub author: String,
    /// ISO calendar date (`YYYY-MM-DD`), parsed only when rendered.
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    pub excerpt: String,
    /// HTML markup.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub map_embed_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

impl SocialMedia {
    /// Configured links as `(network, url)` pairs, skipping empty ones.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", &self.facebook),
            ("Instagram", &self.instagram),
            ("Twitter", &self.twitter),
            ("YouTube", &self.youtube),
        ]
        .into_iter()
        .filter_map(|(name, url)| {
            url.as_deref()
                .filter(|url| !url.trim().is_empty())
                .map(|url| (name, url))
        })
        .collect()
    }
}

/// The root content record edited by the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub header_links: Vec<NavLink>,
    pub footer_links: Vec<NavLink>,
    pub hero: HeroSection,
    pub featured_destinations: Vec<FeaturedDestination>,
    pub why_choose_us: Vec<WhyChooseUsItem>,
    pub testimonials: Vec<Testimonial>,
    pub cta: CallToAction,
    pub about: AboutContent,
    pub destinations: Vec<Destination>,
    pub services: Vec<Service>,
    pub blog_posts: Vec<BlogPost>,
    pub contact: ContactInfo,
    pub footer_description: String,
    #[serde(default)]
    pub social_media: SocialMedia,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_site_content;

    #[test]
    fn test_serializes_camel_case_keys() {
        let value = serde_json::to_value(default_site_content()).unwrap();
        assert!(value["headerLinks"].is_array());
        assert!(value["blogPosts"][0]["slug"].is_string());
        assert!(value["about"]["teamMembers"].is_array());
        assert!(value["contact"]["mapEmbedUrl"].is_string());
        assert!(value["socialMedia"]["facebook"].is_string());
    }

    #[test]
    fn test_social_links_skip_empty() {
        let social = SocialMedia {
            facebook: Some("https://facebook.com/x".to_string()),
            instagram: Some("  ".to_string()),
            twitter: None,
            youtube: Some("https://youtube.com/x".to_string()),
        };
        assert_eq!(
            social.links(),
            vec![
                ("Facebook", "https://facebook.com/x"),
                ("YouTube", "https://youtube.com/x")
            ]
        );
    }
}
