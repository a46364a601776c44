//! Server-rendered pages.
//!
//! Every renderer is a pure function of the snapshot it is handed; nothing
//! here reads the store directly.

use chrono::NaiveDate;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::contact::{ContactForm, ContactFormErrors};
use super::filter::{self, ALL};
use super::newsletter::NewsletterStatus;
use super::theme::theme_css;
use crate::models::{AdminSettings, BlogPost, Destination, PaletteColor, SiteContent};
use crate::store::RootClass;

const SITE_NAME: &str = "WorldClass Travel Agency";

/// Everything a page needs to render.
pub struct Page<'a> {
    pub content: &'a SiteContent,
    pub settings: &'a AdminSettings,
    pub root: RootClass,
    /// Request path, used to mark the active link and to return after
    /// toggling dark mode.
    pub path: &'a str,
    pub newsletter: NewsletterStatus,
}

#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub search: String,
    pub category: Option<String>,
    pub tag: Option<String>,
}

/// `2023-04-15` as `April 15, 2023`; unparsable dates are shown as stored.
pub fn long_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// `1234567` as `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn layout(page: &Page, title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class=[page.root.css_class()] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
                style { (PreEscaped(theme_css(&page.settings.theme))) }
            }
            body {
                (header(page))
                main { (body) }
                (footer(page))
            }
        }
    }
}

fn header(page: &Page) -> Markup {
    let dark = page.root == RootClass::Dark;
    html! {
        header.site-header {
            a.brand.primary-text href="/" { "WorldClass" }
            nav {
                @for link in &page.content.header_links {
                    a.active[link.path == page.path] href=(link.path) { (link.name) }
                }
            }
            form.dark-mode-toggle method="post" action="/settings/dark-mode" {
                input type="hidden" name="redirect" value=(page.path);
                button type="submit" aria-label="Toggle dark mode" {
                    @if dark { "☀️ Light mode" } @else { "🌙 Dark mode" }
                }
            }
        }
    }
}

fn footer(page: &Page) -> Markup {
    let content = page.content;
    html! {
        footer.site-footer {
            p { (content.footer_description) }
            nav {
                @for link in &content.footer_links {
                    a href=(link.path) { (link.name) }
                }
            }
            ul.social {
                @for (network, url) in content.social_media.links() {
                    li { a href=(url) rel="noopener" target="_blank" { (network) } }
                }
            }
            address {
                (content.contact.address) br;
                (content.contact.phone) br;
                a href={ "mailto:" (content.contact.email) } { (content.contact.email) }
            }
            (newsletter_signup(page))
        }
    }
}

fn newsletter_signup(page: &Page) -> Markup {
    html! {
        section.newsletter {
            h3 { "Newsletter" }
            p { "Stay updated with our latest offers and travel tips!" }
            @if page.newsletter == NewsletterStatus::Subscribed {
                p.success-text { "Thank you for subscribing!" }
            } @else {
                form method="post" action="/newsletter" {
                    input type="hidden" name="redirect" value=(page.path);
                    input id="newsletter-email" type="email" name="email"
                        placeholder="Your email address" required;
                    @if let NewsletterStatus::Rejected(error) = page.newsletter {
                        p.error-text { (error) }
                    }
                    button.primary-bg.primary-hover-bg type="submit" { "Subscribe" }
                }
            }
        }
    }
}

fn tag_link(tag: &str) -> String {
    format!("/blog?tag={}", urlencoding::encode(tag))
}

fn destination_card(destination: &Destination) -> Markup {
    html! {
        article.card.destination {
            img src=(destination.image) alt=(destination.city) loading="lazy";
            h3 { (destination.city) ", " (destination.country) }
            p.category.accent-text { (destination.category) }
            p { (destination.description) }
            p.price.primary-text { "From " (destination.price) }
            a.button.primary-bg.primary-hover-bg href={ "/destinations/" (destination.id) "/book" } {
                "Book Now"
            }
        }
    }
}

fn blog_card(post: &BlogPost) -> Markup {
    html! {
        article.card.blog-post {
            img src=(post.image) alt=(post.title) loading="lazy";
            h3 { a href={ "/blog/" (post.slug) } { (post.title) } }
            p.meta { "By " span.primary-text { (post.author) } " on " (long_date(&post.date)) }
            p { (post.excerpt) }
            ul.tags {
                @for tag in &post.tags {
                    li { a href=(tag_link(tag)) { (tag) } }
                }
            }
        }
    }
}

fn select_filter(name: &str, label: &str, options: &[String], selected: Option<&str>) -> Markup {
    let selected = selected.unwrap_or(ALL);
    html! {
        label for=(name) { (label) }
        select id=(name) name=(name) {
            @for option in options {
                option value=(option) selected[option == selected] { (option) }
            }
        }
    }
}

pub fn home(page: &Page) -> Markup {
    let content = page.content;
    let hero = &content.hero;
    let cta = &content.cta;
    let body = html! {
        section.hero style={ "background-image: url('" (hero.background_image) "')" } {
            h1 { (hero.title) }
            p { (hero.subtitle) }
            form action="/destinations" method="get" {
                input type="search" name="search" placeholder=(hero.search_placeholder);
                button.primary-bg type="submit" { "Search" }
            }
        }
        section.featured {
            h2 { "Featured " span.primary-text { "Destinations" } }
            @for featured in &content.featured_destinations {
                article.card {
                    img src=(featured.image) alt=(featured.name) loading="lazy";
                    h3 { (featured.name) }
                    p.accent-text { (featured.location) }
                    p { (featured.description) }
                    p.primary-text { "From " (featured.price) }
                }
            }
        }
        section.why-choose-us {
            h2 { "Why Choose " span.primary-text { "WorldClass" } }
            @for item in &content.why_choose_us {
                div.card {
                    span.icon { (item.icon) }
                    h3 { (item.title) }
                    p { (item.description) }
                }
            }
        }
        section.testimonials {
            h2 { "What Our " span.primary-text { "Travelers Say" } }
            @for testimonial in &content.testimonials {
                blockquote.card {
                    img src=(testimonial.avatar) alt=(testimonial.author) loading="lazy";
                    p { "\u{201c}" (testimonial.quote) "\u{201d}" }
                    footer { (testimonial.author) ", " (testimonial.location) }
                }
            }
        }
        section.cta style={ "background-image: url('" (cta.background_image) "')" } {
            h2 { (cta.title) }
            p { (cta.subtitle) }
            a.button.accent-bg href=(cta.button_link) { (cta.button_text) }
        }
    };
    layout(page, "Home", body)
}

pub fn about(page: &Page) -> Markup {
    let about = &page.content.about;
    let body = html! {
        h1 { "About " span.primary-text { "WorldClass" } }
        section {
            h2 { "Our Story" }
            p { (about.company_history) }
        }
        section.mission-vision {
            div.card { h3 { "Our Mission" } p { (about.mission) } }
            div.card { h3 { "Our Vision" } p { (about.vision) } }
        }
        section.team {
            h2 { "Meet Our " span.primary-text { "Team" } }
            @for member in &about.team_members {
                div.card {
                    img src=(member.image) alt=(member.name) loading="lazy";
                    h3 { (member.name) }
                    p.accent-text { (member.role) }
                    p { (member.bio) }
                }
            }
        }
    };
    layout(page, "About Us", body)
}

pub fn destinations(page: &Page, query: &CatalogQuery) -> Markup {
    let all = &page.content.destinations;
    let category = query.category.as_deref();
    let found = filter::filter_destinations(all, &query.search, category);
    let categories = filter::destination_categories(all);
    let body = html! {
        h1 { "Explore Our " span.primary-text { "Destinations" } }
        form.filters method="get" action="/destinations" {
            input type="search" name="search" value=(query.search) placeholder="Search destinations...";
            (select_filter("category", "Category", &categories, category))
            button.primary-bg type="submit" { "Filter" }
        }
        @if found.is_empty() {
            p.empty { "No destinations found matching your criteria." }
        } @else {
            section.grid {
                @for destination in found { (destination_card(destination)) }
            }
        }
    };
    layout(page, "Destinations", body)
}

/// Placeholder for the booking flow.
pub fn booking(page: &Page, destination: &Destination) -> Markup {
    let body = html! {
        section.card.booking {
            h1 { "Booking trip to " (destination.city) "!" }
            p { "Online booking is coming soon. Our team will help you plan this trip." }
            a.button.primary-bg href="/contact" { "Contact Us" }
        }
    };
    layout(page, "Book a Trip", body)
}

pub fn services(page: &Page) -> Markup {
    let body = html! {
        h1 { "Our " span.primary-text { "Services" } }
        section.grid {
            @for service in &page.content.services {
                article.card {
                    img src=(service.image) alt=(service.title) loading="lazy";
                    h3 { (service.title) }
                    p { (service.description) }
                }
            }
        }
    };
    layout(page, "Our Services", body)
}

pub fn blog(page: &Page, query: &CatalogQuery) -> Markup {
    let posts = &page.content.blog_posts;
    let tag = query.tag.as_deref();
    let found = filter::filter_posts(posts, &query.search, tag);
    let tags = filter::post_tags(posts);
    let body = html! {
        h1 { "Our Travel " span.primary-text { "Blog" } }
        form.filters method="get" action="/blog" {
            input type="search" name="search" value=(query.search) placeholder="Search blog posts...";
            (select_filter("tag", "Tag", &tags, tag))
            button.primary-bg type="submit" { "Filter" }
        }
        @if found.is_empty() {
            p.empty { "No blog posts found matching your criteria." }
        } @else {
            section.grid {
                @for post in found { (blog_card(post)) }
            }
        }
    };
    layout(page, "Blog", body)
}

pub fn blog_post(page: &Page, post: &BlogPost) -> Markup {
    let body = html! {
        article.card.post {
            img src=(post.image) alt=(post.title);
            h1 { (post.title) }
            p.meta {
                "By " span.primary-text { (post.author) }
                " · " time datetime=(post.date) { (long_date(&post.date)) }
            }
            ul.tags {
                @for tag in &post.tags { li.accent-text { (tag) } }
            }
            // Post bodies are markup written by the site's own editors.
            div.post-content { (PreEscaped(&post.content)) }
            a href="/blog" { "← Back to Blog" }
        }
    };
    layout(page, &post.title, body)
}

pub fn not_found(page: &Page, what: &str) -> Markup {
    let body = html! {
        section.card.not-found {
            h1 { (what) " Not Found" }
            p { "The page you are looking for does not exist or has been moved." }
            a href="/" { "Back to Home" }
        }
    };
    layout(page, "Not Found", body)
}

/// Contact page; `sent` shows the confirmation instead of the filled form.
pub fn contact(page: &Page, form: &ContactForm, errors: &ContactFormErrors, sent: bool) -> Markup {
    let info = &page.content.contact;
    let body = html! {
        h1 { "Contact " span.primary-text { "Us" } }
        section.card.contact-form {
            h2 { "Send Us a Message" }
            @if sent {
                p.success-text { "Thank you for your message! We will get back to you shortly." }
            }
            form method="post" action="/contact" novalidate {
                label for="name" { "Name" }
                input id="name" type="text" name="name" value=(form.name);
                @if let Some(error) = errors.name { p.error-text { (error) } }

                label for="email" { "Email" }
                input id="email" type="email" name="email" value=(form.email);
                @if let Some(error) = errors.email { p.error-text { (error) } }

                label for="phone" { "Phone (optional)" }
                input id="phone" type="tel" name="phone" value=(form.phone);

                label for="message" { "Message" }
                textarea id="message" name="message" rows="5" { (form.message) }
                @if let Some(error) = errors.message { p.error-text { (error) } }

                button.primary-bg.primary-hover-bg type="submit" { "Send Message" }
            }
        }
        section.card.contact-info {
            h2 { "Our Office" }
            p { (info.address) }
            p { a href={ "tel:" (info.phone) } { (info.phone) } }
            p { a href={ "mailto:" (info.email) } { (info.email) } }
            iframe src=(info.map_embed_url) title="Office location" loading="lazy" {}
        }
    };
    layout(page, "Contact Us", body)
}

/// Result of a footer signup; the footer itself carries the outcome.
pub fn newsletter(page: &Page) -> Markup {
    let body = html! {
        h1 { "Newsletter" }
        section.card {
            @match page.newsletter {
                NewsletterStatus::Subscribed => {
                    p { "You are on the list for offers and travel tips." }
                }
                _ => {
                    p { "We could not sign you up. Check the address in the form below." }
                }
            }
            a.button.primary-bg.primary-hover-bg href=(page.path) { "Continue browsing" }
        }
    };
    layout(page, "Newsletter", body)
}

const ADMIN_SECTIONS: [(&str, &str); 6] = [
    ("Overview", "/admin"),
    ("Content", "/admin/content"),
    ("Destinations", "/admin/destinations"),
    ("Blog Posts", "/admin/blog"),
    ("Settings", "/admin/settings"),
    ("Analytics", "/admin/analytics"),
];

fn admin_layout(page: &Page, title: &str, body: Markup) -> Markup {
    let inner = html! {
        div.admin {
            aside.sidebar {
                h2 { "Admin Dashboard" }
                nav {
                    @for (name, path) in ADMIN_SECTIONS {
                        a.active[path == page.path] href=(path) { (name) }
                    }
                }
            }
            section.admin-body { (body) }
        }
    };
    layout(page, title, inner)
}

fn stat(label: &str, value: u64) -> Markup {
    html! {
        div.card.stat {
            h3 { (label) }
            p.primary-text { (group_thousands(value)) }
        }
    }
}

pub fn admin_overview(page: &Page, revision_id: i64) -> Markup {
    let content = page.content;
    let analytics = &page.settings.analytics;
    let body = html! {
        h1 { "Welcome to the Admin Dashboard" }
        div.stats {
            (stat("Destinations", content.destinations.len() as u64))
            (stat("Blog Posts", content.blog_posts.len() as u64))
            (stat("Services", content.services.len() as u64))
            (stat("Total Page Views", analytics.total_page_views()))
        }
        p.meta { "Content revision " (revision_id) }
    };
    admin_layout(page, "Admin Dashboard", body)
}

pub fn admin_analytics(page: &Page) -> Markup {
    let analytics = &page.settings.analytics;
    let body = html! {
        h1 { "Analytics" }
        div.stats {
            (stat("Total Page Views", analytics.total_page_views()))
            (stat("Total Bookings", analytics.bookings))
            (stat("Newsletter Signups", analytics.newsletter_signups))
        }
        div.card {
            h3 { "Page Views by Path" }
            table {
                thead { tr { th { "Page Path" } th { "Views" } } }
                tbody {
                    @for (path, views) in &analytics.page_views {
                        tr { td { (path) } td { (group_thousands(*views)) } }
                    }
                }
            }
        }
    };
    admin_layout(page, "Analytics", body)
}

pub fn admin_content(page: &Page) -> Markup {
    let content = page.content;
    let body = html! {
        h1 { "Content" }
        p { "Edit through " code { "/api/admin/content/draft" } "." }
        dl.card {
            dt { "Hero Title" } dd { (content.hero.title) }
            dt { "Hero Subtitle" } dd { (content.hero.subtitle) }
            dt { "CTA" } dd { (content.cta.title) " → " (content.cta.button_link) }
            dt { "Team Members" } dd { (content.about.team_members.len()) }
            dt { "Testimonials" } dd { (content.testimonials.len()) }
            dt { "Services" } dd { (content.services.len()) }
            dt { "Contact Email" } dd { (content.contact.email) }
        }
    };
    admin_layout(page, "Content", body)
}

pub fn admin_destinations(page: &Page) -> Markup {
    let body = html! {
        h1 { "Manage Destinations" }
        table.card {
            thead { tr { th { "ID" } th { "City" } th { "Country" } th { "Category" } th { "Price" } } }
            tbody {
                @for d in &page.content.destinations {
                    tr { td { (d.id) } td { (d.city) } td { (d.country) } td { (d.category) } td { (d.price) } }
                }
            }
        }
    };
    admin_layout(page, "Destinations", body)
}

pub fn admin_blog(page: &Page) -> Markup {
    let body = html! {
        h1 { "Manage Blog Posts" }
        table.card {
            thead { tr { th { "ID" } th { "Title" } th { "Slug" } th { "Author" } th { "Date" } } }
            tbody {
                @for post in &page.content.blog_posts {
                    tr {
                        td { (post.id) }
                        td { a href={ "/blog/" (post.slug) } { (post.title) } }
                        td { code { (post.slug) } }
                        td { (post.author) }
                        td { (post.date) }
                    }
                }
            }
        }
    };
    admin_layout(page, "Blog Posts", body)
}

pub fn admin_settings(page: &Page) -> Markup {
    let theme = &page.settings.theme;
    let body = html! {
        h1 { "Website Settings" }
        dl.card {
            dt { "Primary Color" } dd.primary-text { (theme.primary_color.label()) }
            dt { "Accent Color" } dd.accent-text { (theme.accent_color.label()) }
            dt { "Heading Font" } dd { (theme.font_family_heading) }
            dt { "Body Font" } dd { (theme.font_family_body) }
            dt { "Dark Mode" } dd { @if theme.dark_mode_enabled { "On" } @else { "Off" } }
        }
        h2 { "Available Colors" }
        ul.palette {
            @for color in PaletteColor::THEME_CHOICES {
                li style={ "color: " (color.hex(600)) } { (color.label()) }
            }
        }
    };
    admin_layout(page, "Settings", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_admin_settings, default_site_content};

    fn render(f: impl Fn(&Page) -> Markup, root: RootClass) -> String {
        let content = default_site_content();
        let settings = default_admin_settings();
        let page = Page {
            content: &content,
            settings: &settings,
            root,
            path: "/",
            newsletter: NewsletterStatus::Idle,
        };
        f(&page).into_string()
    }

    #[test]
    fn test_long_date_and_fallback() {
        assert_eq!(long_date("2023-04-15"), "April 15, 2023");
        assert_eq!(long_date("someday"), "someday");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(3600), "3,600");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_home_renders_hero_and_root_class() {
        let light = render(home, RootClass::Light);
        assert!(light.contains("Your Journey Begins Here"));
        assert!(light.contains("<html lang=\"en\">"));

        let dark = render(home, RootClass::Dark);
        assert!(dark.contains("<html lang=\"en\" class=\"dark\">"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut content = default_site_content();
        content.hero.title = "<script>alert(1)</script>".to_string();
        let settings = default_admin_settings();
        let page = Page {
            content: &content,
            settings: &settings,
            root: RootClass::Light,
            path: "/",
            newsletter: NewsletterStatus::Idle,
        };

        let html = home(&page).into_string();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_destination_result_shows_placeholder() {
        let query = CatalogQuery {
            search: "atlantis".to_string(),
            ..Default::default()
        };
        let html = render(|page| destinations(page, &query), RootClass::Light);
        assert!(html.contains("No destinations found matching your criteria."));
    }

    #[test]
    fn test_tag_links_are_percent_encoded() {
        assert_eq!(tag_link("Food & Wine"), "/blog?tag=Food%20%26%20Wine");
        assert_eq!(tag_link("Travel"), "/blog?tag=Travel");
    }

    #[test]
    fn test_footer_shows_newsletter_state() {
        let idle = render(home, RootClass::Light);
        assert!(idle.contains("action=\"/newsletter\""));
        assert!(!idle.contains("Thank you for subscribing!"));

        let content = default_site_content();
        let settings = default_admin_settings();
        let page = Page {
            content: &content,
            settings: &settings,
            root: RootClass::Light,
            path: "/blog",
            newsletter: NewsletterStatus::Subscribed,
        };
        let html = newsletter(&page).into_string();
        assert!(html.contains("Thank you for subscribing!"));
        assert!(!html.contains("action=\"/newsletter\""));
        assert!(html.contains("href=\"/blog\""));
    }
}
