//! Built-in records used when nothing has been persisted yet.

use std::collections::BTreeMap;

use super::{
    AboutContent, AdminSettings, AnalyticsData, BlogPost, CallToAction, ContactInfo, Destination,
    FeaturedDestination, HeroSection, NavLink, PaletteColor, Service, SiteContent, SocialMedia,
    TeamMember, Testimonial, ThemeSettings, WhyChooseUsItem,
};

pub const DEFAULT_HERO_BG: &str = "https://picsum.photos/1920/1080?random=1";
pub const DEFAULT_DESTINATION_IMAGE: &str = "https://picsum.photos/800/600?random=2";
pub const DEFAULT_BLOG_IMAGE: &str = "https://picsum.photos/1200/800?random=5";
pub const DEFAULT_CTA_BG: &str = "https://picsum.photos/1920/600?random=7";

fn link(name: &str, path: &str) -> NavLink {
    NavLink {
        name: name.to_string(),
        path: path.to_string(),
    }
}

fn featured(id: &str, name: &str, location: &str, seed: u32, description: &str, price: &str) -> FeaturedDestination {
    FeaturedDestination {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        image: format!("https://picsum.photos/800/600?random={seed}"),
        description: description.to_string(),
        price: price.to_string(),
    }
}

fn why(icon: &str, title: &str, description: &str) -> WhyChooseUsItem {
    WhyChooseUsItem {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn testimonial(id: &str, quote: &str, author: &str, location: &str, seed: u32) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        quote: quote.to_string(),
        author: author.to_string(),
        location: location.to_string(),
        avatar: format!("https://picsum.photos/100/100?random={seed}"),
    }
}

fn member(id: &str, name: &str, role: &str, seed: u32, bio: &str) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        image: format!("https://picsum.photos/300/300?random={seed}"),
        bio: bio.to_string(),
    }
}

fn destination(
    id: &str,
    country: &str,
    city: &str,
    seed: u32,
    description: &str,
    price: &str,
    category: &str,
) -> Destination {
    Destination {
        id: id.to_string(),
        country: country.to_string(),
        city: city.to_string(),
        image: format!("https://picsum.photos/800/600?random={seed}"),
        description: description.to_string(),
        price: price.to_string(),
        category: category.to_string(),
    }
}

fn service(id: &str, title: &str, description: &str, seed: u32) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: format!("https://picsum.photos/600/400?random={seed}"),
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    slug: &str,
    title: &str,
    author: &str,
    date: &str,
    tags: &[&str],
    seed: u32,
    excerpt: &str,
    content: &str,
) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        slug: slug.to_string(),
        author: author.to_string(),
        date: date.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        image: format!("https://picsum.photos/1200/800?random={seed}"),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
    }
}

/// The content shown on a fresh installation.
pub fn default_site_content() -> SiteContent {
    SiteContent {
        header_links: vec![
            link("Home", "/"),
            link("Destinations", "/destinations"),
            link("Services", "/services"),
            link("Blog", "/blog"),
            link("About", "/about"),
            link("Contact", "/contact"),
            link("Admin", "/admin"),
        ],
        footer_links: vec![
            link("Home", "/"),
            link("Destinations", "/destinations"),
            link("Services", "/services"),
            link("Blog", "/blog"),
            link("About", "/about"),
            link("Contact", "/contact"),
        ],
        hero: HeroSection {
            title: "Your Journey Begins Here".to_string(),
            subtitle: "Explore the world with WorldClass – crafting unforgettable travel experiences tailored just for you.".to_string(),
            background_image: DEFAULT_HERO_BG.to_string(),
            search_placeholder: "Search for destinations, trips...".to_string(),
        },
        featured_destinations: vec![
            featured("fd-1", "Paris", "France", 10, "The city of love, art, and exquisite cuisine.", "$1200"),
            featured("fd-2", "Tokyo", "Japan", 11, "A bustling metropolis blending tradition and modernity.", "$1800"),
            featured("fd-3", "Santorini", "Greece", 12, "Iconic white-washed villages and breathtaking sunsets.", "$1500"),
        ],
        why_choose_us: vec![
            why("✈️", "Expert Guidance", "Our seasoned travel experts craft personalized itineraries."),
            why("🏨", "Premium Services", "Access to exclusive deals on flights, hotels, and tours."),
            why("🌍", "Global Network", "Extensive connections ensures seamless travel worldwide."),
            why("📞", "24/7 Support", "Dedicated support before, during, and after your trip."),
        ],
        testimonials: vec![
            testimonial("t-1", "WorldClass made our dream honeymoon to the Maldives a reality. Every detail was perfect!", "Jane & John Doe", "USA", 20),
            testimonial("t-2", "Professional, responsive, and truly understanding of our travel needs. Highly recommend!", "Maria Rodriguez", "Spain", 21),
            testimonial("t-3", "The personalized trip planning exceeded all our expectations. An unforgettable adventure!", "Kenji Tanaka", "Japan", 22),
        ],
        cta: CallToAction {
            title: "Ready to Explore?".to_string(),
            subtitle: "Unlock exclusive offers and start planning your next adventure today!".to_string(),
            button_text: "Plan My Trip".to_string(),
            button_link: "/contact".to_string(),
            background_image: DEFAULT_CTA_BG.to_string(),
        },
        about: AboutContent {
            company_history: "Founded in 2005, WorldClass started with a simple vision: to make international travel accessible and enjoyable for everyone. Over the years, we've grown into a leading agency, known for our meticulous planning and exceptional customer service.".to_string(),
            mission: "Our mission is to inspire and enable memorable global journeys through expert guidance, personalized services, and sustainable travel practices.".to_string(),
            vision: "To be the most trusted and innovative international travel agency, recognized for creating unparalleled experiences that connect travelers with the world.".to_string(),
            team_members: vec![
                member("tm-1", "Alice Johnson", "CEO & Founder", 30, "Alice founded WorldClass with a passion for exploration and a commitment to service excellence."),
                member("tm-2", "Bob Williams", "Head of Operations", 31, "Bob ensures every trip runs smoothly, leveraging years of logistical expertise."),
                member("tm-3", "Charlie Green", "Lead Travel Consultant", 32, "Charlie is renowned for crafting unique itineraries and discovering hidden gems."),
            ],
        },
        destinations: vec![
            destination("d-1", "France", "Paris", 40, "Experience the romance and history of Paris, from the Eiffel Tower to the Louvre.", "$1200", "Europe"),
            destination("d-2", "Japan", "Tokyo", 41, "Dive into the vibrant culture of Tokyo, a city where ancient traditions meet futuristic innovations.", "$1800", "Asia"),
            destination("d-3", "Greece", "Santorini", 42, "Witness the iconic sunsets and charming white-washed villages of Santorini.", "$1500", "Europe"),
            destination("d-4", "Thailand", "Bangkok", 43, "Explore the bustling street markets, magnificent temples, and vibrant nightlife of Bangkok.", "$900", "Asia"),
            destination("d-5", "Italy", "Rome", 44, "Step back in time in Rome, home to ancient ruins, impressive art, and delicious food.", "$1300", "Europe"),
        ],
        services: vec![
            service("s-1", "Flight Bookings", "Seamlessly book flights to any destination worldwide with competitive prices.", 50),
            service("s-2", "Hotel Reservations", "Secure the best accommodations, from budget-friendly stays to luxury resorts.", 51),
            service("s-3", "Holiday Packages", "All-inclusive packages designed for convenience and maximum enjoyment.", 52),
            service("s-4", "Travel Insurance", "Comprehensive travel insurance for peace of mind during your journey.", 53),
            service("s-5", "Custom Trip Planning", "Tailored itineraries to match your unique interests, budget, and travel style.", 54),
        ],
        blog_posts: vec![
            post(
                "bp-1",
                "exploring-the-amazon",
                "Exploring the Wonders of the Amazon Rainforest",
                "Travel Guide",
                "2023-04-15",
                &["Nature", "Adventure"],
                60,
                "Discover the unparalleled biodiversity and breathtaking landscapes of the Amazon rainforest.",
                "<p>The Amazon Rainforest, spanning several South American countries, is the largest tropical rainforest in the world and home to an incredible array of wildlife and plant species. A journey here promises adventure, discovery, and an intimate connection with nature.</p><p>From thrilling river cruises to guided jungle treks, visitors can explore diverse ecosystems and spot exotic creatures like jaguars, monkeys, and vibrant macaws. Engaging with indigenous communities also offers a unique insight into their rich cultural heritage and sustainable living practices. It's an experience that truly redefines \"wildlife.\"</p>",
            ),
            post(
                "bp-2",
                "culinary-journey-italy",
                "A Culinary Journey Through Italy: A Food Lover's Guide",
                "Foodie Nomad",
                "2023-03-20",
                &["Food", "Culture"],
                61,
                "Savor the flavors of Italy with our ultimate guide to its diverse culinary traditions, from pasta to gelato.",
                "<p>Italy is a paradise for food lovers, offering a culinary landscape as diverse as its regions. From the rich pasta dishes of Rome to the seafood specialties of Sicily, every corner of the country boasts unique flavors and traditions.</p><p>Indulge in freshly made pasta, authentic Neapolitan pizza, and exquisite wines. Don't forget to try regional cheeses, cured meats, and, of course, a scoop (or two!) of artisanal gelato. A food tour through Italy is not just about eating; it's about experiencing the heart and soul of its culture.</p>",
            ),
            post(
                "bp-3",
                "hidden-gems-southeast-asia",
                "Discovering Hidden Gems in Southeast Asia",
                "Adventure Seeker",
                "2023-02-10",
                &["Asia", "Travel Tips"],
                62,
                "Beyond the tourist hotspots, Southeast Asia offers serene beaches, ancient temples, and vibrant local life.",
                "<p>While popular destinations in Southeast Asia like Bali and Phuket attract millions, there are countless hidden gems waiting to be discovered. Venture off the beaten path to find tranquil islands, untouched beaches, and ancient ruins far from the crowds.</p><p>Explore the lesser-known islands of the Philippines, hike through the pristine jungles of Laos, or immerse yourself in the local life of rural Vietnam. These experiences offer a deeper, more authentic understanding of the region's rich history and diverse cultures. Prepare for an adventure of a lifetime!</p>",
            ),
        ],
        contact: ContactInfo {
            address: "123 Travel Lane, Wanderlust City, Global".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "info@worldclass.com".to_string(),
            map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3153.253639457884!2d144.963057615317!3d-37.81729097975196!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x6ad642b5a1b3c9b1%3A0x6a090a2a4b8b6a1e!2sFederation%20Square!5e0!3m2!1sen!2sau!4v1677636009890!5m2!1sen!2sau".to_string(),
        },
        footer_description: "WorldClass is your trusted partner for unforgettable international travel experiences. We meticulously plan every detail so you can focus on making memories.".to_string(),
        social_media: SocialMedia {
            facebook: Some("https://www.facebook.com/worldclass-travel".to_string()),
            instagram: Some("https://www.instagram.com/worldclass-travel".to_string()),
            twitter: Some("https://www.twitter.com/worldclass-travel".to_string()),
            youtube: Some("https://www.youtube.com/worldclass-travel".to_string()),
        },
    }
}

/// Theme and analytics shown on a fresh installation.
pub fn default_admin_settings() -> AdminSettings {
    AdminSettings {
        theme: ThemeSettings {
            primary_color: PaletteColor::Blue,
            accent_color: PaletteColor::Teal,
            text_color: "gray-900".to_string(),
            background_color: "gray-50".to_string(),
            font_family_heading: "'Playfair Display', serif".to_string(),
            font_family_body: "'Roboto', sans-serif".to_string(),
            dark_mode_enabled: false,
        },
        analytics: AnalyticsData {
            page_views: BTreeMap::from([
                ("/".to_string(), 1200),
                ("/destinations".to_string(), 850),
                ("/services".to_string(), 600),
                ("/blog".to_string(), 400),
                ("/about".to_string(), 300),
                ("/contact".to_string(), 250),
            ]),
            bookings: 75,
            newsletter_signups: 120,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_hero_title() {
        assert_eq!(default_site_content().hero.title, "Your Journey Begins Here");
    }

    #[test]
    fn test_default_identifiers_are_unique() {
        let content = default_site_content();
        let destination_ids: HashSet<_> = content.destinations.iter().map(|d| &d.id).collect();
        let post_ids: HashSet<_> = content.blog_posts.iter().map(|p| &p.id).collect();
        let team_ids: HashSet<_> = content.about.team_members.iter().map(|m| &m.id).collect();

        assert_eq!(destination_ids.len(), content.destinations.len());
        assert_eq!(post_ids.len(), content.blog_posts.len());
        assert_eq!(team_ids.len(), content.about.team_members.len());
    }

    #[test]
    fn test_default_settings_round_trip_json() {
        let settings = default_admin_settings();
        let raw = serde_json::to_string(&settings).unwrap();
        let parsed: AdminSettings = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, settings);
        assert_eq!(settings.analytics.total_page_views(), 3600);
    }
}
