//! Free-form editor over the whole content record.
//!
//! Edits are typed per section and per list index; a single submit commits
//! the full draft as one replacement.

use std::sync::Arc;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::SiteContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeroField {
    Title,
    Subtitle,
    BackgroundImage,
    SearchPlaceholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CtaField {
    Title,
    Subtitle,
    ButtonText,
    ButtonLink,
    BackgroundImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AboutField {
    CompanyHistory,
    Mission,
    Vision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Address,
    Phone,
    Email,
    MapEmbedUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SocialNetwork {
    Facebook,
    Instagram,
    Twitter,
    Youtube,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkField {
    Name,
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WhyChooseUsField {
    Icon,
    Title,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestimonialField {
    Quote,
    Author,
    Location,
    Avatar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TeamMemberField {
    Name,
    Role,
    Image,
    Bio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceField {
    Title,
    Description,
    Image,
}

/// One field change on the content draft.
///
/// Serialized with a `section` tag, e.g.
/// `{"section":"testimonial","index":1,"field":"quote","value":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "section", rename_all = "camelCase")]
pub enum ContentEdit {
    Hero { field: HeroField, value: String },
    Cta { field: CtaField, value: String },
    About { field: AboutField, value: String },
    Contact { field: ContactField, value: String },
    FooterDescription { value: String },
    /// An empty value removes the link.
    SocialMedia { network: SocialNetwork, value: String },
    HeaderLink { index: usize, field: LinkField, value: String },
    FooterLink { index: usize, field: LinkField, value: String },
    WhyChooseUs { index: usize, field: WhyChooseUsField, value: String },
    Testimonial { index: usize, field: TestimonialField, value: String },
    TeamMember { index: usize, field: TeamMemberField, value: String },
    Service { index: usize, field: ServiceField, value: String },
}

fn item_at<'a, T>(items: &'a mut [T], index: usize, what: &str) -> Result<&'a mut T, AppError> {
    let len = items.len();
    items.get_mut(index).ok_or_else(|| {
        AppError::Validation(format!(
            "No {} at index {} (there are {})",
            what, index, len
        ))
    })
}

impl ContentEdit {
    pub fn apply(self, content: &mut SiteContent) -> Result<(), AppError> {
        match self {
            ContentEdit::Hero { field, value } => {
                let hero = &mut content.hero;
                *match field {
                    HeroField::Title => &mut hero.title,
                    HeroField::Subtitle => &mut hero.subtitle,
                    HeroField::BackgroundImage => &mut hero.background_image,
                    HeroField::SearchPlaceholder => &mut hero.search_placeholder,
                } = value;
            }
            ContentEdit::Cta { field, value } => {
                let cta = &mut content.cta;
                *match field {
                    CtaField::Title => &mut cta.title,
                    CtaField::Subtitle => &mut cta.subtitle,
                    CtaField::ButtonText => &mut cta.button_text,
                    CtaField::ButtonLink => &mut cta.button_link,
                    CtaField::BackgroundImage => &mut cta.background_image,
                } = value;
            }
            ContentEdit::About { field, value } => {
                let about = &mut content.about;
                *match field {
                    AboutField::CompanyHistory => &mut about.company_history,
                    AboutField::Mission => &mut about.mission,
                    AboutField::Vision => &mut about.vision,
                } = value;
            }
            ContentEdit::Contact { field, value } => {
                let contact = &mut content.contact;
                *match field {
                    ContactField::Address => &mut contact.address,
                    ContactField::Phone => &mut contact.phone,
                    ContactField::Email => &mut contact.email,
                    ContactField::MapEmbedUrl => &mut contact.map_embed_url,
                } = value;
            }
            ContentEdit::FooterDescription { value } => content.footer_description = value,
            ContentEdit::SocialMedia { network, value } => {
                let social = &mut content.social_media;
                *match network {
                    SocialNetwork::Facebook => &mut social.facebook,
                    SocialNetwork::Instagram => &mut social.instagram,
                    SocialNetwork::Twitter => &mut social.twitter,
                    SocialNetwork::Youtube => &mut social.youtube,
                } = Some(value).filter(|url| !url.trim().is_empty());
            }
            ContentEdit::HeaderLink {
                index,
                field,
                value,
            } => set_link(&mut content.header_links, "header link", index, field, value)?,
            ContentEdit::FooterLink {
                index,
                field,
                value,
            } => set_link(&mut content.footer_links, "footer link", index, field, value)?,
            ContentEdit::WhyChooseUs {
                index,
                field,
                value,
            } => {
                let item = item_at(&mut content.why_choose_us, index, "why-choose-us item")?;
                *match field {
                    WhyChooseUsField::Icon => &mut item.icon,
                    WhyChooseUsField::Title => &mut item.title,
                    WhyChooseUsField::Description => &mut item.description,
                } = value;
            }
            ContentEdit::Testimonial {
                index,
                field,
                value,
            } => {
                let item = item_at(&mut content.testimonials, index, "testimonial")?;
                *match field {
                    TestimonialField::Quote => &mut item.quote,
                    TestimonialField::Author => &mut item.author,
                    TestimonialField::Location => &mut item.location,
                    TestimonialField::Avatar => &mut item.avatar,
                } = value;
            }
            ContentEdit::TeamMember {
                index,
                field,
                value,
            } => {
                let member = item_at(&mut content.about.team_members, index, "team member")?;
                *match field {
                    TeamMemberField::Name => &mut member.name,
                    TeamMemberField::Role => &mut member.role,
                    TeamMemberField::Image => &mut member.image,
                    TeamMemberField::Bio => &mut member.bio,
                } = value;
            }
            ContentEdit::Service {
                index,
                field,
                value,
            } => {
                let service = item_at(&mut content.services, index, "service")?;
                *match field {
                    ServiceField::Title => &mut service.title,
                    ServiceField::Description => &mut service.description,
                    ServiceField::Image => &mut service.image,
                } = value;
            }
        }
        Ok(())
    }
}

fn set_link(
    links: &mut [crate::models::NavLink],
    what: &str,
    index: usize,
    field: LinkField,
    value: String,
) -> Result<(), AppError> {
    let link = item_at(links, index, what)?;
    match field {
        LinkField::Name => link.name = value,
        LinkField::Path => link.path = value,
    }
    Ok(())
}

/// Draft copy of the whole content record.
#[derive(Debug)]
pub struct ContentEditor {
    base: Arc<SiteContent>,
    draft: SiteContent,
}

impl ContentEditor {
    pub fn new(base: Arc<SiteContent>) -> Self {
        let draft = (*base).clone();
        Self { base, draft }
    }

    /// Reseed the draft when the committed record changed underneath it.
    /// Returns whether the draft was replaced.
    pub fn sync(&mut self, current: &Arc<SiteContent>) -> bool {
        if Arc::ptr_eq(&self.base, current) {
            return false;
        }
        if self.is_dirty() {
            tracing::info!("Content changed elsewhere, discarding unsaved content draft");
        }
        *self = Self::new(current.clone());
        true
    }

    pub fn draft(&self) -> &SiteContent {
        &self.draft
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != *self.base
    }

    /// Apply `edits` in order. Either all of them land or none do.
    pub fn apply(&mut self, edits: Vec<ContentEdit>) -> Result<&SiteContent, AppError> {
        let mut next = self.draft.clone();
        for edit in edits {
            edit.apply(&mut next)?;
        }
        self.draft = next;
        Ok(&self.draft)
    }

    pub fn reset(&mut self) {
        self.draft = (*self.base).clone();
    }

    /// The record to commit.
    pub fn submit(&self) -> SiteContent {
        self.draft.clone()
    }

    /// Adopt the record produced by a commit as the new base.
    pub fn rebase(&mut self, committed: Arc<SiteContent>) {
        *self = Self::new(committed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_site_content;
    use serde_json::json;

    fn editor() -> ContentEditor {
        ContentEditor::new(Arc::new(default_site_content()))
    }

    #[test]
    fn test_edits_deserialize_from_tagged_json() {
        let edits: Vec<ContentEdit> = serde_json::from_value(json!([
            { "section": "hero", "field": "title", "value": "Go Further" },
            { "section": "teamMember", "index": 0, "field": "role", "value": "Founder" },
            { "section": "socialMedia", "network": "twitter", "value": "" }
        ]))
        .unwrap();

        let mut editor = editor();
        let draft = editor.apply(edits).unwrap();
        assert_eq!(draft.hero.title, "Go Further");
        assert_eq!(draft.about.team_members[0].role, "Founder");
        assert_eq!(draft.social_media.twitter, None);
        assert!(editor.is_dirty());
    }

    #[test]
    fn test_out_of_range_index_rejects_whole_batch() {
        let mut editor = editor();
        let result = editor.apply(vec![
            ContentEdit::FooterDescription {
                value: "changed".to_string(),
            },
            ContentEdit::Service {
                index: 99,
                field: ServiceField::Title,
                value: "Ghost".to_string(),
            },
        ]);

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_list_edits_touch_one_index() {
        let mut editor = editor();
        editor
            .apply(vec![ContentEdit::HeaderLink {
                index: 1,
                field: LinkField::Name,
                value: "Places".to_string(),
            }])
            .unwrap();

        let draft = editor.submit();
        let base = default_site_content();
        assert_eq!(draft.header_links[1].name, "Places");
        assert_eq!(draft.header_links[1].path, base.header_links[1].path);
        assert_eq!(draft.header_links[0], base.header_links[0]);
        assert_eq!(draft.footer_links, base.footer_links);
    }

    #[test]
    fn test_sync_reseeds_only_on_new_snapshot() {
        let base = Arc::new(default_site_content());
        let mut editor = ContentEditor::new(base.clone());
        editor
            .apply(vec![ContentEdit::Hero {
                field: HeroField::Subtitle,
                value: "draft".to_string(),
            }])
            .unwrap();

        assert!(!editor.sync(&base));
        assert_eq!(editor.draft().hero.subtitle, "draft");

        let mut changed = default_site_content();
        changed.hero.title = "Elsewhere".to_string();
        assert!(editor.sync(&Arc::new(changed)));
        assert_eq!(editor.draft().hero.title, "Elsewhere");
        assert!(!editor.is_dirty());
    }
}
