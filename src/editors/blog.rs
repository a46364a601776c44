//! Blog post editing. The slug always follows the title.

use chrono::NaiveDate;
use serde::Deserialize;

use super::{slugify, EditableItem};
use crate::generation::Prompt;
use crate::models::{BlogPost, SiteContent, DEFAULT_BLOG_IMAGE};

/// Field update for an open blog draft. The slug is derived, never patched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    /// Comma-separated tag input, e.g. `"Food, Culture"`.
    pub tags: Option<String>,
    pub image: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlogField {
    Excerpt,
    Content,
}

impl BlogPost {
    /// Set the title and recompute the slug from it.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.slug = slugify(&self.title);
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    /// Replace the tags from comma-separated input.
    pub fn set_tags_from_input(&mut self, input: &str) {
        self.tags = input
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }

    pub fn set_excerpt(&mut self, excerpt: impl Into<String>) {
        self.excerpt = excerpt.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

/// Prompt for title ideas; the answer is shown to the editor, not stored.
pub fn ideas_prompt() -> Prompt {
    Prompt::new(
        "Generate 3 creative blog post titles and a one-sentence summary for a travel agency website.",
        200,
    )
}

impl EditableItem for BlogPost {
    const KIND: &'static str = "blog post";
    const ID_PREFIX: &'static str = "bp";
    const GENERATION_FAILED: &'static str =
        "Failed to generate content with AI. Please try again.";

    type Patch = BlogPostPatch;
    type Field = BlogField;

    fn id(&self) -> &str {
        &self.id
    }

    fn new_draft(id: String, today: NaiveDate) -> Self {
        BlogPost {
            id,
            title: String::new(),
            slug: String::new(),
            author: "Admin".to_string(),
            date: today.format("%Y-%m-%d").to_string(),
            tags: Vec::new(),
            image: DEFAULT_BLOG_IMAGE.to_string(),
            excerpt: String::new(),
            content: String::new(),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("author", &self.author),
            ("date", &self.date),
            ("image", &self.image),
            ("excerpt", &self.excerpt),
            ("content", &self.content),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    fn slice(content: &SiteContent) -> &[Self] {
        &content.blog_posts
    }

    fn slice_mut(content: &mut SiteContent) -> &mut Vec<Self> {
        &mut content.blog_posts
    }

    fn apply_patch(&mut self, patch: BlogPostPatch) {
        if let Some(title) = patch.title {
            self.set_title(title);
        }
        if let Some(author) = patch.author {
            self.set_author(author);
        }
        if let Some(date) = patch.date {
            self.set_date(date);
        }
        if let Some(tags) = patch.tags {
            self.set_tags_from_input(&tags);
        }
        if let Some(image) = patch.image {
            self.set_image(image);
        }
        if let Some(excerpt) = patch.excerpt {
            self.set_excerpt(excerpt);
        }
        if let Some(content) = patch.content {
            self.set_content(content);
        }
    }

    fn generation_prompt(&self, field: BlogField) -> Prompt {
        match field {
            BlogField::Excerpt => Prompt::new(
                format!(
                    "Write a short blog post excerpt (max 50 words) for an article titled \"{}\".",
                    self.title
                ),
                80,
            ),
            BlogField::Content => Prompt::new(
                format!(
                    "Write a detailed blog post content (max 300 words, in markdown format with paragraphs) for an article titled \"{}\". Focus on travel-related aspects relevant to the title.",
                    self.title
                ),
                400,
            ),
        }
    }

    fn apply_generated(&mut self, field: BlogField, text: String) {
        match field {
            BlogField::Excerpt => self.set_excerpt(text),
            BlogField::Content => self.set_content(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BlogPost {
        BlogPost::new_draft(
            "bp-1".to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        )
    }

    #[test]
    fn test_new_draft_defaults() {
        let post = draft();
        assert_eq!(post.author, "Admin");
        assert_eq!(post.date, "2024-03-09");
        assert_eq!(post.image, DEFAULT_BLOG_IMAGE);
        assert!(post.tags.is_empty());
        assert_eq!(post.missing_fields(), vec!["title", "excerpt", "content"]);
    }

    #[test]
    fn test_title_edit_overwrites_slug() {
        let mut post = draft();
        post.slug = "hand-written".to_string();
        post.set_title("Ten Days in Kyoto & Osaka");
        assert_eq!(post.slug, "ten-days-in-kyoto-and-osaka");

        post.apply_patch(BlogPostPatch {
            title: Some("Kyoto Again".to_string()),
            ..Default::default()
        });
        assert_eq!(post.slug, "kyoto-again");
    }

    #[test]
    fn test_slug_is_not_patchable() {
        let result =
            serde_json::from_value::<BlogPostPatch>(serde_json::json!({ "slug": "custom" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_tags_from_comma_input() {
        let mut post = draft();
        post.set_tags_from_input(" Food,Culture , ,Travel Tips ");
        assert_eq!(post.tags, vec!["Food", "Culture", "Travel Tips"]);
    }

    #[test]
    fn test_generation_prompts() {
        let mut post = draft();
        post.set_title("Alpine Trains");

        let excerpt = post.generation_prompt(BlogField::Excerpt);
        assert!(excerpt.text.ends_with("titled \"Alpine Trains\"."));
        assert_eq!(excerpt.max_output_tokens, Some(80));

        let content = post.generation_prompt(BlogField::Content);
        assert_eq!(content.max_output_tokens, Some(400));

        post.apply_generated(BlogField::Content, "<p>All aboard</p>".to_string());
        assert_eq!(post.content, "<p>All aboard</p>");
        assert_eq!(ideas_prompt().max_output_tokens, Some(200));
    }
}
