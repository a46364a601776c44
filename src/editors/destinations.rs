//! Destination catalog editing.

use chrono::NaiveDate;
use serde::Deserialize;

use super::EditableItem;
use crate::generation::Prompt;
use crate::models::{Destination, SiteContent, DEFAULT_DESTINATION_IMAGE};

/// Field update for an open destination draft. Absent fields are unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DestinationPatch {
    pub country: Option<String>,
    pub city: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DestinationField {
    #[default]
    Description,
}

impl Destination {
    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }
}

impl EditableItem for Destination {
    const KIND: &'static str = "destination";
    const ID_PREFIX: &'static str = "d";
    const GENERATION_FAILED: &'static str =
        "Failed to generate description with AI. Please try again.";

    type Patch = DestinationPatch;
    type Field = DestinationField;

    fn id(&self) -> &str {
        &self.id
    }

    fn new_draft(id: String, _today: NaiveDate) -> Self {
        Destination {
            id,
            country: String::new(),
            city: String::new(),
            image: DEFAULT_DESTINATION_IMAGE.to_string(),
            description: String::new(),
            price: "$0".to_string(),
            category: "Other".to_string(),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("city", &self.city),
            ("country", &self.country),
            ("category", &self.category),
            ("image", &self.image),
            ("price", &self.price),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    fn slice(content: &SiteContent) -> &[Self] {
        &content.destinations
    }

    fn slice_mut(content: &mut SiteContent) -> &mut Vec<Self> {
        &mut content.destinations
    }

    fn apply_patch(&mut self, patch: DestinationPatch) {
        if let Some(country) = patch.country {
            self.set_country(country);
        }
        if let Some(city) = patch.city {
            self.set_city(city);
        }
        if let Some(image) = patch.image {
            self.set_image(image);
        }
        if let Some(description) = patch.description {
            self.set_description(description);
        }
        if let Some(price) = patch.price {
            self.set_price(price);
        }
        if let Some(category) = patch.category {
            self.set_category(category);
        }
    }

    fn generation_prompt(&self, field: DestinationField) -> Prompt {
        match field {
            DestinationField::Description => Prompt::new(
                format!(
                    "Write a short, engaging travel description (max 100 words) for {}, {}. Focus on key attractions or unique aspects.",
                    self.city, self.country
                ),
                150,
            ),
        }
    }

    fn apply_generated(&mut self, field: DestinationField, text: String) {
        match field {
            DestinationField::Description => self.set_description(text),
        }
    }
}
