//! Trivia categories and the schemes that name and color them
//!
//! A category's place on the board depends only on its ordinal; the scheme
//! only decides what it is called and how it is drawn.

use serde::{Deserialize, Serialize};

use crate::consts::CATEGORY_COUNT;

/// One of the six trivia categories, identified by ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(u8);

impl Category {
    /// All categories in ordinal order
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category(0),
        Category(1),
        Category(2),
        Category(3),
        Category(4),
        Category(5),
    ];

    #[inline]
    pub fn ordinal(self) -> usize {
        self.0 as usize
    }

    /// Category `steps` positions further along the canonical order (wrapping)
    #[inline]
    pub fn rotated(self, steps: usize) -> Self {
        Category(((self.ordinal() + steps) % CATEGORY_COUNT) as u8)
    }
}

/// Display name and color for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub color: String,
}

impl CategoryInfo {
    fn new(color: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

/// Built-in category schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemePreset {
    /// Colors and topics of most editions
    #[default]
    Standard,
    /// Later editions with technology/geography topics
    Alternate,
}

impl SchemePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemePreset::Standard => "Standard",
            SchemePreset::Alternate => "Alternate",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "std" => Some(SchemePreset::Standard),
            "alternate" | "alt" => Some(SchemePreset::Alternate),
            _ => None,
        }
    }

    /// The scheme this preset names
    pub fn scheme(&self) -> CategoryScheme {
        let infos = match self {
            SchemePreset::Standard => [
                CategoryInfo::new("saddlebrown", "SCIENCE & NATURE"),
                CategoryInfo::new("green", "SPORTS & LEISURE"),
                CategoryInfo::new("magenta", "ARTS & ENTERTAINMENT"),
                CategoryInfo::new("yellow", "HISTORY"),
                CategoryInfo::new("orange", "WILD CARD"),
                CategoryInfo::new("blue", "PEOPLE & PLACES"),
            ],
            SchemePreset::Alternate => [
                CategoryInfo::new("orange", "SPORTS & LEISURE"),
                CategoryInfo::new("green", "SCIENCE & TECHNOLOGY"),
                CategoryInfo::new("magenta", "ENTERTAINMENT"),
                CategoryInfo::new("yellow", "HISTORY"),
                CategoryInfo::new("purple", "ARTS & LITERATURE"),
                CategoryInfo::new("blue", "GEOGRAPHY"),
            ],
        };
        CategoryScheme { infos }
    }
}

/// Names and colors for all six categories, in ordinal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScheme {
    infos: [CategoryInfo; CATEGORY_COUNT],
}

impl Default for CategoryScheme {
    fn default() -> Self {
        SchemePreset::Standard.scheme()
    }
}

impl CategoryScheme {
    /// Build a scheme from exactly six entries
    pub fn from_infos(infos: Vec<CategoryInfo>) -> Option<Self> {
        let infos: [CategoryInfo; CATEGORY_COUNT] = infos.try_into().ok()?;
        Some(Self { infos })
    }

    pub fn info(&self, category: Category) -> &CategoryInfo {
        &self.infos[category.ordinal()]
    }

    pub fn name(&self, category: Category) -> &str {
        &self.info(category).name
    }

    pub fn color(&self, category: Category) -> &str {
        &self.info(category).color
    }

    /// Find the category drawn in `color` (case-insensitive)
    pub fn by_color(&self, color: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| self.color(*c).eq_ignore_ascii_case(color))
    }

    /// Find the category called `name` (case-insensitive)
    pub fn by_name(&self, name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| self.name(*c).eq_ignore_ascii_case(name))
    }

    /// Iterate (category, info) pairs in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryInfo)> {
        Category::ALL.into_iter().zip(self.infos.iter())
    }
}
