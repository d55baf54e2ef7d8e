use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use stockroom_core::{CategoryId, DomainError, DomainResult, Entity, ValueObject};

/// Preset palette offered by the category form, first entry is the default.
pub const PRESET_COLORS: [&str; 10] = [
    "#3B82F6", "#6366F1", "#8B5CF6", "#10B981", "#F59E0B", "#EF4444", "#06B6D4", "#F97316",
    "#EC4899", "#6B7280",
];

/// Display color in `#RRGGBB` form.
///
/// Only used for rendering; the check exists so a malformed value never reaches
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| DomainError::validation(format!("color must start with '#': {value}")))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::validation(format!(
                "color must be #RRGGBB: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self(PRESET_COLORS[0].to_string())
    }
}

impl ValueObject for HexColor {}

impl TryFrom<String> for HexColor {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl core::fmt::Display for HexColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-side color decoding for stored rows: a value that is not `#RRGGBB`
/// (or null) falls back to the default color instead of failing the row.
fn lenient_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HexColor, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw {
        Some(raw) => HexColor::parse(raw.as_str()).unwrap_or_else(|_| {
            tracing::warn!(color = %raw, "unreadable stored color, using default");
            HexColor::default()
        }),
        None => HexColor::default(),
    })
}

/// Icon shown next to a category (fixed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryIcon {
    #[default]
    Package,
    Smartphone,
    Shirt,
    Sofa,
    Book,
    Dumbbell,
    Monitor,
    Headphones,
    Car,
    Home,
    Utensils,
    Gamepad,
}

impl CategoryIcon {
    pub const ALL: [CategoryIcon; 12] = [
        CategoryIcon::Package,
        CategoryIcon::Smartphone,
        CategoryIcon::Shirt,
        CategoryIcon::Sofa,
        CategoryIcon::Book,
        CategoryIcon::Dumbbell,
        CategoryIcon::Monitor,
        CategoryIcon::Headphones,
        CategoryIcon::Car,
        CategoryIcon::Home,
        CategoryIcon::Utensils,
        CategoryIcon::Gamepad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryIcon::Package => "package",
            CategoryIcon::Smartphone => "smartphone",
            CategoryIcon::Shirt => "shirt",
            CategoryIcon::Sofa => "sofa",
            CategoryIcon::Book => "book",
            CategoryIcon::Dumbbell => "dumbbell",
            CategoryIcon::Monitor => "monitor",
            CategoryIcon::Headphones => "headphones",
            CategoryIcon::Car => "car",
            CategoryIcon::Home => "home",
            CategoryIcon::Utensils => "utensils",
            CategoryIcon::Gamepad => "gamepad",
        }
    }
}

/// A grouping label for products, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_color")]
    pub color: HexColor,
    #[serde(default)]
    pub icon: CategoryIcon,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn from_fields(id: CategoryId, fields: CategoryFields, now: DateTime<Utc>) -> Self {
        let mut category = Self {
            id,
            name: String::new(),
            description: None,
            color: HexColor::default(),
            icon: CategoryIcon::default(),
            created_at: now,
        };
        category.replace_fields(fields);
        category
    }

    pub fn replace_fields(&mut self, fields: CategoryFields) {
        let fields = fields.normalized();
        self.name = fields.name;
        self.description = fields.description;
        self.color = fields.color;
        self.icon = fields.icon;
    }

    /// The name/color pair a joined product row carries.
    pub fn badge(&self) -> CategoryBadge {
        CategoryBadge {
            name: self.name.clone(),
            color: self.color.clone(),
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Category columns embedded into a product row by the store's join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBadge {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_color")]
    pub color: HexColor,
}

/// Fields submitted by the category form for insert and update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryFields {
    pub name: String,
    pub description: Option<String>,
    pub color: HexColor,
    pub icon: CategoryIcon,
}

impl CategoryFields {
    /// Clear a blank description so every store receives the same record.
    pub fn normalized(mut self) -> Self {
        self.description = self.description.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }
}
