use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, DomainError, DomainResult, Entity, ProductId};

/// Unit a product's stock quantity is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfMeasure {
    #[default]
    Piece,
    Kilogram,
    Liter,
    Meter,
    Box,
    Carton,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 6] = [
        UnitOfMeasure::Piece,
        UnitOfMeasure::Kilogram,
        UnitOfMeasure::Liter,
        UnitOfMeasure::Meter,
        UnitOfMeasure::Box,
        UnitOfMeasure::Carton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitOfMeasure::Piece => "piece",
            UnitOfMeasure::Kilogram => "kilogram",
            UnitOfMeasure::Liter => "liter",
            UnitOfMeasure::Meter => "meter",
            UnitOfMeasure::Box => "box",
            UnitOfMeasure::Carton => "carton",
        }
    }
}

/// A sellable inventory item, as stored.
///
/// Identifier and timestamps are assigned by the backing store. Everything else
/// comes from [`ProductFields`] and is replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub sku: String,
    /// Sell price.
    pub price: Decimal,
    #[serde(default)]
    pub cost_price: Decimal,
    #[serde(default)]
    pub stock_quantity: u32,
    #[serde(default)]
    pub min_stock_level: u32,
    #[serde(default)]
    pub max_stock_level: u32,
    #[serde(default)]
    pub unit: UnitOfMeasure,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub weight: Option<Decimal>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Product {
    /// Materialize a stored product from submitted fields.
    ///
    /// Used by stores that assign identity themselves (the in-memory store);
    /// hosted stores return the row they created instead.
    pub fn from_fields(id: ProductId, fields: ProductFields, now: DateTime<Utc>) -> Self {
        let mut product = Self {
            id,
            name: String::new(),
            description: None,
            sku: String::new(),
            price: Decimal::ZERO,
            cost_price: Decimal::ZERO,
            stock_quantity: 0,
            min_stock_level: 0,
            max_stock_level: 0,
            unit: UnitOfMeasure::default(),
            is_active: true,
            barcode: None,
            weight: None,
            category_id: None,
            created_at: now,
            updated_at: now,
        };
        product.replace_fields(fields, now);
        product
    }

    /// Full-record replace: every user-editable field is overwritten.
    pub fn replace_fields(&mut self, fields: ProductFields, now: DateTime<Utc>) {
        let fields = fields.normalized();
        self.name = fields.name;
        self.description = fields.description;
        self.sku = fields.sku;
        self.price = fields.price;
        self.cost_price = fields.cost_price;
        self.stock_quantity = fields.stock_quantity;
        self.min_stock_level = fields.min_stock_level;
        self.max_stock_level = fields.max_stock_level;
        self.unit = fields.unit;
        self.is_active = fields.is_active;
        self.barcode = fields.barcode;
        self.weight = fields.weight;
        self.category_id = fields.category_id;
        self.updated_at = now;
    }

    /// The editable fields of this product (pre-fills the edit form).
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone(),
            sku: self.sku.clone(),
            price: self.price,
            cost_price: self.cost_price,
            stock_quantity: self.stock_quantity,
            min_stock_level: self.min_stock_level,
            max_stock_level: self.max_stock_level,
            unit: self.unit,
            is_active: self.is_active,
            barcode: self.barcode.clone(),
            weight: self.weight,
            category_id: self.category_id,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fields submitted by the product form for insert and update.
///
/// Missing keys fall back to the form defaults, so a payload carrying only the
/// required fields is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFields {
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    pub price: Decimal,
    pub cost_price: Decimal,
    pub stock_quantity: u32,
    pub min_stock_level: u32,
    pub max_stock_level: u32,
    pub unit: UnitOfMeasure,
    pub is_active: bool,
    pub barcode: Option<String>,
    pub weight: Option<Decimal>,
    pub category_id: Option<CategoryId>,
}

impl Default for ProductFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            sku: String::new(),
            price: Decimal::ZERO,
            cost_price: Decimal::ZERO,
            stock_quantity: 0,
            min_stock_level: 5,
            max_stock_level: 1000,
            unit: UnitOfMeasure::Piece,
            is_active: true,
            barcode: None,
            weight: Some(Decimal::ZERO),
            category_id: None,
        }
    }
}

/// Blank optional text counts as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ProductFields {
    /// Clear blank optional text so every store receives the same record.
    pub fn normalized(mut self) -> Self {
        self.description = non_blank(self.description);
        self.barcode = non_blank(self.barcode);
        self
    }

    /// Check the fields the form marks as required.
    ///
    /// `min_stock_level <= max_stock_level` is deliberately not checked here;
    /// callers may log it but the store accepts either order.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }

        // Note: SKU uniqueness across the catalog needs the store; the domain only
        // sees one record at a time.

        if self.price < Decimal::ZERO {
            return Err(DomainError::validation("price cannot be negative"));
        }

        if self.cost_price < Decimal::ZERO {
            return Err(DomainError::validation("cost price cannot be negative"));
        }

        if let Some(weight) = self.weight {
            if weight < Decimal::ZERO {
                return Err(DomainError::validation("weight cannot be negative"));
            }
        }

        Ok(())
    }

    /// True when the reorder threshold sits above the capacity threshold.
    pub fn has_inverted_thresholds(&self) -> bool {
        self.min_stock_level > self.max_stock_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn widget_fields() -> ProductFields {
        ProductFields {
            name: "Widget".to_string(),
            sku: "WID-001".to_string(),
            price: dec("19.99"),
            cost_price: dec("12.50"),
            stock_quantity: 40,
            ..ProductFields::default()
        }
    }

    #[test]
    fn defaults_match_the_new_product_form() {
        let fields = ProductFields::default();
        assert_eq!(fields.min_stock_level, 5);
        assert_eq!(fields.max_stock_level, 1000);
        assert_eq!(fields.unit, UnitOfMeasure::Piece);
        assert!(fields.is_active);
        assert_eq!(fields.category_id, None);
    }

    #[test]
    fn validate_accepts_complete_fields() {
        assert_eq!(widget_fields().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let fields = ProductFields {
            name: "   ".to_string(),
            ..widget_fields()
        };
        match fields.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("name")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_blank_sku() {
        let fields = ProductFields {
            sku: String::new(),
            ..widget_fields()
        };
        match fields.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("SKU")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_negative_money() {
        let fields = ProductFields {
            price: dec("-1"),
            ..widget_fields()
        };
        assert!(matches!(fields.validate(), Err(DomainError::Validation(_))));

        let fields = ProductFields {
            cost_price: dec("-0.01"),
            ..widget_fields()
        };
        assert!(matches!(fields.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn inverted_thresholds_are_reported_but_not_rejected() {
        let fields = ProductFields {
            min_stock_level: 50,
            max_stock_level: 10,
            ..widget_fields()
        };
        assert!(fields.has_inverted_thresholds());
        assert_eq!(fields.validate(), Ok(()));
    }

    #[test]
    fn replace_fields_overwrites_everything_and_bumps_updated_at() {
        let created = Utc::now();
        let mut product = Product::from_fields(ProductId::new(), widget_fields(), created);
        let later = created + chrono::Duration::seconds(5);

        let replacement = ProductFields {
            name: "Gadget".to_string(),
            sku: "GAD-002".to_string(),
            description: Some("  ".to_string()),
            ..ProductFields::default()
        };
        product.replace_fields(replacement, later);

        assert_eq!(product.name, "Gadget");
        assert_eq!(product.sku, "GAD-002");
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.description, None);
        assert_eq!(product.created_at, created);
        assert_eq!(product.updated_at, later);
    }

    #[test]
    fn normalized_clears_blank_optional_text() {
        let fields = ProductFields {
            description: Some("   ".to_string()),
            barcode: Some(String::new()),
            ..widget_fields()
        }
        .normalized();
        assert_eq!(fields.description, None);
        assert_eq!(fields.barcode, None);

        let kept = ProductFields {
            barcode: Some("0123".to_string()),
            ..widget_fields()
        }
        .normalized();
        assert_eq!(kept.barcode.as_deref(), Some("0123"));
    }

    #[test]
    fn cleared_optional_fields_serialize_as_null() {
        let json = serde_json::to_value(widget_fields()).unwrap();
        assert!(json["description"].is_null());
        assert!(json["barcode"].is_null());
        assert!(json.as_object().unwrap().contains_key("description"));
        assert!(json.as_object().unwrap().contains_key("barcode"));
    }

    #[test]
    fn fields_payload_with_only_required_keys_uses_form_defaults() {
        let fields: ProductFields =
            serde_json::from_str(r#"{"name":"Widget","sku":"W-1","price":10,"stock_quantity":3}"#)
                .unwrap();
        assert_eq!(fields.price, dec("10"));
        assert_eq!(fields.stock_quantity, 3);
        assert_eq!(fields.min_stock_level, 5);
        assert_eq!(fields.unit, UnitOfMeasure::Piece);
    }

    #[test]
    fn stored_row_tolerates_missing_optional_columns() {
        let id = ProductId::new();
        let json = format!(
            r#"{{"id":"{id}","name":"Bolt","sku":"B-1","price":"0.25",
                "created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z"}}"#
        );
        let product: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product.stock_quantity, 0);
        assert_eq!(product.weight, None);
        assert!(product.is_active);
    }
}
