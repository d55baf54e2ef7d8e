//! Catalog domain module.
//!
//! Records for products and categories as the backing store holds them, the field
//! sets submitted by the product/category forms, and the small amount of
//! validation those forms get before a mutation is issued (no IO, no HTTP, no
//! storage).

pub mod category;
pub mod product;

pub use category::{
    Category, CategoryBadge, CategoryFields, CategoryIcon, HexColor, PRESET_COLORS,
};
pub use product::{Product, ProductFields, UnitOfMeasure};
