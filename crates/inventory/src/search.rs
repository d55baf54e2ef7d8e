//! Client-side free-text search over an already-fetched collection.

use stockroom_catalog::{Category, Product};

/// A record the search box can match against.
pub trait Searchable {
    /// Text fields the query is matched against. Absent optional fields are
    /// simply left out.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.sku.as_str()];
        if let Some(description) = self.description.as_deref() {
            fields.push(description);
        }
        fields
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(description) = self.description.as_deref() {
            fields.push(description);
        }
        fields
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }
}

/// Case-insensitive substring match of `query` against any searchable field.
/// An empty query matches everything.
pub fn matches<T: Searchable + ?Sized>(query: &str, record: &T) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keep the records matching `query`, preserving order.
pub fn filter<'a, T: Searchable>(query: &str, records: &'a [T]) -> Vec<&'a T> {
    records.iter().filter(|r| matches(query, *r)).collect()
}
