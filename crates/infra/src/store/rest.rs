//! REST client for a PostgREST-style hosted database.
//!
//! Filtering, ordering, joins and counts are expressed as query parameters and
//! evaluated server-side:
//!
//! - `select=*,categories(name,color)` embeds the category badge into product rows
//! - `order=created_at.desc` / `order=name.asc`
//! - `category_id=eq.<uuid>` and friends for filters
//! - `Prefer: count=exact` plus `Content-Range` for counts

use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::instrument;

use stockroom_catalog::{Category, CategoryFields, Product, ProductFields};
use stockroom_core::{CategoryId, ProductId};

use super::r#trait::{CatalogStore, ProductFilter, ProductListing, StoreError, StoreResult};

const PRODUCTS: &str = "products";
const CATEGORIES: &str = "categories";
const PRODUCT_SELECT: &str = "*,categories(name,color)";

/// Connection settings for the hosted database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestConfig {
    /// Project base URL; the REST endpoint lives under `/rest/v1`.
    pub base_url: String,
    /// API key, sent both as `apikey` and as a bearer token.
    pub api_key: Option<String>,
}

impl RestConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }
}

/// [`CatalogStore`] backed by a hosted PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct RestCatalogStore {
    client: Client,
    config: RestConfig,
}

impl RestCatalogStore {
    pub fn new(config: RestConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn with_client(client: Client, config: RestConfig) -> Self {
        Self { client, config }
    }

    fn request(&self, method: reqwest::Method, table: &str) -> RequestBuilder {
        let mut req = self.client.request(method, self.config.table_url(table));
        if let Some(key) = &self.config.api_key {
            req = req.header("apikey", key).bearer_auth(key);
        }
        req
    }

    fn returning(req: RequestBuilder) -> RequestBuilder {
        req.header("Prefer", "return=representation")
    }
}

async fn send(req: RequestBuilder) -> StoreResult<Response> {
    let resp = req
        .send()
        .await
        .map_err(|e| StoreError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        return Err(StoreError::Rejected {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

async fn read_json<T: DeserializeOwned>(req: RequestBuilder) -> StoreResult<T> {
    send(req)
        .await?
        .json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

/// First row of a `return=representation` response, or `NotFound` when the
/// filter matched nothing.
async fn read_single<T: DeserializeOwned>(req: RequestBuilder) -> StoreResult<T> {
    read_json::<Vec<T>>(req)
        .await?
        .into_iter()
        .next()
        .ok_or(StoreError::NotFound)
}

fn eq(value: impl core::fmt::Display) -> String {
    format!("eq.{value}")
}

/// Total from a `Content-Range` header (`0-24/3573`, `*/0`). `None` when the
/// server did not compute a total (`0-24/*`).
pub(crate) fn parse_content_range_total(value: &str) -> Option<u64> {
    let (_, total) = value.rsplit_once('/')?;
    total.trim().parse().ok()
}

fn product_query(filter: &ProductFilter) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("select", PRODUCT_SELECT.to_string()),
        ("order", "created_at.desc".to_string()),
    ];
    if let Some(category_id) = filter.category_id {
        query.push(("category_id", eq(category_id)));
    }
    if filter.active_only {
        query.push(("is_active", eq(true)));
    }
    query
}

#[async_trait::async_trait]
impl CatalogStore for RestCatalogStore {
    #[instrument(skip(self), err)]
    async fn list_products(&self, filter: &ProductFilter) -> StoreResult<Vec<ProductListing>> {
        let req = self
            .request(reqwest::Method::GET, PRODUCTS)
            .query(&product_query(filter));
        let rows: Vec<ProductListing> = read_json(req).await?;
        tracing::debug!(count = rows.len(), "listed products");
        Ok(rows)
    }

    #[instrument(skip(self), fields(product_id = %id), err)]
    async fn get_product(&self, id: ProductId) -> StoreResult<ProductListing> {
        let req = self
            .request(reqwest::Method::GET, PRODUCTS)
            .query(&[("select", PRODUCT_SELECT.to_string()), ("id", eq(id))]);
        read_single(req).await
    }

    #[instrument(skip(self, fields), err)]
    async fn insert_product(&self, fields: &ProductFields) -> StoreResult<Product> {
        let req = Self::returning(self.request(reqwest::Method::POST, PRODUCTS)).json(&[fields]);
        read_single(req).await
    }

    #[instrument(skip(self, fields), fields(product_id = %id), err)]
    async fn update_product(&self, id: ProductId, fields: &ProductFields) -> StoreResult<Product> {
        let req = Self::returning(self.request(reqwest::Method::PATCH, PRODUCTS))
            .query(&[("id", eq(id))])
            .json(fields);
        read_single(req).await
    }

    #[instrument(skip(self), fields(product_id = %id), err)]
    async fn delete_product(&self, id: ProductId) -> StoreResult<()> {
        let req = self
            .request(reqwest::Method::DELETE, PRODUCTS)
            .query(&[("id", eq(id))]);
        send(req).await?;
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let req = self
            .request(reqwest::Method::GET, CATEGORIES)
            .query(&[("select", "*"), ("order", "name.asc")]);
        read_json(req).await
    }

    #[instrument(skip(self), fields(category_id = %id), err)]
    async fn count_products_by_category(&self, id: CategoryId) -> StoreResult<u64> {
        let req = self
            .request(reqwest::Method::HEAD, PRODUCTS)
            .header("Prefer", "count=exact")
            .query(&[("select", "*".to_string()), ("category_id", eq(id))]);
        let resp = send(req).await?;

        let range = resp
            .headers()
            .get(header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| StoreError::Decode("missing Content-Range header".to_string()))?;
        parse_content_range_total(range)
            .ok_or_else(|| StoreError::Decode(format!("unexpected Content-Range: {range}")))
    }

    #[instrument(skip(self, fields), err)]
    async fn insert_category(&self, fields: &CategoryFields) -> StoreResult<Category> {
        let req = Self::returning(self.request(reqwest::Method::POST, CATEGORIES)).json(&[fields]);
        read_single(req).await
    }

    #[instrument(skip(self, fields), fields(category_id = %id), err)]
    async fn update_category(&self, id: CategoryId, fields: &CategoryFields) -> StoreResult<Category> {
        let req = Self::returning(self.request(reqwest::Method::PATCH, CATEGORIES))
            .query(&[("id", eq(id))])
            .json(fields);
        read_single(req).await
    }

    #[instrument(skip(self), fields(category_id = %id), err)]
    async fn delete_category(&self, id: CategoryId) -> StoreResult<()> {
        let req = self
            .request(reqwest::Method::DELETE, CATEGORIES)
            .query(&[("id", eq(id))]);
        send(req).await?;
        Ok(())
    }
}
