//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use threadline_core::ProductId;
use tracing::instrument;

use crate::catalog::{Category, Product, ProductFilter};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product display data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub image_url: String,
    pub price: String,
    pub compare_at_price: Option<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

impl ProductView {
    fn from_product(product: &Product, state: &AppState) -> Self {
        Self {
            handle: product.handle.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category,
            image_url: product.image_url.clone(),
            price: state.format_price(product.effective_price()),
            compare_at_price: product
                .is_on_sale()
                .then(|| state.format_price(product.price)),
            sizes: product.sizes.clone(),
            colors: product.colors.clone(),
        }
    }
}

/// Product listing, filtered and sorted by query parameters.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Json<Vec<ProductView>> {
    let products = state
        .catalog()
        .list(&filter)
        .into_iter()
        .map(|product| ProductView::from_product(product, &state))
        .collect();
    Json(products)
}

/// Product detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(handle): Path<ProductId>,
) -> Result<Json<ProductView>> {
    let product = state
        .catalog()
        .get(&handle)
        .ok_or_else(|| AppError::NotFound(format!("product {handle}")))?;
    Ok(Json(ProductView::from_product(product, &state)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::catalog::{Catalog, ProductSort};
    use crate::config::StorefrontConfig;

    fn state() -> AppState {
        AppState::new(StorefrontConfig::default(), Catalog::mock())
    }

    #[tokio::test]
    async fn test_index_filters_on_sale() {
        let filter = ProductFilter {
            on_sale: Some(true),
            sort: ProductSort::PriceDesc,
            ..ProductFilter::default()
        };
        let Json(products) = index(State(state()), Query(filter)).await;

        assert_eq!(products.len(), 3);
        assert!(products.iter().all(|p| p.compare_at_price.is_some()));
        assert_eq!(products.first().unwrap().handle, "silk-wrap-dress");
    }

    #[tokio::test]
    async fn test_show_formats_prices() {
        let Json(product) = show(State(state()), Path(ProductId::new("merino-crew")))
            .await
            .unwrap();
        assert_eq!(product.price, "$66.50");
        assert_eq!(product.compare_at_price.as_deref(), Some("$95.00"));
    }

    #[tokio::test]
    async fn test_show_missing_product() {
        let err = show(State(state()), Path(ProductId::new("missing")))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
