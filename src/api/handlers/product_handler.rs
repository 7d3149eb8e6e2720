//! Product handlers (kiosk browse + staff management).

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewProduct, Product, ProductPatch};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::{ApiResponse, Created};

/// Product creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Classic Burger")]
    pub name: String,
    /// Defaults to an empty string, not null
    pub description: Option<String>,
    #[schema(example = 5.99)]
    pub price: Decimal,
    #[schema(example = 1)]
    pub category_id: i64,
    pub image_url: Option<String>,
}

/// Product partial update; only supplied fields are written.
/// A price of exactly 0.00 is a valid update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
}

/// Identifier of a freshly created product
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductCreated {
    #[schema(example = 1)]
    pub product_id: i64,
}

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/category/:category_id", get(list_products_by_category))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// List available products for the kiosk
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "Available products with category metadata", body = [Product]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = state.products.list_available().await?;
    let count = products.len();
    Ok(Json(ApiResponse::with_count(products, count)))
}

/// List available products of one category
#[utoipa::path(
    get,
    path = "/api/products/category/{category_id}",
    tag = "Products",
    params(("category_id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Available products in the category", body = [Product]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = state.products.list_by_category(category_id).await?;
    let count = products.len();
    Ok(Json(ApiResponse::with_count(products, count)))
}

/// Get a product by id (available or not)
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state.products.get(id).await?.ok_or_not_found()?;
    Ok(Json(ApiResponse::success(product)))
}

/// Create a new product (staff)
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductCreated),
        (status = 400, description = "Missing required field: name, price or category_id"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<Created<ProductCreated>> {
    if payload.price < Decimal::ZERO {
        return Err(AppError::validation("price must be non-negative"));
    }

    let product_id = state
        .products
        .create(NewProduct {
            name: payload.name,
            description: payload.description.unwrap_or_default(),
            price: payload.price,
            category_id: payload.category_id,
            image_url: payload.image_url,
        })
        .await?;

    Ok(Created(ProductCreated { product_id }, "Product created"))
}

/// Partially update a product (staff)
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated"),
        (status = 400, description = "No fields to update"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    if payload.price.is_some_and(|p| p < Decimal::ZERO) {
        return Err(AppError::validation("price must be non-negative"));
    }

    state
        .products
        .update(
            id,
            ProductPatch {
                name: payload.name,
                description: payload.description,
                price: payload.price,
                category_id: payload.category_id,
                image_url: payload.image_url,
            },
        )
        .await?;

    Ok(Json(ApiResponse::message("Product updated")))
}

/// Soft-delete a product (staff): hides it from listings, keeps the row
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product removed from listings"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.products.soft_delete(id).await?;
    Ok(Json(ApiResponse::message("Product deleted")))
}
