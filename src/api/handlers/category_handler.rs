//! Category handlers (kiosk browse + staff management).

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Category, CategoryPatch, NewCategory};
use crate::errors::{AppResult, OptionExt};
use crate::types::{ApiResponse, Created};

/// Category creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    /// Category name (unique)
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Burgers")]
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional display glyph
    #[schema(example = "🍔")]
    pub icon: Option<String>,
    /// Sort key, defaults to 0
    pub order_position: Option<i32>,
}

/// Category partial update; only supplied fields are written
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order_position: Option<i32>,
}

/// Identifier of a freshly created category
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryCreated {
    #[schema(example = 1)]
    pub category_id: i64,
}

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
}

/// List all categories in display order
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = [Category]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = state.categories.list().await?;
    let count = categories.len();
    Ok(Json(ApiResponse::with_count(categories, count)))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "The category", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = state.categories.get(id).await?.ok_or_not_found()?;
    Ok(Json(ApiResponse::success(category)))
}

/// Create a new category (staff)
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryCreated),
        (status = 400, description = "Missing required field: name"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<Created<CategoryCreated>> {
    let category_id = state
        .categories
        .create(NewCategory {
            name: payload.name,
            description: payload.description,
            icon: payload.icon,
            order_position: payload.order_position.unwrap_or(0),
        })
        .await?;

    Ok(Created(CategoryCreated { category_id }, "Category created"))
}

/// Partially update a category (staff)
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = i64, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated"),
        (status = 400, description = "No fields to update"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .categories
        .update(
            id,
            CategoryPatch {
                name: payload.name,
                description: payload.description,
                icon: payload.icon,
                order_position: payload.order_position,
            },
        )
        .await?;

    Ok(Json(ApiResponse::message("Category updated")))
}

/// Hard-delete a category (staff)
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.categories.delete(id).await?;
    Ok(Json(ApiResponse::message("Category deleted")))
}
