//! Seed command - Populates default categories and sample products.
//!
//! Idempotent: categories already present by name are skipped, and sample
//! products are only inserted while the product table is empty.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::config::Config;
use crate::domain::{NewCategory, NewProduct};
use crate::errors::AppResult;
use crate::infra::repositories::{CategoryRepository, ProductRepository};
use crate::infra::{schema, Store};

/// Default category set shown on a fresh kiosk
const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("Burgers", "Classic burgers", "🍔"),
    ("Drinks", "Soft drinks and more", "🥤"),
    ("Sides", "Fries and friends", "🍟"),
    ("Specials", "One-of-a-kind creations", "🥪"),
    ("Desserts", "Sweets and ice cream", "🍨"),
];

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let store = Arc::new(Store::connect(&config).await?);
    schema::bootstrap(&store).await?;

    let categories = CategoryRepository::new(store.clone());
    let products = ProductRepository::new(store);

    seed_categories(&categories).await?;
    seed_products(&categories, &products).await?;

    Ok(())
}

async fn seed_categories(categories: &CategoryRepository) -> AppResult<()> {
    let existing: Vec<String> = categories
        .list()
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();

    let mut added = 0;
    for (position, (name, description, icon)) in DEFAULT_CATEGORIES.iter().enumerate() {
        if existing.iter().any(|n| n == name) {
            continue;
        }
        categories
            .create(NewCategory {
                name: (*name).to_string(),
                description: Some((*description).to_string()),
                icon: Some((*icon).to_string()),
                order_position: position as i32 + 1,
            })
            .await?;
        added += 1;
    }

    if added > 0 {
        tracing::info!("Added {} default categories", added);
    } else {
        tracing::info!("All default categories already present, skipping");
    }
    Ok(())
}

async fn seed_products(
    categories: &CategoryRepository,
    products: &ProductRepository,
) -> AppResult<()> {
    if !products.list_available().await?.is_empty() {
        tracing::info!("Products already present, skipping sample data");
        return Ok(());
    }

    tracing::info!("Adding sample products");
    let samples: &[(&str, &str, &str, &str)] = &[
        ("Burgers", "Classic Burger", "Beef, lettuce, tomato", "5.99"),
        ("Burgers", "Cheese Burger", "With extra cheese", "6.99"),
        ("Drinks", "Cola", "33cl can", "2.50"),
        ("Sides", "French Fries", "Medium portion", "3.00"),
    ];

    for (category_name, name, description, price) in samples {
        let Some(category) = categories.get_by_name(category_name).await? else {
            continue;
        };
        products
            .create(NewProduct {
                name: (*name).to_string(),
                description: (*description).to_string(),
                price: price.parse::<Decimal>().unwrap_or_default(),
                category_id: category.id,
                image_url: None,
            })
            .await?;
    }

    Ok(())
}
