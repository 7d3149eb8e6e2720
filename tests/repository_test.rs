//! Storage-level integration tests.
//!
//! These run against a real embedded (in-memory SQLite) store, so the
//! storage adapter, schema bootstrap, and repositories are exercised
//! together without external infrastructure.

use std::sync::Arc;

use rust_decimal::Decimal;

use kiosk_api::domain::{
    CategoryPatch, NewCategory, NewOrderItem, NewProduct, OrderStatus, ProductPatch,
};
use kiosk_api::infra::repositories::{CategoryRepository, OrderRepository, ProductRepository};
use kiosk_api::infra::{schema, Store};

async fn test_store() -> Arc<Store> {
    let store = Store::open("sqlite::memory:")
        .await
        .expect("open embedded store");
    schema::bootstrap(&store).await.expect("bootstrap schema");
    Arc::new(store)
}

fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal literal")
}

fn category(name: &str, position: i32) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        description: None,
        icon: None,
        order_position: position,
    }
}

fn product(name: &str, price: &str, category_id: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: String::new(),
        price: dec(price),
        category_id,
        image_url: None,
    }
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn created_category_round_trips_with_submitted_values() {
    let repo = CategoryRepository::new(test_store().await);

    let id = repo
        .create(NewCategory {
            name: "Burgers".to_string(),
            description: Some("Classic burgers".to_string()),
            icon: Some("🍔".to_string()),
            order_position: 0,
        })
        .await
        .expect("create category");

    let fetched = repo.get(id).await.unwrap().expect("category exists");
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.name, "Burgers");
    assert_eq!(fetched.description.as_deref(), Some("Classic burgers"));
    assert_eq!(fetched.icon.as_deref(), Some("🍔"));
    assert_eq!(fetched.order_position, 0);
}

#[tokio::test]
async fn duplicate_category_name_is_rejected() {
    let repo = CategoryRepository::new(test_store().await);

    repo.create(category("Drinks", 0)).await.expect("first create");
    let duplicate = repo.create(category("Drinks", 1)).await;
    assert!(duplicate.is_err());
}

#[tokio::test]
async fn category_lookup_by_name() {
    let repo = CategoryRepository::new(test_store().await);
    let id = repo.create(category("Sides", 3)).await.unwrap();

    let found = repo.get_by_name("Sides").await.unwrap().expect("found");
    assert_eq!(found.id, id);
    assert!(repo.get_by_name("Nope").await.unwrap().is_none());
}

#[tokio::test]
async fn empty_category_patch_reports_failure() {
    let repo = CategoryRepository::new(test_store().await);
    let id = repo.create(category("Desserts", 5)).await.unwrap();

    let result = repo.update(id, CategoryPatch::default()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn single_field_patch_leaves_other_fields_untouched() {
    let repo = CategoryRepository::new(test_store().await);
    let id = repo
        .create(NewCategory {
            name: "Specials".to_string(),
            description: Some("One-offs".to_string()),
            icon: Some("🥪".to_string()),
            order_position: 4,
        })
        .await
        .unwrap();

    repo.update(
        id,
        CategoryPatch {
            name: Some("Weekly Specials".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("patch applies");

    let updated = repo.get(id).await.unwrap().unwrap();
    assert_eq!(updated.name, "Weekly Specials");
    assert_eq!(updated.description.as_deref(), Some("One-offs"));
    assert_eq!(updated.icon.as_deref(), Some("🥪"));
    assert_eq!(updated.order_position, 4);
}

#[tokio::test]
async fn deleted_category_is_gone() {
    let repo = CategoryRepository::new(test_store().await);
    let id = repo.create(category("Temp", 0)).await.unwrap();

    repo.delete(id).await.expect("delete");
    assert!(repo.get(id).await.unwrap().is_none());
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn categories_list_in_display_order() {
    let repo = CategoryRepository::new(test_store().await);
    repo.create(category("Zebra", 2)).await.unwrap();
    repo.create(category("Drinks", 1)).await.unwrap();
    repo.create(category("Apples", 2)).await.unwrap();

    let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["Drinks", "Apples", "Zebra"]);
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn soft_deleted_product_stays_fetchable_but_unlisted() {
    let store = test_store().await;
    let categories = CategoryRepository::new(store.clone());
    let products = ProductRepository::new(store);

    let category_id = categories.create(category("Burgers", 1)).await.unwrap();
    let id = products
        .create(product("Classic Burger", "5.99", category_id))
        .await
        .unwrap();

    products.soft_delete(id).await.expect("soft delete");

    assert!(products.list_available().await.unwrap().is_empty());
    assert!(products
        .list_by_category(category_id)
        .await
        .unwrap()
        .is_empty());

    let fetched = products.get(id).await.unwrap().expect("still fetchable");
    assert!(!fetched.available);
    assert_eq!(fetched.name, "Classic Burger");
}

#[tokio::test]
async fn product_listing_joins_category_metadata() {
    let store = test_store().await;
    let categories = CategoryRepository::new(store.clone());
    let products = ProductRepository::new(store);

    let category_id = categories
        .create(NewCategory {
            name: "Drinks".to_string(),
            description: None,
            icon: Some("🥤".to_string()),
            order_position: 2,
        })
        .await
        .unwrap();
    products.create(product("Cola", "2.50", category_id)).await.unwrap();

    let listed = products.list_available().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].category_name.as_deref(), Some("Drinks"));
    assert_eq!(listed[0].category_icon.as_deref(), Some("🥤"));
    assert_eq!(listed[0].price, dec("2.50"));
}

#[tokio::test]
async fn product_price_is_decimal_stable() {
    let store = test_store().await;
    let categories = CategoryRepository::new(store.clone());
    let products = ProductRepository::new(store);

    let category_id = categories.create(category("Burgers", 1)).await.unwrap();
    let id = products
        .create(product("Classic Burger", "5.99", category_id))
        .await
        .unwrap();

    let fetched = products.get(id).await.unwrap().unwrap();
    assert_eq!(fetched.price, dec("5.99"));
    assert_eq!(fetched.price.to_string(), "5.99");
}

#[tokio::test]
async fn zero_price_patch_is_applied() {
    let store = test_store().await;
    let categories = CategoryRepository::new(store.clone());
    let products = ProductRepository::new(store);

    let category_id = categories.create(category("Sides", 1)).await.unwrap();
    let id = products
        .create(product("Fries", "3.00", category_id))
        .await
        .unwrap();

    products
        .update(
            id,
            ProductPatch {
                price: Some(Decimal::ZERO),
                ..Default::default()
            },
        )
        .await
        .expect("zero price applies");

    let updated = products.get(id).await.unwrap().unwrap();
    assert_eq!(updated.price, Decimal::ZERO);
    assert_eq!(updated.name, "Fries");
}

#[tokio::test]
async fn empty_product_patch_reports_failure() {
    let store = test_store().await;
    let categories = CategoryRepository::new(store.clone());
    let products = ProductRepository::new(store);

    let category_id = categories.create(category("Sides", 1)).await.unwrap();
    let id = products
        .create(product("Fries", "3.00", category_id))
        .await
        .unwrap();

    assert!(products.update(id, ProductPatch::default()).await.is_err());
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn order_items_keep_their_price_snapshot() {
    let store = test_store().await;
    let categories = CategoryRepository::new(store.clone());
    let products = ProductRepository::new(store.clone());
    let orders = OrderRepository::new(store);

    let category_id = categories.create(category("Burgers", 1)).await.unwrap();
    let product_id = products
        .create(product("Classic Burger", "5.99", category_id))
        .await
        .unwrap();

    let created = orders
        .create(
            dec("11.98"),
            &[NewOrderItem {
                product_id,
                quantity: 2,
                price: dec("5.99"),
            }],
        )
        .await
        .expect("create order");

    // A later product price change must not touch the stored snapshot
    products
        .update(
            product_id,
            ProductPatch {
                price: Some(dec("7.99")),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let items = orders.items(created.order_id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].price, dec("5.99"));
    assert_eq!(items[0].product_name, "Classic Burger");

    let order = orders.get(created.order_id).await.unwrap().unwrap();
    assert_eq!(order.total_price, dec("11.98"));
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(created.order_number.starts_with("ORD-"));
}

#[tokio::test]
async fn order_creation_persists_every_item() {
    let store = test_store().await;
    let categories = CategoryRepository::new(store.clone());
    let products = ProductRepository::new(store.clone());
    let orders = OrderRepository::new(store);

    let category_id = categories.create(category("Drinks", 1)).await.unwrap();
    let cola = products.create(product("Cola", "2.50", category_id)).await.unwrap();
    let water = products.create(product("Water", "1.50", category_id)).await.unwrap();

    let created = orders
        .create(
            dec("6.50"),
            &[
                NewOrderItem {
                    product_id: cola,
                    quantity: 2,
                    price: dec("2.50"),
                },
                NewOrderItem {
                    product_id: water,
                    quantity: 1,
                    price: dec("1.50"),
                },
            ],
        )
        .await
        .unwrap();

    let with_items = orders
        .get_with_items(created.order_id)
        .await
        .unwrap()
        .expect("order exists");
    assert_eq!(with_items.items.len(), 2);
}

#[tokio::test]
async fn status_update_is_persisted_without_a_transition_graph() {
    let store = test_store().await;
    let orders = OrderRepository::new(store);

    let created = orders.create(dec("1.00"), &[]).await.unwrap();

    orders
        .update_status(created.order_id, OrderStatus::Delivered)
        .await
        .unwrap();
    // Any status may follow any other, including delivered -> pending
    orders
        .update_status(created.order_id, OrderStatus::Pending)
        .await
        .unwrap();

    let order = orders.get(created.order_id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
}

#[tokio::test]
async fn listing_by_status_filters() {
    let store = test_store().await;
    let orders = OrderRepository::new(store);

    let first = orders.create(dec("1.00"), &[]).await.unwrap();
    orders.create(dec("2.00"), &[]).await.unwrap();
    orders
        .update_status(first.order_id, OrderStatus::Preparing)
        .await
        .unwrap();

    let preparing = orders.list_by_status(OrderStatus::Preparing).await.unwrap();
    assert_eq!(preparing.len(), 1);
    assert_eq!(preparing[0].id, first.order_id);

    let ready = orders.list_by_status(OrderStatus::Ready).await.unwrap();
    assert!(ready.is_empty());

    assert_eq!(orders.list().await.unwrap().len(), 2);

    let nested = orders.list_with_items(None).await.unwrap();
    assert_eq!(nested.len(), 2);
}
