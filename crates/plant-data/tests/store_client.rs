//! Integration tests for `StoreClient` using wiremock HTTP mocks.

use plant_commerce::prelude::*;
use plant_data::{FetchError, NewProduct, StoreApi, StoreClient};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> StoreClient {
    StoreClient::with_base_url(base_url, 5).expect("client construction should not fail")
}

#[tokio::test]
async fn list_products_returns_parsed_products() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "id": "1",
            "name": "Rose",
            "price": 10000,
            "category": {"lv0": "Outdoor", "lv1": "Flower"},
            "images": ["/images/rose-1.png"],
            "comments": [{"id": "c1", "rating": 4, "content": "Fragrant"}]
        },
        {"id": "2", "name": "Lily", "price": "20000"}
    ]);

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client.list_products().await.expect("should parse products");

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Rose");
    assert_eq!(products[0].category.secondary(), Some("Flower"));
    assert_eq!(products[0].comments.len(), 1);
    assert_eq!(products[1].price, Price::new(20_000));
}

#[tokio::test]
async fn get_product_hits_item_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "7", "name": "Monstera", "price": 250000})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let product = client
        .get_product(&ProductId::new("7"))
        .await
        .expect("should parse product");

    assert_eq!(product.id.as_str(), "7");
    assert_eq!(product.price, Price::new(250_000));
}

#[tokio::test]
async fn missing_product_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .get_product(&ProductId::new("404"))
        .await
        .expect_err("404 should be an error");

    assert!(err.is_not_found());
    assert!(!err.is_server_error());
}

#[tokio::test]
async fn server_error_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.list_orders().await.expect_err("503 should be an error");

    match err {
        FetchError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/orders"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list_categories()
        .await
        .expect_err("HTML is not a category list");

    assert!(matches!(err, FetchError::Deserialize { .. }));
}

#[tokio::test]
async fn list_orders_reads_nested_products() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {"id": "o1", "products": [{"id": "1", "quantity": 3}]},
        {"id": "o2", "products": [{"id": "1", "quantity": 2}, {"id": "2", "quantity": 1}]}
    ]);

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let orders = client.list_orders().await.expect("should parse orders");

    assert_eq!(orders.len(), 2);
    assert_eq!(units_sold(&ProductId::new("1"), &orders), 5);
}

#[tokio::test]
async fn list_categories_returns_tree() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {"id": "c1", "lv0": "Indoor", "lv1": ["Fern", "Cactus"]},
        {"id": "c2", "lv0": "Outdoor"}
    ]);

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let categories = client.list_categories().await.expect("should parse categories");

    assert_eq!(categories.len(), 2);
    assert!(categories[0].has_child("Cactus"));
    assert!(categories[1].lv1.is_empty());
}

#[tokio::test]
async fn create_product_posts_editable_fields_only() {
    let server = MockServer::start().await;

    let product = Product::new("1700000000000", "Fern", Price::new(45_000))
        .with_category(ProductCategory::new("Indoor", None));

    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_partial_json(serde_json::json!({
            "id": "1700000000000",
            "name": "Fern",
            "price": 45000,
            "category": {"lv0": "Indoor"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&product))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let created = client
        .create_product(&NewProduct::from(&product))
        .await
        .expect("create should succeed");
    assert_eq!(created.name, "Fern");

    let requests = server.received_requests().await.expect("recording is on");
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(sent.get("comments").is_none());
    assert!(sent.get("sales").is_none());
}

#[tokio::test]
async fn update_product_puts_full_product() {
    let server = MockServer::start().await;

    let product = Product::new("5", "Aloe", Price::new(30_000))
        .with_comment(Comment::new("c1", 5.0, "easy care"));

    Mock::given(method("PUT"))
        .and(path("/products/5"))
        .and(body_partial_json(serde_json::json!({
            "comments": [{"id": "c1", "rating": 5.0, "content": "easy care"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&product))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let updated = client.update_product(&product).await.expect("update should succeed");
    assert_eq!(updated, product);
}

#[tokio::test]
async fn update_product_tolerates_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/products/5"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let product = Product::new("5", "Aloe", Price::new(30_000));
    let updated = client.update_product(&product).await.expect("update should succeed");
    assert_eq!(updated, product);
}

#[tokio::test]
async fn delete_product_hits_item_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/products/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .delete_product(&ProductId::new("2"))
        .await
        .expect("delete should succeed");
}
