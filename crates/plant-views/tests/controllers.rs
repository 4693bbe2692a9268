//! Controllers driven against a mocked backend over HTTP.

use std::sync::Arc;

use plant_auth::{AuthSession, User};
use plant_commerce::prelude::*;
use plant_data::StoreClient;
use plant_views::adapters::{RecordingNavigator, RecordingNotifier, SessionAuth, SharedCart};
use plant_views::{Locale, Ports, ProductDetail, ProductManager, LOGIN_PATH};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> StoreClient {
    StoreClient::with_base_url(&server.uri(), 5).expect("valid mock URL")
}

async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "name": "Rose", "price": 10000, "category": {"lv0": "Outdoor", "lv1": "Flower"}},
            {"id": "2", "name": "Lily", "price": 20000, "category": {"lv0": "Flower"}},
            {"id": "3", "name": "Cactus", "price": 15000, "category": {"lv0": "Indoor"}}
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "o1", "products": [{"id": "1", "quantity": 3}]},
            {"id": "o2", "products": [{"id": "3", "quantity": 1}, {"id": "1", "quantity": 2}]}
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "c1", "lv0": "Outdoor", "lv1": ["Flower"]},
            {"id": "c2", "lv0": "Indoor", "lv1": []}
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn admin_table_over_http() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let mut manager = ProductManager::new(client(&server), Ports::default());
    manager.load_all().await.expect("catalog should load");

    assert_eq!(manager.products().len(), 3);
    assert_eq!(manager.categories().len(), 2);
    assert_eq!(manager.units_sold(&ProductId::new("1")), 5);

    manager.set_sort(Some(SortSpec::descending(SortKey::UnitsSold)));
    let rows = manager.rows();
    assert_eq!(rows[0].product.name, "Rose");
    assert_eq!(rows[0].tags, vec!["Outdoor", "Flower"]);
    assert_eq!(rows[1].product.name, "Cactus");
    assert_eq!(rows[2].tags, vec!["Flower"]);
}

#[tokio::test]
async fn failed_delete_over_http_keeps_product() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/products/2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let ports = Ports::default().with_notifier(notifier.clone());
    let mut manager = ProductManager::new(client(&server), ports).with_locale(Locale::En);
    manager.load_all().await.expect("catalog should load");

    let id = ProductId::new("2");
    let err = manager.remove(&id).await.expect_err("delete should fail");
    assert!(!err.is_not_found());
    assert!(manager.products().iter().any(|p| p.id == id));
    assert!(manager.filtered().iter().any(|p| p.id == id));
    assert_eq!(notifier.errors(), vec!["Could not delete the product."]);
}

#[tokio::test]
async fn detail_page_over_http() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "name": "Rose",
            "price": 10000,
            "category": {"lv0": "Outdoor", "lv1": "Flower"},
            "images": ["/img/rose.png"],
            "comments": [{"id": "a", "rating": 4}, {"id": "b", "rating": 5}]
        })))
        .mount(&server)
        .await;

    let user = User::customer("lan@example.vn", Some("Lan".into())).expect("valid email");
    let cart = Arc::new(SharedCart::default());
    let ports = Ports::default()
        .with_auth(Arc::new(SessionAuth::new(Some(AuthSession::authenticated(user)))))
        .with_cart(cart.clone());
    let mut page = ProductDetail::new(client(&server), ports);

    page.open(&ProductId::new("1")).await.expect("product should open");
    assert_eq!(page.rating(), 4.5);
    assert_eq!(page.displayed_image(), Some("/img/rose.png"));

    // Rose shares "Outdoor"/"Flower" with itself and "Flower" with Lily.
    let related: Vec<&str> = page.related().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(related, vec!["Rose", "Lily"]);

    page.add_to_cart().expect("signed in");
    assert_eq!(cart.snapshot().item_count(), 1);
}

#[tokio::test]
async fn detail_page_missing_product_logs_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let ports = Ports::default()
        .with_notifier(notifier.clone())
        .with_navigator(navigator.clone());
    let mut page = ProductDetail::new(client(&server), ports);

    let err = page
        .open(&ProductId::new("404"))
        .await
        .expect_err("missing product");
    assert!(err.is_not_found());
    assert!(page.product().is_none());
    assert!(notifier.notices().is_empty());

    assert!(page.add_to_cart().is_err());
    assert_eq!(navigator.last().as_deref(), Some(LOGIN_PATH));
}
