mod common;

use axum::http::StatusCode;
use common::{create_test_app, get, post_json};
use depdemo::cli::AppKind;
use serde_json::json;

#[tokio::test]
async fn test_read_root() {
    let app = create_test_app(AppKind::Params);

    let response = get(&app, "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json, json!({ "message": "Hello, World!" }));
}

// =============================================================================
// Items
// =============================================================================

#[tokio::test]
async fn test_write_and_read_item() {
    let app = create_test_app(AppKind::Params);

    let response = post_json(&app, "/item/", r#"{"name": "naan", "price": 3, "desc": "bread"}"#).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json,
        json!({ "item_id": 0, "item": { "name": "naan", "price": 3, "desc": "bread" } })
    );

    let response = post_json(&app, "/item/", r#"{"name": "dal", "price": 5}"#).await;
    assert_eq!(response.json["item_id"], 1);
    assert_eq!(response.json["item"]["desc"], serde_json::Value::Null);

    let response = get(&app, "/item/1").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json,
        json!({ "item_id": 1, "item": { "name": "dal", "price": 5, "desc": null } })
    );
}

#[tokio::test]
async fn test_read_item_out_of_range() {
    let app = create_test_app(AppKind::Params);

    for uri in ["/item/0", "/item/7", "/item/-1"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status, StatusCode::OK, "{}", uri);
        assert_eq!(response.json, json!({ "message": "error" }), "{}", uri);
    }
}

#[tokio::test]
async fn test_read_item_non_integer_id() {
    let app = create_test_app(AppKind::Params);

    let response = get(&app, "/item/naan").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_write_item_invalid_body() {
    let app = create_test_app(AppKind::Params);

    let missing_price = post_json(&app, "/item/", r#"{"name": "naan"}"#).await;
    assert_eq!(missing_price.status, StatusCode::UNPROCESSABLE_ENTITY);

    let bad_price = post_json(&app, "/item/", r#"{"name": "naan", "price": "cheap"}"#).await;
    assert_eq!(bad_price.status, StatusCode::UNPROCESSABLE_ENTITY);

    let not_json = post_json(&app, "/item/", "naan").await;
    assert_eq!(not_json.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_read_items() {
    let app = create_test_app(AppKind::Params);

    let response = get(&app, "/items").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json, json!([]));

    post_json(&app, "/item/", r#"{"name": "naan", "price": 3}"#).await;

    let response = get(&app, "/items").await;
    assert_eq!(response.json, json!([{ "name": "naan", "price": 3, "desc": null }]));

    let response = get(&app, "/items?q=").await;
    assert!(response.json.is_array());
}

#[tokio::test]
async fn test_read_items_with_search() {
    let app = create_test_app(AppKind::Params);
    post_json(&app, "/item/", r#"{"name": "naan", "price": 3}"#).await;

    let response = get(&app, "/items?q=bread").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json,
        json!({ "q": "bread", "items": [{ "name": "naan", "price": 3, "desc": null }] })
    );
}

#[tokio::test]
async fn test_read_items_search_too_long() {
    let app = create_test_app(AppKind::Params);

    let ok = get(&app, &format!("/items?q={}", "x".repeat(30))).await;
    assert_eq!(ok.status, StatusCode::OK);

    let too_long = get(&app, &format!("/items?q={}", "x".repeat(31))).await;
    assert_eq!(too_long.status, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Models
// =============================================================================

#[tokio::test]
async fn test_read_model() {
    let app = create_test_app(AppKind::Params);

    for (model, nickname) in [("alexnet", "Alex"), ("resnet", "res"), ("lenet", "le")] {
        let response = get(&app, &format!("/model/{}", model)).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json, json!(nickname));
    }
}

#[tokio::test]
async fn test_read_model_unknown() {
    let app = create_test_app(AppKind::Params);

    let response = get(&app, "/model/vgg").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Dependencies
// =============================================================================

#[tokio::test]
async fn test_common_dependency_defaults() {
    let app = create_test_app(AppKind::Params);

    let response = get(&app, "/testDependency").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json, json!({ "id": 0, "tax": 0 }));
}

#[tokio::test]
async fn test_common_dependency_with_values() {
    let app = create_test_app(AppKind::Params);

    let response = get(&app, "/testDependency?q=naan&id=3&tax=18").await;

    assert_eq!(response.json, json!({ "q": "naan", "id": 3, "tax": 18 }));
}

#[tokio::test]
async fn test_common_dependency_invalid_id() {
    let app = create_test_app(AppKind::Params);

    let response = get(&app, "/testDependency?id=three").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_pagination_dependency_defaults() {
    let app = create_test_app(AppKind::Params);

    let response = get(&app, "/testCustomClassDep").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json,
        json!({ "items": [{ "item_name": "Foo" }, { "item_name": "Bar" }, { "item_name": "Baz" }] })
    );
}

#[tokio::test]
async fn test_pagination_dependency_window() {
    let app = create_test_app(AppKind::Params);

    let response = get(&app, "/testCustomClassDep?q=b&skip=1&limit=1").await;
    assert_eq!(response.json, json!({ "q": "b", "items": [{ "item_name": "Bar" }] }));

    let response = get(&app, "/testCustomClassDep?skip=10").await;
    assert_eq!(response.json, json!({ "items": [] }));
}

#[tokio::test]
async fn test_pagination_dependency_negative_bounds() {
    let app = create_test_app(AppKind::Params);

    let response = get(&app, "/testCustomClassDep?skip=-1").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json, json!({ "items": [{ "item_name": "Baz" }] }));

    let response = get(&app, "/testCustomClassDep?limit=-1").await;
    assert_eq!(
        response.json,
        json!({ "items": [{ "item_name": "Foo" }, { "item_name": "Bar" }] })
    );

    let response = get(&app, "/testCustomClassDep?skip=1&limit=-1").await;
    assert_eq!(response.json, json!({ "items": [] }));
}

// =============================================================================
// testAll
// =============================================================================

const DERIVED: &str = r#"{"int1": 1, "int2": 2}"#;

#[tokio::test]
async fn test_all_without_query() {
    let app = create_test_app(AppKind::Params);

    let response = post_json(&app, "/testAll/5", DERIVED).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json,
        json!({ "path_id": 5, "request": { "int1": 1, "int2": 2, "string": null } })
    );
}

#[tokio::test]
async fn test_all_with_query() {
    let app = create_test_app(AppKind::Params);

    let response = post_json(
        &app,
        "/testAll/10?query-string=hello",
        r#"{"int1": 1, "int2": 2, "string": "s"}"#,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json,
        json!({ "path_id": 10, "q": "hello", "request": { "int1": 1, "int2": 2, "string": "s" } })
    );
}

#[tokio::test]
async fn test_all_path_id_too_large() {
    let app = create_test_app(AppKind::Params);

    let response = post_json(&app, "/testAll/11", DERIVED).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json, json!({ "detail": "No such path" }));
}

#[tokio::test]
async fn test_all_path_id_not_positive() {
    let app = create_test_app(AppKind::Params);

    for uri in ["/testAll/0", "/testAll/-3"] {
        let response = post_json(&app, uri, DERIVED).await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
    }
}

#[tokio::test]
async fn test_all_query_length_bounds() {
    let app = create_test_app(AppKind::Params);

    let too_short = post_json(&app, "/testAll/1?query-string=ab", DERIVED).await;
    assert_eq!(too_short.status, StatusCode::UNPROCESSABLE_ENTITY);

    let too_long = post_json(
        &app,
        &format!("/testAll/1?query-string={}", "x".repeat(31)),
        DERIVED,
    )
    .await;
    assert_eq!(too_long.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_all_validation_precedes_not_found() {
    let app = create_test_app(AppKind::Params);

    let response = post_json(&app, "/testAll/11?query-string=ab", DERIVED).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_all_requires_body() {
    let app = create_test_app(AppKind::Params);

    let missing_field = post_json(&app, "/testAll/1", r#"{"int1": 1}"#).await;
    assert_eq!(missing_field.status, StatusCode::UNPROCESSABLE_ENTITY);

    let empty = post_json(&app, "/testAll/1", "").await;
    assert_eq!(empty.status, StatusCode::UNPROCESSABLE_ENTITY);
}
