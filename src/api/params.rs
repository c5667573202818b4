//! Parameter binding demonstrations.
//!
//! - GET `/` - Greeting
//! - GET `/item/{item_id}` - Look up a submitted item by index
//! - GET `/model/{model_name}` - Enumerated path parameter
//! - POST `/item/` - Submit an item
//! - GET `/items` - List items, optionally echoing a search string
//! - GET `/testDependency` - Shared query-parameter dependency
//! - GET `/testCustomClassDep` - Pagination dependency over a fixed catalogue
//! - POST `/testAll/{path_id}` - Path, query and body together

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ApiError, validate_length};
use super::extract::{AppJson, AppPath, AppQuery};
use crate::db::{CATALOGUE, CatalogueEntry, Database, Item};
use crate::deps::{CommonParams, Pagination};

/// Longest search string accepted by `/items`.
const MAX_SEARCH_LEN: usize = 30;

/// Largest path id `/testAll` knows about.
const MAX_PATH_ID: i64 = 10;

#[derive(Clone)]
pub struct ParamsState {
    pub db: Database,
}

pub fn router(state: ParamsState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/item/{item_id}", get(read_item))
        .route("/model/{model_name}", get(read_model))
        .route("/item/", post(write_item))
        .route("/items", get(read_items))
        .route("/testDependency", get(read_common))
        .route("/testCustomClassDep", get(read_catalogue))
        .route("/testAll/{path_id}", post(read_all))
        .with_state(state)
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, World!",
    })
}

#[derive(Serialize)]
#[serde(untagged)]
enum ReadItemResponse {
    Found { item_id: usize, item: Item },
    Missing { message: &'static str },
}

async fn read_item(
    State(state): State<ParamsState>,
    AppPath(item_id): AppPath<i64>,
) -> Json<ReadItemResponse> {
    let found = match usize::try_from(item_id) {
        Ok(id) => state.db.items().get(id).await.map(|item| (id, item)),
        Err(_) => None,
    };

    Json(match found {
        Some((item_id, item)) => ReadItemResponse::Found { item_id, item },
        None => ReadItemResponse::Missing { message: "error" },
    })
}

/// Known model architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    pub fn nickname(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "Alex",
            ModelName::Resnet => "res",
            ModelName::Lenet => "le",
        }
    }
}

async fn read_model(AppPath(model_name): AppPath<ModelName>) -> Json<&'static str> {
    Json(model_name.nickname())
}

#[derive(Serialize)]
struct WriteItemResponse {
    item_id: usize,
    item: Item,
}

async fn write_item(
    State(state): State<ParamsState>,
    AppJson(item): AppJson<Item>,
) -> Json<WriteItemResponse> {
    let item_id = state.db.items().push(item.clone()).await;
    debug!(item_id, name = %item.name, "Stored item");
    Json(WriteItemResponse { item_id, item })
}

#[derive(Deserialize)]
struct SearchQuery {
    q: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ItemsResponse {
    All(Vec<Item>),
    Search { q: String, items: Vec<Item> },
}

async fn read_items(
    State(state): State<ParamsState>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> Result<Json<ItemsResponse>, ApiError> {
    if let Some(q) = &query.q {
        validate_length("q", q, 0, MAX_SEARCH_LEN)?;
    }

    let items = state.db.items().all().await;
    Ok(Json(match query.q.filter(|q| !q.is_empty()) {
        Some(q) => ItemsResponse::Search { q, items },
        None => ItemsResponse::All(items),
    }))
}

async fn read_common(commons: CommonParams) -> Json<CommonParams> {
    Json(commons)
}

#[derive(Serialize)]
struct CatalogueResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<String>,
    items: &'static [CatalogueEntry],
}

async fn read_catalogue(params: Pagination) -> Json<CatalogueResponse> {
    Json(CatalogueResponse {
        items: params.window(&CATALOGUE),
        q: params.q,
    })
}

/// Request body for `/testAll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedModel {
    pub int1: i64,
    pub int2: i64,
    #[serde(default)]
    pub string: Option<String>,
}

#[derive(Deserialize)]
struct ReadAllQuery {
    #[serde(rename = "query-string")]
    query_string: Option<String>,
}

#[derive(Serialize)]
struct ReadAllResponse {
    path_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<String>,
    request: DerivedModel,
}

async fn read_all(
    AppPath(path_id): AppPath<i64>,
    AppQuery(query): AppQuery<ReadAllQuery>,
    AppJson(request): AppJson<DerivedModel>,
) -> Result<Json<ReadAllResponse>, ApiError> {
    if path_id <= 0 {
        return Err(ApiError::unprocessable("path_id must be greater than 0"));
    }
    if let Some(q) = &query.query_string {
        validate_length("query-string", q, 3, 30)?;
    }

    if path_id > MAX_PATH_ID {
        return Err(ApiError::not_found("No such path"));
    }

    Ok(Json(ReadAllResponse {
        path_id,
        q: query.query_string,
        request,
    }))
}
