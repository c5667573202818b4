use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A submitted item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub desc: Option<String>,
}

/// Entry of the fixed catalogue used by the pagination demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogueEntry {
    pub item_name: &'static str,
}

pub static CATALOGUE: [CatalogueEntry; 3] = [
    CatalogueEntry { item_name: "Foo" },
    CatalogueEntry { item_name: "Bar" },
    CatalogueEntry { item_name: "Baz" },
];

/// Append-only list of items. An item's id is its index.
#[derive(Clone, Default)]
pub struct ItemStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and return its id.
    pub async fn push(&self, item: Item) -> usize {
        let mut items = self.items.write().await;
        items.push(item);
        items.len() - 1
    }

    /// Get an item by id.
    pub async fn get(&self, id: usize) -> Option<Item> {
        self.items.read().await.get(id).cloned()
    }

    /// Snapshot of every item in insertion order.
    pub async fn all(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }
}
