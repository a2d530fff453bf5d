use super::ItemSource;
use crate::error::Result;
use crate::model::Item;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
    version: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self { items, version: 1 }
    }

    pub fn insert(&mut self, item: Item) {
        self.items.push(item);
        self.version += 1;
    }

    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
        self.version += 1;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemSource for InMemoryStore {
    fn items(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn version(&self) -> u64 {
        self.version
    }
}
