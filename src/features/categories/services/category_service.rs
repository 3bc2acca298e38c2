use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryListResponse;
use crate::modules::store::TriviaStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// List all category display names ordered by id. An empty table is a
    /// not-found condition for this endpoint.
    pub async fn list(&self) -> Result<CategoryListResponse> {
        let categories = self.store.list_categories().await?;

        if categories.is_empty() {
            return Err(AppError::NotFound);
        }

        Ok(CategoryListResponse {
            success: true,
            categories: categories.into_iter().map(|c| c.category_type).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::memory::MemoryStore;

    #[tokio::test]
    async fn lists_seeded_categories_in_id_order() {
        let store = MemoryStore::new();
        store.seed_category("Science");
        store.seed_category("Art");
        store.seed_category("Geography");

        let service = CategoryService::new(Arc::new(store));
        let response = service.list().await.unwrap();

        assert!(response.success);
        assert_eq!(response.categories, vec!["Science", "Art", "Geography"]);
    }

    #[tokio::test]
    async fn empty_table_is_not_found() {
        let service = CategoryService::new(Arc::new(MemoryStore::new()));

        assert!(matches!(service.list().await, Err(AppError::NotFound)));
    }
}
