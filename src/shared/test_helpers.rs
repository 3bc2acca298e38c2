#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum::Router;

#[cfg(test)]
use crate::core::router::api_router;
#[cfg(test)]
use crate::modules::store::memory::MemoryStore;
#[cfg(test)]
use crate::modules::store::TriviaStore;

/// Canonical category seed, matching the initial migration.
#[cfg(test)]
pub const SEED_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// A memory store seeded with the canonical categories and `question_count`
/// questions spread round-robin across them.
#[cfg(test)]
pub fn seeded_store(question_count: usize) -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    for category_type in SEED_CATEGORIES {
        store.seed_category(category_type);
    }
    for i in 0..question_count {
        let category = (i % SEED_CATEGORIES.len()) as i32 + 1;
        store.seed_question(
            &format!("What is question number {}?", i),
            &format!("Answer {}", i),
            category,
            (i % 5) as i32 + 1,
        );
    }
    Arc::new(store)
}

/// The full API router over a seeded memory store.
#[cfg(test)]
pub fn test_router(question_count: usize) -> (Router, Arc<MemoryStore>) {
    let store = seeded_store(question_count);
    let router = api_router(Arc::clone(&store) as Arc<dyn TriviaStore>);
    (router, store)
}
