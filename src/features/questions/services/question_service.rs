use std::collections::HashMap;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::{
    CategoryQuestionsResponse, CreateQuestionDto, QuestionDto, QuestionListResponse,
    QuestionRecordResponse, SearchResultsResponse,
};
use crate::features::questions::models::NewQuestion;
use crate::modules::store::TriviaStore;
use crate::shared::constants::QUESTIONS_PER_PAGE;
use crate::shared::types::{paginate, to_stored_category_id};

/// Service for question listing, search, creation and deletion.
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// One page of all questions, with the pre-pagination total and the
    /// full category name list. An empty page is a not-found condition.
    pub async fn list_page(&self, page: i64) -> Result<QuestionListResponse> {
        let questions = self.store.list_questions().await?;
        let total_questions = questions.len();

        let categories = self.store.list_categories().await?;
        let names: HashMap<i32, String> = categories
            .iter()
            .map(|c| (c.id, c.category_type.clone()))
            .collect();

        let formatted: Vec<QuestionDto> = questions
            .iter()
            .map(|q| QuestionDto::format(q, &names))
            .collect();
        let current_questions = paginate(formatted, page, QUESTIONS_PER_PAGE);

        if current_questions.is_empty() {
            return Err(AppError::NotFound);
        }

        Ok(QuestionListResponse {
            success: true,
            questions: current_questions,
            total_questions,
            current_category: "all".to_string(),
            categories: categories.into_iter().map(|c| c.category_type).collect(),
        })
    }

    /// Delete a question by id and echo the deleted record.
    pub async fn delete(&self, id: i32) -> Result<QuestionRecordResponse> {
        let question = self
            .store
            .get_question(id)
            .await?
            .ok_or(AppError::NotFound)?;

        self.store.delete_question(id).await?;
        tracing::info!("Question deleted: id={}", id);

        let names = self.category_names().await?;
        Ok(QuestionRecordResponse {
            success: true,
            question: QuestionDto::format(&question, &names),
        })
    }

    /// Create a question after validating presence, types, the 0-based
    /// category id, and text uniqueness. Any validation failure is a plain
    /// bad request.
    pub async fn create(&self, dto: CreateQuestionDto) -> Result<QuestionRecordResponse> {
        let question = dto.question.ok_or(AppError::BadRequest)?;
        let answer = dto.answer.ok_or(AppError::BadRequest)?;
        let difficulty = dto.difficulty.ok_or(AppError::BadRequest)?;
        let category = dto.category.ok_or(AppError::BadRequest)?;

        let api_category_id: i64 = category.parse().map_err(|_| AppError::BadRequest)?;
        let stored_category = to_stored_category_id(api_category_id).ok_or(AppError::BadRequest)?;
        let difficulty = i32::try_from(difficulty).map_err(|_| AppError::BadRequest)?;

        // Best-effort uniqueness: check-then-insert, the race is accepted.
        if self.store.question_text_exists(&question).await? {
            return Err(AppError::BadRequest);
        }

        let created = self
            .store
            .create_question(NewQuestion {
                question,
                answer,
                category: stored_category,
                difficulty,
            })
            .await?;
        tracing::info!("Question created: id={}", created.id);

        let names = self.category_names().await?;
        Ok(QuestionRecordResponse {
            success: true,
            question: QuestionDto::format(&created, &names),
        })
    }

    /// Case-insensitive substring search, paginated. Zero matches is a
    /// valid result, not a 404.
    pub async fn search(&self, term: &str, page: i64) -> Result<SearchResultsResponse> {
        let questions = self.store.search_questions(term).await?;
        let total_questions = questions.len();

        let names = self.category_names().await?;
        let formatted: Vec<QuestionDto> = questions
            .iter()
            .map(|q| QuestionDto::format(q, &names))
            .collect();

        Ok(SearchResultsResponse {
            success: true,
            questions: paginate(formatted, page, QUESTIONS_PER_PAGE),
            total_questions,
        })
    }

    /// One page of a single category's questions. The incoming id is the
    /// 0-based API id; a missing category row and an empty page are both
    /// not-found conditions.
    pub async fn list_by_category(
        &self,
        api_category_id: i64,
        page: i64,
    ) -> Result<CategoryQuestionsResponse> {
        let stored_id = to_stored_category_id(api_category_id).ok_or(AppError::NotFound)?;
        let category = self
            .store
            .get_category(stored_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let questions = self.store.list_questions_by_category(stored_id).await?;
        let total_questions = questions.len();

        let names = self.category_names().await?;
        let formatted: Vec<QuestionDto> = questions
            .iter()
            .map(|q| QuestionDto::format(q, &names))
            .collect();
        let current_questions = paginate(formatted, page, QUESTIONS_PER_PAGE);

        if current_questions.is_empty() {
            return Err(AppError::NotFound);
        }

        Ok(CategoryQuestionsResponse {
            success: true,
            questions: current_questions,
            current_category: category.category_type,
            total_questions,
        })
    }

    async fn category_names(&self) -> Result<HashMap<i32, String>> {
        let categories = self.store.list_categories().await?;
        Ok(categories
            .into_iter()
            .map(|c| (c.id, c.category_type))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::memory::MemoryStore;

    fn seeded_store(question_count: usize) -> Arc<MemoryStore> {
        let store = MemoryStore::new();
        store.seed_category("Science");
        store.seed_category("Art");
        for i in 0..question_count {
            store.seed_question(&format!("Question {}?", i), "answer", 1, 1);
        }
        Arc::new(store)
    }

    #[tokio::test]
    async fn list_page_slices_and_counts() {
        let service = QuestionService::new(seeded_store(25));

        let page1 = service.list_page(1).await.unwrap();
        assert_eq!(page1.questions.len(), 10);
        assert_eq!(page1.total_questions, 25);
        assert_eq!(page1.current_category, "all");
        assert_eq!(page1.categories, vec!["Science", "Art"]);

        let page3 = service.list_page(3).await.unwrap();
        assert_eq!(page3.questions.len(), 5);
    }

    #[tokio::test]
    async fn list_page_beyond_end_is_not_found() {
        let service = QuestionService::new(seeded_store(5));

        assert!(matches!(
            service.list_page(2).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_text() {
        let store = seeded_store(1);
        let service = QuestionService::new(store);

        let result = service
            .create(CreateQuestionDto {
                question: Some("Question 0?".to_string()),
                answer: Some("other answer".to_string()),
                difficulty: Some(5),
                category: Some("1".to_string()),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest)));
    }

    #[tokio::test]
    async fn create_with_category_outside_stored_range_is_bad_request() {
        let store = seeded_store(0);
        let service = QuestionService::new(Arc::clone(&store) as Arc<dyn TriviaStore>);

        // 2^32 would wrap to stored id 1 under a plain narrowing cast
        let result = service
            .create(CreateQuestionDto {
                question: Some("Q1?".to_string()),
                answer: Some("A1".to_string()),
                difficulty: Some(1),
                category: Some((1_i64 << 32).to_string()),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest)));
        assert_eq!(store.question_count(), 0);
    }

    #[tokio::test]
    async fn create_with_difficulty_outside_stored_range_is_bad_request() {
        let store = seeded_store(0);
        let service = QuestionService::new(Arc::clone(&store) as Arc<dyn TriviaStore>);

        let result = service
            .create(CreateQuestionDto {
                question: Some("Q1?".to_string()),
                answer: Some("A1".to_string()),
                difficulty: Some(i64::from(i32::MAX) + 1),
                category: Some("1".to_string()),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest)));
        assert_eq!(store.question_count(), 0);
    }

    #[tokio::test]
    async fn create_shifts_category_id() {
        let service = QuestionService::new(seeded_store(0));

        let created = service
            .create(CreateQuestionDto {
                question: Some("Q1?".to_string()),
                answer: Some("A1".to_string()),
                difficulty: Some(1),
                category: Some("1".to_string()),
            })
            .await
            .unwrap();

        assert!(created.success);
        assert_eq!(created.question.question, "Q1?");
        assert_eq!(created.question.category_id, 2);
        assert_eq!(created.question.category.as_deref(), Some("Art"));
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found() {
        let store = seeded_store(2);
        let service = QuestionService::new(Arc::clone(&store) as Arc<dyn TriviaStore>);

        assert!(matches!(service.delete(1000).await, Err(AppError::NotFound)));
        assert_eq!(store.question_count(), 2);
    }

    #[tokio::test]
    async fn search_with_no_matches_is_empty_success() {
        let service = QuestionService::new(seeded_store(3));

        let results = service.search("abracadabra", 1).await.unwrap();
        assert!(results.success);
        assert!(results.questions.is_empty());
        assert_eq!(results.total_questions, 0);
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let service = QuestionService::new(seeded_store(3));

        let results = service.search("qUeStIoN 1", 1).await.unwrap();
        assert_eq!(results.total_questions, 1);
        assert_eq!(results.questions[0].question, "Question 1?");
    }

    #[tokio::test]
    async fn list_by_category_resolves_name_and_shifts_id() {
        let store = MemoryStore::new();
        store.seed_category("Science");
        store.seed_category("Art");
        store.seed_question("Art question?", "answer", 2, 1);
        let service = QuestionService::new(Arc::new(store));

        // API id 1 -> stored id 2 ("Art")
        let response = service.list_by_category(1, 1).await.unwrap();
        assert_eq!(response.current_category, "Art");
        assert_eq!(response.total_questions, 1);
    }

    #[tokio::test]
    async fn list_by_unknown_category_is_not_found() {
        let service = QuestionService::new(seeded_store(3));

        assert!(matches!(
            service.list_by_category(100, 1).await,
            Err(AppError::NotFound)
        ));
    }
}
