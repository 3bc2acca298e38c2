//! In-memory [`TriviaStore`] used by the handler and service tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::TriviaStore;

pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                categories: Vec::new(),
                questions: Vec::new(),
                next_question_id: 1,
            }),
        }
    }

    pub fn seed_category(&self, category_type: &str) -> Category {
        let mut inner = self.inner.lock().unwrap();
        let category = Category {
            id: inner.categories.len() as i32 + 1,
            category_type: category_type.to_string(),
        };
        inner.categories.push(category.clone());
        category
    }

    pub fn seed_question(
        &self,
        question: &str,
        answer: &str,
        category: i32,
        difficulty: i32,
    ) -> Question {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_question_id;
        inner.next_question_id += 1;
        let question = Question {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        };
        inner.questions.push(question.clone());
        question
    }

    pub fn question_count(&self) -> usize {
        self.inner.lock().unwrap().questions.len()
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories = self.inner.lock().unwrap().categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        let mut questions = self.inner.lock().unwrap().questions.clone();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn list_questions_by_category(&self, category: i32) -> Result<Vec<Question>> {
        let mut questions: Vec<Question> = self
            .inner
            .lock()
            .unwrap()
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        let mut questions: Vec<Question> = self
            .inner
            .lock()
            .unwrap()
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .questions
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn question_text_exists(&self, text: &str) -> Result<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .questions
            .iter()
            .any(|q| q.question == text))
    }

    async fn create_question(&self, new: NewQuestion) -> Result<Question> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_question_id;
        inner.next_question_id += 1;
        let question = Question {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        inner.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<()> {
        self.inner.lock().unwrap().questions.retain(|q| q.id != id);
        Ok(())
    }

    async fn list_quiz_candidates(
        &self,
        category: Option<i32>,
        excluded: &[i32],
    ) -> Result<Vec<Question>> {
        let mut questions: Vec<Question> = self
            .inner
            .lock()
            .unwrap()
            .questions
            .iter()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .filter(|q| !excluded.contains(&q.id))
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }
}
