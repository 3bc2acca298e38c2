mod question_dto;

pub use question_dto::{
    CategoryQuestionsResponse, CreateQuestionDto, QuestionDto, QuestionListResponse,
    QuestionRecordResponse, SearchQuestionsDto, SearchResultsResponse,
};
