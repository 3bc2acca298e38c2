mod category_dto;

pub use category_dto::CategoryListResponse;
