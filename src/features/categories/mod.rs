//! Trivia categories feature.
//!
//! Categories are seeded once at initialization and immutable thereafter;
//! the API only reads them.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | List category display names |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
