//! Trivia question feature: paginated listing, search, create, delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | One page of questions (10 per page) |
//! | POST | `/questions` | Search (with `searchTerm`) or create a question |
//! | DELETE | `/questions/{id}` | Delete a question |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
