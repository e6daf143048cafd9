use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Categories rendered as an id -> display-type map, the shape the original
/// frontend consumes (`{"1": "Science", ...}`).
pub type CategoryMap = BTreeMap<i64, String>;

pub fn to_category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Response body for `GET /categories`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

impl CategoryListResponse {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            success: true,
            categories: to_category_map(categories),
        }
    }
}
