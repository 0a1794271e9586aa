// Wire shapes for profiles and permissions (API Platform offset collections).

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileNode {
    pub id: Option<String>,
    #[serde(rename = "_id")]
    pub legacy_id: Option<Value>,
    pub label: Option<String>,
    pub person_type: Option<String>,
    pub active: Option<bool>,
    /// Untyped on the API side: a list of roles, a count, or nothing.
    #[serde(default)]
    pub permission: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub items_per_page: Option<i64>,
    pub last_page: Option<i64>,
    pub total_count: Option<i64>,
    pub current_page: Option<i64>,
    #[serde(default)]
    pub has_next_page: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection<T> {
    #[serde(default = "Vec::new")]
    pub collection: Vec<T>,
    pub pagination_info: Option<PaginationInfo>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            pagination_info: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PermissionNode {
    pub id: Option<String>,
    pub role: Option<String>,
    pub label: Option<String>,
}
