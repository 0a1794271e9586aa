// Wire shapes for user nodes returned by the Forseti API.
//
// Every field except the identifier is optional: mutations only return what the
// client asked for, and a missing field must never overwrite local state.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::users::core::patch::UserPatch;
use crate::modules::users::core::user::UserRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileRef {
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub locked: Option<bool>,
    pub deleted: Option<bool>,
    pub created_at: Option<String>,
    pub profile: Option<ProfileRef>,
}

impl UserNode {
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            display_name: self.display_name,
            email: self.email,
            locked: self.locked,
            deleted: self.deleted,
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
            profile: self.profile.and_then(|profile| profile.label),
        }
    }

    /// List mapping: anything the node leaves out falls back to the list defaults.
    pub fn into_record(self) -> UserRecord {
        let mut record = UserRecord::blank(self.id.clone());
        self.into_patch().apply_to(&mut record);
        record
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .inspect_err(|error| tracing::debug!(%error, value, "unparseable timestamp"))
        .ok()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserEdge {
    pub node: UserNode,
    pub cursor: Option<String>,
}

/// Cursor-paginated `users` connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConnection {
    #[serde(default)]
    pub edges: Option<Vec<UserEdge>>,
    pub page_info: Option<PageInfo>,
    pub total_count: Option<i64>,
}

impl UserConnection {
    pub fn into_nodes(self) -> Vec<UserNode> {
        self.edges
            .unwrap_or_default()
            .into_iter()
            .map(|edge| edge.node)
            .collect()
    }
}

/// `{ user { ... } }` payload shared by the user mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    pub user: Option<UserNode>,
}
