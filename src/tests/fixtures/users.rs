// User fixtures: a canonical record read from JSON, plus the wire shapes the
// Forseti API returns for it.

use std::fs;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};

use crate::modules::users::core::user::UserRecord;
use crate::shared::infrastructure::graphql_client::GraphqlResponse;

pub struct UserRecordBuilder {
    inner: UserRecord,
}

impl Default for UserRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UserRecordBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/user_record.json").unwrap();
        let inner: UserRecord = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn display_name(mut self, v: impl Into<String>) -> Self {
        self.inner.display_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn phone(mut self, v: impl Into<String>) -> Self {
        self.inner.phone = v.into();
        self
    }

    pub fn profile(mut self, v: impl Into<String>) -> Self {
        self.inner.profile = v.into();
        self
    }

    pub fn locked(mut self, v: bool) -> Self {
        self.inner.locked = v;
        self
    }

    pub fn deleted(mut self, v: bool) -> Self {
        self.inner.deleted = v;
        self
    }

    pub fn created_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> UserRecord {
        self.inner
    }
}

/// The node the API would serve for `record`. Phone and person type are not part of it.
pub fn user_node_json(record: &UserRecord) -> Value {
    json!({
        "id": record.id,
        "email": record.email,
        "displayName": record.display_name,
        "locked": record.locked,
        "deleted": record.deleted,
        "createdAt": record.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        "profile": { "label": record.profile },
    })
}

/// A `Users` connection holding `records` in order.
pub fn users_response(records: &[UserRecord], has_next_page: bool) -> GraphqlResponse {
    let edges: Vec<Value> = records
        .iter()
        .map(|record| json!({ "node": user_node_json(record), "cursor": record.display_id() }))
        .collect();
    GraphqlResponse::data(json!({
        "users": {
            "edges": edges,
            "pageInfo": { "hasNextPage": has_next_page, "endCursor": records.last().map(|r| r.display_id()) },
            "totalCount": records.len(),
        }
    }))
}

#[cfg(test)]
mod user_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = UserRecordBuilder::default().build();
        assert_eq!(built.id, "/api/users/1");
        assert_eq!(built.display_name, "Alice Martin");
        assert_eq!(built.email, "alice@forseti.io");
        assert_eq!(built.profile, "Utilisateur");
        assert!(built.is_confirmed);
        assert!(!built.locked);
        assert_eq!(built.created_at.to_rfc3339(), "2024-03-01T08:30:00+00:00");
    }

    #[rstest]
    fn setters_override_fields() {
        let built = UserRecordBuilder::new()
            .id("/api/users/9")
            .display_name("Zoé")
            .email("zoe@forseti.io")
            .phone("0700000000")
            .profile("Consultant")
            .locked(true)
            .deleted(true)
            .build();

        assert_eq!(built.display_id(), "9");
        assert_eq!(built.display_name, "Zoé");
        assert_eq!(built.email, "zoe@forseti.io");
        assert_eq!(built.phone, "0700000000");
        assert_eq!(built.profile, "Consultant");
        assert!(built.locked);
        assert!(built.deleted);
    }
}
