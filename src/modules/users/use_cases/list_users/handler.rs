use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::modules::users::adapters::outbound::user_node::UserNode;
use crate::modules::users::core::change::UserChange;
use crate::modules::users::core::user::{LockedOption, UserRecord};
use crate::modules::users::use_cases::list_users::graphql::{USERS_QUERY, UsersData};
use crate::shared::core::collection::EntityCollection;
use crate::shared::core::errors::ControllerError;
use crate::shared::core::filter::{DISPLAY_PAGE_SIZE, FilterState, Page, paginate};
use crate::shared::core::form_state::ensure_live;
use crate::shared::infrastructure::graphql_client::{ClientError, GraphqlClient};
use crate::shared::infrastructure::notifications::Notifier;

pub const DEFAULT_USER_PAGE_SIZE: i64 = 100;
pub const LOAD_FAILED: &str = "Une erreur est survenue lors du chargement des utilisateurs.";
pub const LOAD_UNREACHABLE: &str = "Impossible de charger les utilisateurs. Veuillez réessayer.";

/// Owns the fetched users and derives the filtered, paginated view from them.
///
/// Only the first page of `page_size` users is ever requested, even when the
/// API reports more; `has_next_page` is kept so a view can say so.
pub struct UserListController {
    client: GraphqlClient,
    notifier: Arc<dyn Notifier>,
    page_size: i64,
    users: EntityCollection<UserRecord>,
    filter: FilterState,
    error: Option<String>,
    loading: bool,
    has_next_page: bool,
    total_count: Option<i64>,
}

impl UserListController {
    pub fn new(client: GraphqlClient, notifier: Arc<dyn Notifier>, page_size: i64) -> Self {
        Self {
            client,
            notifier,
            page_size,
            users: EntityCollection::new(),
            filter: FilterState::default(),
            error: None,
            loading: false,
            has_next_page: false,
            total_count: None,
        }
    }

    pub async fn load(&mut self, cancel: &CancellationToken) -> Result<(), ControllerError> {
        ensure_live(cancel)?;
        if self.loading {
            return Err(ControllerError::Busy);
        }
        self.loading = true;

        let result = self
            .client
            .query::<UsersData>(USERS_QUERY, json!({ "first": self.page_size, "after": null }))
            .await;
        self.loading = false;
        ensure_live(cancel)?;
        self.error = None;

        match result {
            Ok(data) => {
                let connection = data.users.unwrap_or_default();
                self.has_next_page = connection
                    .page_info
                    .as_ref()
                    .is_some_and(|page_info| page_info.has_next_page);
                self.total_count = connection.total_count;
                let records: Vec<UserRecord> =
                    connection.into_nodes().into_iter().map(UserNode::into_record).collect();
                tracing::debug!(count = records.len(), has_next_page = self.has_next_page, "users loaded");
                self.users.replace(records);
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "users could not be loaded");
                // Anything the API answered or failed to deliver is the generic message;
                // only a response we could not make sense of asks for a retry.
                let message = match error {
                    ClientError::Decode(_) | ClientError::MissingData => LOAD_UNREACHABLE,
                    ClientError::Transport(_) | ClientError::Unauthenticated { .. } | ClientError::Graphql { .. } => {
                        LOAD_FAILED
                    }
                };
                self.users.clear();
                self.error = Some(message.to_string());
                self.notifier.error(message);
                Err(error.into())
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.term = term.into();
    }

    pub fn set_profile_filter(&mut self, profile: Option<String>) {
        self.filter.category = profile;
    }

    pub fn set_locked_filter(&mut self, option: LockedOption) {
        self.filter.flag = option.into();
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn users(&self) -> &[UserRecord] {
        self.users.records()
    }

    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.users.find(id)
    }

    pub fn visible(&self) -> Vec<&UserRecord> {
        self.filter.apply(self.users.records())
    }

    pub fn page(&self, index: usize) -> Page<'_, UserRecord> {
        paginate(self.visible(), index, DISPLAY_PAGE_SIZE)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn total_count(&self) -> Option<i64> {
        self.total_count
    }

    /// Entry point for child form controllers. Returns `false` when the target row is unknown.
    pub fn apply_change(&mut self, change: UserChange) -> bool {
        match change {
            UserChange::Patched { id, patch } => self.users.update(&id, |user| patch.apply_to(user)),
            UserChange::Appended(user) => {
                self.users.push(user);
                true
            }
            UserChange::SoftDeleted { id } => self.users.update(&id, |user| user.deleted = true),
        }
    }
}
