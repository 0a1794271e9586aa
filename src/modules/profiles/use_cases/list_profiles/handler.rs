use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::modules::profiles::core::profile::RoleCard;
use crate::modules::profiles::use_cases::list_profiles::graphql::{PROFILES_QUERY, ProfilesData};
use crate::shared::core::collection::EntityCollection;
use crate::shared::core::errors::ControllerError;
use crate::shared::core::filter::{DISPLAY_PAGE_SIZE, FilterState, FlagFilter, Page, paginate};
use crate::shared::core::form_state::ensure_live;
use crate::shared::infrastructure::graphql_client::GraphqlClient;
use crate::shared::infrastructure::notifications::Notifier;

pub const DEFAULT_PROFILE_PAGE_SIZE: i64 = 20;
pub const PROFILES_LOAD_FAILED: &str = "Impossible de charger les profils";

/// Roles screen: first page of profiles as cards, filtered locally.
pub struct ProfileListController {
    client: GraphqlClient,
    notifier: Arc<dyn Notifier>,
    page_size: i64,
    cards: EntityCollection<RoleCard>,
    filter: FilterState,
    error: Option<String>,
    loading: bool,
    total_count: Option<i64>,
}

impl ProfileListController {
    pub fn new(client: GraphqlClient, notifier: Arc<dyn Notifier>, page_size: i64) -> Self {
        Self {
            client,
            notifier,
            page_size,
            cards: EntityCollection::new(),
            filter: FilterState::default(),
            error: None,
            loading: false,
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
            .query::<ProfilesData>(PROFILES_QUERY, json!({ "page": 1, "itemsPerPage": self.page_size }))
            .await;
        self.loading = false;
        ensure_live(cancel)?;
        self.error = None;

        match result {
            Ok(data) => {
                let profiles = data.profiles.unwrap_or_default();
                self.total_count = profiles.pagination_info.and_then(|info| info.total_count);
                let cards: Vec<RoleCard> = profiles
                    .collection
                    .iter()
                    .enumerate()
                    .map(|(index, node)| RoleCard::from_node(index, node))
                    .collect();
                tracing::debug!(count = cards.len(), "profiles loaded");
                self.cards.replace(cards);
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "profiles could not be loaded");
                self.cards.clear();
                self.error = Some(PROFILES_LOAD_FAILED.to_string());
                self.notifier.error(PROFILES_LOAD_FAILED);
                Err(error.into())
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.term = term.into();
    }

    pub fn set_person_type_filter(&mut self, person_type: Option<String>) {
        self.filter.category = person_type;
    }

    pub fn set_active_filter(&mut self, flag: FlagFilter) {
        self.filter.flag = flag;
    }

    pub fn cards(&self) -> &[RoleCard] {
        self.cards.records()
    }

    pub fn find(&self, id: &str) -> Option<&RoleCard> {
        self.cards.find(id)
    }

    pub fn visible(&self) -> Vec<&RoleCard> {
        self.filter.apply(self.cards.records())
    }

    pub fn page(&self, index: usize) -> Page<'_, RoleCard> {
        paginate(self.visible(), index, DISPLAY_PAGE_SIZE)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn total_count(&self) -> Option<i64> {
        self.total_count
    }
}
