use std::sync::Arc;

use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::modules::profiles::core::permissions::{PermissionLabels, normalize_permissions};
use crate::modules::profiles::use_cases::view_profile_permissions::graphql::{
    PERMISSIONS_QUERY, PROFILE_BY_ID_QUERY, PermissionsData, ProfileByIdData,
};
use crate::shared::core::errors::ControllerError;
use crate::shared::core::form_state::{FormState, ensure_live};
use crate::shared::infrastructure::graphql_client::GraphqlClient;
use crate::shared::infrastructure::notifications::Notifier;

pub const DEFAULT_PERMISSION_PAGE_SIZE: i64 = 100;
pub const PERMISSIONS_LOAD_FAILED: &str = "Impossible de charger les permissions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledPermission {
    pub role: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePermissions {
    pub id: String,
    pub label: Option<String>,
    pub person_type: Option<String>,
    pub permissions: Vec<LabelledPermission>,
}

/// Read-only permission list of one profile, labelled for display.
pub struct ProfilePermissionsController {
    client: GraphqlClient,
    notifier: Arc<dyn Notifier>,
    page_size: i64,
    state: FormState,
    profile: Option<ProfilePermissions>,
}

impl ProfilePermissionsController {
    pub fn new(client: GraphqlClient, notifier: Arc<dyn Notifier>, page_size: i64) -> Self {
        Self {
            client,
            notifier,
            page_size,
            state: FormState::Idle,
            profile: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn profile(&self) -> Option<&ProfilePermissions> {
        self.profile.as_ref()
    }

    /// Both queries go out together and both are awaited to completion; either
    /// failing fails the whole load with one fixed message.
    pub async fn load(
        &mut self,
        profile_id: &str,
        cancel: &CancellationToken,
    ) -> Result<&ProfilePermissions, ControllerError> {
        ensure_live(cancel)?;
        if self.state.is_in_flight() {
            return Err(ControllerError::Busy);
        }
        let previous = self.state.begin(FormState::Loading);

        let (profile, permissions) = tokio::join!(
            self.client
                .query::<ProfileByIdData>(PROFILE_BY_ID_QUERY, json!({ "id": profile_id })),
            self.client.query::<PermissionsData>(
                PERMISSIONS_QUERY,
                json!({ "page": 1, "itemsPerPage": self.page_size })
            ),
        );
        self.state.settle(previous, cancel)?;

        let (profile, permissions) = match (profile, permissions) {
            (Ok(profile), Ok(permissions)) => (profile, permissions),
            (Err(error), _) | (_, Err(error)) => {
                tracing::warn!(%error, profile_id, "profile permissions could not be loaded");
                self.state = FormState::Error(PERMISSIONS_LOAD_FAILED.to_string());
                self.notifier.error(PERMISSIONS_LOAD_FAILED);
                return Err(error.into());
            }
        };

        let Some(node) = profile.profile else {
            return Err(self
                .state
                .fail(self.notifier.as_ref(), ControllerError::NotFound("Profil")));
        };

        let labels = PermissionLabels::from_nodes(
            &permissions
                .permissions
                .map(|collection| collection.collection)
                .unwrap_or_default(),
        );
        let permissions = normalize_permissions(&node.permission)
            .into_iter()
            .map(|role| LabelledPermission {
                label: labels.label(&role).to_string(),
                role,
            })
            .collect();

        self.state = FormState::Idle;
        let loaded = ProfilePermissions {
            id: node.id.unwrap_or_else(|| profile_id.to_string()),
            label: node.label,
            person_type: node.person_type,
            permissions,
        };
        Ok(&*self.profile.insert(loaded))
    }
}
