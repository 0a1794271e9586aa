use serde::Deserialize;

use crate::modules::profiles::adapters::outbound::profile_node::{Collection, PermissionNode, ProfileNode};
use crate::shared::infrastructure::graphql_client::Operation;

pub const PROFILE_BY_ID_QUERY: Operation = Operation::query(
    "ProfileById",
    r#"
    query ProfileById($id: ID!) {
        profile(id: $id) {
            id
            _id
            label
            personType
            permission
            active
            createdAt
            updatedAt
        }
    }
"#,
);

pub const PERMISSIONS_QUERY: Operation = Operation::query(
    "Permissions",
    r#"
    query Permissions($page: Int, $itemsPerPage: Int) {
        permissions(page: $page, itemsPerPage: $itemsPerPage) {
            collection {
                id
                role
                label
            }
            paginationInfo {
                itemsPerPage
                lastPage
                totalCount
                currentPage
                hasNextPage
            }
        }
    }
"#,
);

#[derive(Debug, Deserialize)]
pub struct ProfileByIdData {
    pub profile: Option<ProfileNode>,
}

#[derive(Debug, Deserialize)]
pub struct PermissionsData {
    pub permissions: Option<Collection<PermissionNode>>,
}
