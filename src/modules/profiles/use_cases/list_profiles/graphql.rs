use serde::Deserialize;

use crate::modules::profiles::adapters::outbound::profile_node::{Collection, ProfileNode};
use crate::shared::infrastructure::graphql_client::Operation;

pub const PROFILES_QUERY: Operation = Operation::query(
    "Profiles",
    r#"
    query Profiles($page: Int, $itemsPerPage: Int) {
        profiles(page: $page, itemsPerPage: $itemsPerPage) {
            collection {
                id
                _id
                label
                personType
                active
                permission
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
pub struct ProfilesData {
    pub profiles: Option<Collection<ProfileNode>>,
}
