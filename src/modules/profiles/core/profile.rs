use serde_json::Value;

use crate::modules::profiles::adapters::outbound::profile_node::ProfileNode;
use crate::shared::core::filter::Filterable;
use crate::shared::core::primitives::Identified;

/// Card accents, cycled by position in the list.
pub const ROLE_COLORS: [&str; 5] = ["#2465FF", "#F5A623", "#11A849", "#8B5CF6", "#EC4899"];

pub const DEFAULT_PROFILE_NAME: &str = "Profil";

/// One tile of the roles screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCard {
    pub id: String,
    pub name: String,
    pub person_type: String,
    pub active: bool,
    pub permissions_count: u64,
    pub color: &'static str,
}

impl RoleCard {
    /// `index` is the node's position in the fetched page.
    pub fn from_node(index: usize, node: &ProfileNode) -> Self {
        let id = node
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .or_else(|| node.legacy_id.as_ref().and_then(scalar_to_string))
            .unwrap_or_else(|| format!("{index}-{}", node.label.as_deref().unwrap_or("profil")));

        Self {
            id,
            name: node
                .label
                .clone()
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string()),
            person_type: node.person_type.clone().unwrap_or_default(),
            active: node.active.unwrap_or(false),
            permissions_count: permissions_count(&node.permission),
            color: ROLE_COLORS[index % ROLE_COLORS.len()],
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(value) if !value.is_empty() => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}

/// Array length, a plain number, or an object's `length` key. Anything else counts as zero.
pub fn permissions_count(permission: &Value) -> u64 {
    match permission {
        Value::Array(items) => items.len() as u64,
        Value::Number(count) => count.as_u64().unwrap_or(0),
        Value::Object(object) => object.get("length").and_then(Value::as_u64).unwrap_or(0),
        _ => 0,
    }
}

impl Identified for RoleCard {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for RoleCard {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn category(&self) -> &str {
        &self.person_type
    }

    fn flag(&self) -> bool {
        self.active
    }
}
