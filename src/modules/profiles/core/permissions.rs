use std::collections::HashMap;

use serde_json::Value;

use crate::modules::profiles::adapters::outbound::profile_node::PermissionNode;

/// Labels the API does not (yet) serve for some roles.
pub const BUILTIN_PERMISSION_LABELS: [(&str, &str); 1] =
    [("ROLE_USER_DETAILS", "Consulter les détails d'un utilisateur .....")];

/// A profile's `permission` value as a list of role names.
pub fn normalize_permissions(permission: &Value) -> Vec<String> {
    match permission {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(value_to_string).collect(),
        other => vec![value_to_string(other)],
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(value) => value.clone(),
        other => other.to_string(),
    }
}

/// Role to human label, built from the permissions collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionLabels {
    served: HashMap<String, String>,
}

impl PermissionLabels {
    pub fn from_nodes(nodes: &[PermissionNode]) -> Self {
        let served = nodes
            .iter()
            .filter_map(|node| {
                let role = node.role.as_ref()?;
                let label = node.label.clone().unwrap_or_else(|| role.clone());
                Some((role.clone(), label))
            })
            .collect();
        Self { served }
    }

    /// Served label first, then the built-in one, then the role itself.
    pub fn label<'a>(&'a self, role: &'a str) -> &'a str {
        if let Some(label) = self.served.get(role) {
            return label;
        }
        BUILTIN_PERMISSION_LABELS
            .iter()
            .find(|(builtin, _)| *builtin == role)
            .map(|(_, label)| *label)
            .unwrap_or(role)
    }
}
