use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::shared::core::filter::{Filterable, FlagFilter};
use crate::shared::core::primitives::{Identified, display_id};

/// One row of the user list, as held in the view's memory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub person_type: String,
    pub is_confirmed: bool,
    pub locked: bool,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    /// Profile label, e.g. "Administrateur".
    pub profile: String,
}

impl UserRecord {
    /// Record with every field at its list default, before any server value is applied.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: String::new(),
            email: String::new(),
            phone: String::new(),
            person_type: String::new(),
            is_confirmed: true,
            locked: false,
            deleted: false,
            created_at: Utc::now(),
            profile: String::new(),
        }
    }

    pub fn display_id(&self) -> &str {
        display_id(&self.id)
    }
}

impl Identified for UserRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Filterable for UserRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.display_name.as_str(), self.email.as_str(), self.phone.as_str()]
    }

    fn category(&self) -> &str {
        &self.profile
    }

    fn flag(&self) -> bool {
        self.locked
    }
}

/// Profile labels offered by the list's profile filter. The empty value means "any".
pub const PROFILE_OPTIONS: [(&str, &str); 5] = [
    ("Tous les profils", ""),
    ("Administrateur", "Administrateur"),
    ("Gestionnaire", "Gestionnaire"),
    ("Utilisateur", "Utilisateur"),
    ("Consultant", "Consultant"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LockedOption {
    #[default]
    All,
    Locked,
    Unlocked,
}

impl LockedOption {
    pub const OPTIONS: [LockedOption; 3] = [LockedOption::All, LockedOption::Locked, LockedOption::Unlocked];

    pub fn label(self) -> &'static str {
        match self {
            LockedOption::All => "Tous",
            LockedOption::Locked => "Verrouillé",
            LockedOption::Unlocked => "Non verrouillé",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            LockedOption::All => "all",
            LockedOption::Locked => "locked",
            LockedOption::Unlocked => "unlocked",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|option| option.label() == label)
    }
}

impl FromStr for LockedOption {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|option| option.value() == value)
            .ok_or_else(|| format!("unknown locked filter: {value}"))
    }
}

impl From<LockedOption> for FlagFilter {
    fn from(option: LockedOption) -> Self {
        match option {
            LockedOption::All => FlagFilter::All,
            LockedOption::Locked => FlagFilter::OnlyTrue,
            LockedOption::Unlocked => FlagFilter::OnlyFalse,
        }
    }
}
