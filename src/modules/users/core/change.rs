use crate::modules::users::core::patch::UserPatch;
use crate::modules::users::core::user::UserRecord;

/// What a form controller hands back to the list after a confirmed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserChange {
    Patched { id: String, patch: UserPatch },
    Appended(UserRecord),
    /// The row stays in the list with its soft-delete flag raised.
    SoftDeleted { id: String },
}
