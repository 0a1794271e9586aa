/// Last path segment of an opaque identifier such as `/api/users/42`.
///
/// Only used for presentation; the full identifier stays the key everywhere else.
pub fn display_id(opaque_id: &str) -> &str {
    opaque_id.rsplit('/').next().unwrap_or(opaque_id)
}

/// Implemented by records held in an [`EntityCollection`](super::collection::EntityCollection).
pub trait Identified {
    fn id(&self) -> &str;
}
