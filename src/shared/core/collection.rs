use crate::shared::core::primitives::Identified;

/// Ordered records owned by a single list view.
///
/// Replaced wholesale on fetch and patched in place by identifier afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCollection<R> {
    records: Vec<R>,
}

impl<R> Default for EntityCollection<R> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<R: Identified> EntityCollection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, records: Vec<R>) {
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns `false` when no record carries `id`.
    pub fn update(&mut self, id: &str, apply: impl FnOnce(&mut R)) -> bool {
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                apply(record);
                true
            }
            None => false,
        }
    }

    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }
}
