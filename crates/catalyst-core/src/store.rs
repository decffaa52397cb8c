use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::collection::Collection;
use crate::error::CatalystResult;

/// Whole-collection persistence. Every call reads or rewrites the full
/// collection; there is no locking and no partial update.
pub trait RecordStore {
    fn path_of(&self, collection: Collection) -> PathBuf;

    // Sequences. A missing or unreadable file loads as empty.
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T>;
    fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> CatalystResult<()>;

    // Singletons (the budget).
    fn load_one<T: DeserializeOwned>(&self, collection: Collection) -> Option<T>;
    fn save_one<T: Serialize>(&self, collection: Collection, record: &T) -> CatalystResult<()>;
}

/// Id for the next record appended to `records`.
///
/// This is `len + 1`, not `max(id) + 1`: removing a record would make it
/// hand out a duplicate id. Nothing removes records today.
pub fn next_id<T>(records: &[T]) -> u32 {
    records.len() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_counts_records() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(next_id(&empty), 1);
        assert_eq!(next_id(&[10, 20, 30]), 4);
    }
}
