//! Seed notes for `kbase dev`, so the UI can be exercised without touching disk.
use crate::store::{EntryStore, MemoryStorage, StoreError};
use crate::time_utils::now_millis;
use crate::types::Entry;

const HOUR_MS: i64 = 60 * 60 * 1000;

fn seed(hours_ago: i64, title: &str, content: &str, tags: &[&str]) -> Entry {
    Entry {
        id: now_millis() - hours_ago * HOUR_MS,
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn seed_entries() -> Vec<Entry> {
    vec![
        seed(
            72,
            "Recipe",
            "Bake at 350 for 25 minutes, rotate halfway",
            &["food", "baking"],
        ),
        seed(
            48,
            "Rust borrow rules",
            "One mutable reference or any number of shared ones",
            &["rust", "programming"],
        ),
        seed(
            26,
            "Sourdough starter",
            "Feed 1:1:1 flour/water/starter every 12h",
            &["food", "baking", "sourdough"],
        ),
        seed(
            5,
            "Meeting notes",
            "Ship the search filter before the demo",
            &["work"],
        ),
        seed(1, "Plant care", "Water the fern on Sundays", &[]),
    ]
}

pub fn seeded_store(key: &str) -> Result<EntryStore<MemoryStorage>, StoreError> {
    let mut store = EntryStore::new(MemoryStorage::new(), key);
    store.save_entries(&seed_entries())?;
    Ok(store)
}
