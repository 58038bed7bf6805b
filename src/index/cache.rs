//! Index Cache
//!
//! One `OnceCell` slot per translation. Concurrent first requests for a
//! translation await the same build; readers see a complete index or none.
//! A failed build leaves the slot empty so the next request retries.

use super::verse_index::TranslationIndex;
use crate::error::Result;
use crate::records::store::RecordStore;
use crate::records::types::Translation;

use dashmap::DashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;

type Slot = Arc<OnceCell<Arc<TranslationIndex>>>;

pub struct IndexCache {
    store: RecordStore,
    slots: DashMap<Translation, Slot>,
}

/// Built indexes for all three translations, taken together.
#[derive(Debug, Clone)]
pub struct IndexSnapshot {
    cn: Arc<TranslationIndex>,
    nkjv: Arc<TranslationIndex>,
    kjv: Arc<TranslationIndex>,
}

impl IndexSnapshot {
    pub fn get(&self, translation: Translation) -> &TranslationIndex {
        match translation {
            Translation::Cn => &self.cn,
            Translation::Nkjv => &self.nkjv,
            Translation::Kjv => &self.kjv,
        }
    }
}

impl IndexCache {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            slots: DashMap::new(),
        }
    }

    pub async fn get(&self, translation: Translation) -> Result<Arc<TranslationIndex>> {
        // Clone the slot out so the shard lock is released before awaiting.
        let slot: Slot = self.slots.entry(translation).or_default().clone();

        let index = slot
            .get_or_try_init(|| build_index(&self.store, translation))
            .await?;

        Ok(Arc::clone(index))
    }

    pub async fn snapshot(&self) -> Result<IndexSnapshot> {
        let (cn, nkjv, kjv) = tokio::try_join!(
            self.get(Translation::Cn),
            self.get(Translation::Nkjv),
            self.get(Translation::Kjv),
        )?;
        Ok(IndexSnapshot { cn, nkjv, kjv })
    }

    /// Builds every translation up front.
    pub async fn warm(&self) -> Result<()> {
        self.snapshot().await.map(|_| ())
    }

    pub fn is_built(&self, translation: Translation) -> bool {
        self.slots
            .get(&translation)
            .map(|slot| slot.initialized())
            .unwrap_or(false)
    }

    /// Drops the published index; builds already in flight finish into the
    /// detached slot and are discarded.
    pub fn invalidate(&self, translation: Translation) {
        if self.slots.remove(&translation).is_some() {
            tracing::info!("{}: index invalidated", translation);
        }
    }

    pub fn invalidate_all(&self) {
        for translation in Translation::ALL {
            self.invalidate(translation);
        }
    }
}

async fn build_index(
    store: &RecordStore,
    translation: Translation,
) -> Result<Arc<TranslationIndex>> {
    let started = Instant::now();
    let records = store.load_translation(translation).await?;
    let index = TranslationIndex::build(translation, records);

    tracing::info!(
        "{}: indexed {} verses across {} books from {} in {:?}",
        translation,
        index.len(),
        index.book_count(),
        store.describe(),
        started.elapsed()
    );

    Ok(Arc::new(index))
}
