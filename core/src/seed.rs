//! Sample data for a fresh installation.

use crate::{error::Result, ClientDraft, ClientStore};

/// The three clients inserted into an empty store.
pub fn sample_clients() -> Vec<ClientDraft> {
    vec![
        ClientDraft::new("ООО \"ТехноПрофи\"", "info@technoprofi.ru")
            .with_phone("+79991234567")
            .with_company("ТехноПрофи"),
        ClientDraft::new("ИП Иванов А.С.", "ivanov@mail.ru")
            .with_phone("+79998887766")
            .with_company("ИП Иванов"),
        ClientDraft::new("Азимут Плюс", "office@azimutplus.ru")
            .with_phone("+78002005050")
            .with_company("Азимут Плюс"),
    ]
}

/// Insert [`sample_clients`] in one batch when the store has no records.
///
/// Returns how many records were inserted.
pub async fn seed_if_empty(store: &dyn ClientStore) -> Result<usize> {
    if store.count().await? > 0 {
        return Ok(0);
    }

    let inserted = store.add_many(sample_clients()).await?;
    Ok(inserted.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let store = MemoryStore::new();

        assert_eq!(seed_if_empty(&store).await.unwrap(), 3);
        assert_eq!(store.len(), 3);

        assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn samples_keep_their_cyrillic_text() {
        let store = MemoryStore::new();
        seed_if_empty(&store).await.unwrap();

        let names: Vec<_> = store.snapshot().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["ООО \"ТехноПрофи\"", "ИП Иванов А.С.", "Азимут Плюс"]
        );
        assert_eq!(store.get(2).unwrap().company, "ИП Иванов");
    }

    #[tokio::test]
    async fn leaves_populated_store_alone() {
        let store = MemoryStore::new();
        store.insert(ClientDraft::new("Existing", "e@example.test"));

        assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
        assert_eq!(store.len(), 1);
    }
}
