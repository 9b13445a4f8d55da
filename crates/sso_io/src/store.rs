//! Ordered entry storage shared by the container file models.
//!

use derive_more::derive::{Deref, IntoIterator};

use crate::error::{Error, Result};

/// Ordered, index-addressed collection of entry records.
///
/// Backed by contiguous storage. Removal shifts later entries down so the
/// store never holds gaps; growth fills with default records. Indices
/// handed out before a structural mutation must not be reused afterwards.
///
/// Reservations go through `try_reserve`, so running out of memory surfaces
/// as an error on the call instead of aborting the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, IntoIterator)]
pub struct EntryStore<T> {
    #[deref]
    #[into_iterator(owned, ref)]
    entries: Vec<T>,
}

impl<T> EntryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create an empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(capacity)?;
        Ok(Self { entries })
    }

    /// Number of entries currently stored.
    pub fn count(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Borrow the entry at `index`.
    pub fn get(&self, index: u32) -> Result<&T> {
        let count = self.count();
        self.entries
            .get(index as usize)
            .ok_or(Error::OutOfRange { index, count })
    }

    /// Mutably borrow the entry at `index`.
    pub fn get_mut(&mut self, index: u32) -> Result<&mut T> {
        let count = self.count();
        self.entries
            .get_mut(index as usize)
            .ok_or(Error::OutOfRange { index, count })
    }

    /// Append an entry at the end of the store.
    pub fn push(&mut self, entry: T) -> Result<()> {
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Remove and return the entry at `index`, shifting later entries down
    /// by one. The store is left untouched when `index` is out of range.
    pub fn remove(&mut self, index: u32) -> Result<T> {
        let count = self.count();
        if index >= count {
            return Err(Error::OutOfRange { index, count });
        }
        Ok(self.entries.remove(index as usize))
    }
}

impl<T: Default> EntryStore<T> {
    /// Grow with default entries or truncate, discarding the excess.
    pub fn resize(&mut self, new_count: u32) -> Result<()> {
        let new_len = new_count as usize;
        if let Some(additional) = new_len.checked_sub(self.entries.len()) {
            self.entries.try_reserve_exact(additional)?;
        }
        self.entries.resize_with(new_len, T::default);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::EntryStore;
    use crate::error::{Error, Result};

    #[test]
    fn push_and_get() -> Result<()> {
        let mut store = EntryStore::new();
        store.push("a")?;
        store.push("b")?;

        assert_eq!(store.count(), 2);
        assert_eq!(*store.get(0)?, "a");
        assert_eq!(*store.get(1)?, "b");

        Ok(())
    }

    #[test]
    fn get_at_count_is_out_of_range() -> Result<()> {
        let mut store = EntryStore::new();
        store.push(7u32)?;

        assert!(matches!(
            store.get(1),
            Err(Error::OutOfRange { index: 1, count: 1 })
        ));

        Ok(())
    }

    #[test]
    fn remove_compacts() -> Result<()> {
        let mut store = EntryStore::new();
        for entry in ["a", "b", "c"] {
            store.push(entry)?;
        }

        assert_eq!(store.remove(1)?, "b");
        assert_eq!(store.count(), 2);
        assert_eq!(*store.get(0)?, "a");
        assert_eq!(*store.get(1)?, "c");

        Ok(())
    }

    #[test]
    fn remove_out_of_range_leaves_store_unchanged() -> Result<()> {
        let mut store = EntryStore::new();
        store.push("a")?;

        assert!(store.remove(3).is_err());
        assert_eq!(store.count(), 1);

        Ok(())
    }

    #[test]
    fn resize_grows_with_defaults_and_truncates() -> Result<()> {
        let mut store: EntryStore<u32> = EntryStore::new();
        store.resize(3)?;
        assert_eq!(store.count(), 3);
        assert_eq!(*store.get(2)?, 0);

        *store.get_mut(0)? = 9;
        store.resize(1)?;
        assert_eq!(store.count(), 1);
        assert_eq!(*store.get(0)?, 9);

        Ok(())
    }

    #[test]
    fn iterates_in_order() -> Result<()> {
        let mut store = EntryStore::new();
        store.push(1)?;
        store.push(2)?;

        let collected: Vec<i32> = store.iter().copied().collect();
        assert_eq!(collected, vec![1, 2]);

        Ok(())
    }
}
