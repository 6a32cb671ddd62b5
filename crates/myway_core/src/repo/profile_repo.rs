//! Profile image persistence over the key-value store.
//!
//! The payload is a single data-URL string under `myWay_profilePic`; no
//! content validation is performed beyond "a value was provided".

use crate::repo::RepoResult;
use crate::store::KeyValueStore;

const PROFILE_PIC_KEY: &str = "myWay_profilePic";

/// Accessors for the persisted profile image.
pub struct ProfileRepository<'s, S: KeyValueStore> {
    store: &'s S,
}

impl<'s, S: KeyValueStore> ProfileRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Returns the stored data-URL, if any.
    pub fn image(&self) -> RepoResult<Option<String>> {
        Ok(self.store.get(PROFILE_PIC_KEY)?)
    }

    /// Stores the given data-URL, replacing any previous image.
    pub fn set_image(&self, data_url: impl Into<String>) -> RepoResult<()> {
        self.store.set(PROFILE_PIC_KEY, &data_url.into())?;
        Ok(())
    }

    /// Removes the stored image.
    pub fn clear_image(&self) -> RepoResult<()> {
        self.store.remove(PROFILE_PIC_KEY)?;
        Ok(())
    }
}
