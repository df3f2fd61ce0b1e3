//! Session collaborator: who is looking at the library and whether they may
//! change it. Only the role matters to the catalog; everything else about
//! authentication lives with the host shell.

use crate::store::{KvStore, StoreError, USER_ROLE_KEY, load_role, save_role};

/// The one role allowed to add, edit and delete songs.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Default)]
pub struct Session {
    identifier: Option<String>,
    role: Option<String>,
}

impl Session {
    /// Rehydrate the session from the persisted role, read once at startup.
    pub fn from_store<S: KvStore + ?Sized>(store: &S) -> Result<Self, StoreError> {
        Ok(Self {
            identifier: None,
            role: load_role(store)?,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.identifier.is_some() || self.role.is_some()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }

    /// Sign in and persist the role so the next start sees it.
    pub fn login<S: KvStore + ?Sized>(
        &mut self,
        store: &S,
        identifier: &str,
        role: &str,
    ) -> Result<(), StoreError> {
        self.identifier = Some(identifier.to_string());
        self.role = Some(role.to_string());
        save_role(store, role)
    }

    pub fn logout<S: KvStore + ?Sized>(&mut self, store: &S) -> Result<(), StoreError> {
        self.identifier = None;
        self.role = None;
        store.remove(USER_ROLE_KEY)
    }
}
