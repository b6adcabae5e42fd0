use super::*;
use tracing::{debug, error, warn};

use crate::domain::group::{ContactGroup, SortKey, group_contacts};
use crate::storage::KeyValueStore;

/// Key the whole contact list is stored under.
pub const ALL_CONTACTS_KEY: &str = "allContactsKey";

/// What a mutating call did to the stored list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Saved,
    /// No contact with the target's id; nothing was written.
    NoMatch,
    /// The write failed and the previous list is still stored.
    NotSaved,
}

/// CRUD over the full contact list, kept as one serialized value.
///
/// Every call reads the list, changes it and writes it back in full.
/// Read and write failures are logged and never returned to the caller.
pub struct ContactManager {
    pub storage: Box<dyn KeyValueStore>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn get_all(&self) -> Vec<Contact> {
        match self.load() {
            Ok(contacts) => contacts,
            Err(e) => {
                warn!(
                    medium = self.storage.medium(),
                    "couldn't read stored contacts, treating as empty: {e}"
                );
                Vec::new()
            }
        }
    }

    pub fn add(&self, contact: Contact) -> Change {
        let mut contacts = self.get_all();
        contacts.push(contact);

        self.persist(&contacts)
    }

    /// Replaces the contact sharing `target`'s id, keeping its position and id.
    pub fn edit(&self, target: &Contact, replacement: Contact) -> Change {
        let mut contacts = self.get_all();

        let Some(slot) = contacts.iter_mut().find(|c| c.id == target.id) else {
            debug!(id = %target.id, "edit target not found");
            return Change::NoMatch;
        };
        *slot = Contact {
            id: target.id,
            ..replacement
        };

        self.persist(&contacts)
    }

    /// Removes the first contact sharing `target`'s id.
    pub fn delete(&self, target: &Contact) -> Change {
        let mut contacts = self.get_all();

        let Some(index) = contacts.iter().position(|c| c.id == target.id) else {
            debug!(id = %target.id, "delete target not found");
            return Change::NoMatch;
        };
        contacts.remove(index);

        self.persist(&contacts)
    }

    pub fn find(&self, id: &Uuid) -> Option<Contact> {
        self.get_all().into_iter().find(|c| &c.id == id)
    }

    pub fn find_by_fields(&self, first_name: &str, last_name: &str, phone: &str) -> Option<Contact> {
        self.get_all()
            .into_iter()
            .find(|c| c.same_fields(first_name, last_name, phone))
    }

    pub fn grouped(&self, key: SortKey) -> Vec<ContactGroup> {
        group_contacts(&self.get_all(), key)
    }

    pub fn load(&self) -> Result<Vec<Contact>, AppError> {
        match self.storage.get(ALL_CONTACTS_KEY)? {
            Some(data) => Ok(serde_json::from_slice(&data)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let data = serde_json::to_vec(contacts)?;
        self.storage.set(ALL_CONTACTS_KEY, &data)
    }

    fn persist(&self, contacts: &[Contact]) -> Change {
        match self.save(contacts) {
            Ok(()) => Change::Saved,
            Err(e) => {
                error!(
                    medium = self.storage.medium(),
                    "couldn't save contacts, keeping previous state: {e}"
                );
                Change::NotSaved
            }
        }
    }
}
