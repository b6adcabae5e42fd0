pub use crate::cli::{command, run_app};
pub use crate::domain::{
    Change, Contact, ContactGroup, ContactManager, SortKey,
    contact, group_contacts,
    manager::ALL_CONTACTS_KEY,
};
pub use crate::errors::AppError;
pub use crate::storage::{self, KeyValueStore, StorageMedium, file::FileDefaults, memory::MemStore};
pub use crate::validation;
pub use uuid;
