pub mod contact;
pub mod group;
pub mod manager;

use crate::errors::AppError;
use uuid::Uuid;

pub use contact::Contact;
pub use group::{ContactGroup, SortKey, group_contacts};
pub use manager::{Change, ContactManager};
