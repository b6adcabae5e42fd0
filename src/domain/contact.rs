use super::*;
use serde::{Deserialize, Serialize};

use crate::domain::group::SortKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredContact")]
pub struct Contact {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// On-disk shape of a contact. Records written before ids existed have no `id`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredContact {
    #[serde(default)]
    id: Option<Uuid>,
    first_name: String,
    last_name: String,
    phone: String,
}

impl From<StoredContact> for Contact {
    fn from(stored: StoredContact) -> Self {
        let id = stored
            .id
            .unwrap_or_else(|| legacy_id(&stored.first_name, &stored.last_name, &stored.phone));

        Contact {
            id,
            first_name: stored.first_name,
            last_name: stored.last_name,
            phone: stored.phone,
        }
    }
}

// Same fields always map to the same id, so legacy records stay addressable across reads.
fn legacy_id(first_name: &str, last_name: &str, phone: &str) -> Uuid {
    let key = format!("{first_name}\u{1f}{last_name}\u{1f}{phone}");
    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes())
}

impl Contact {
    pub fn new(first_name: String, last_name: String, phone: String) -> Self {
        Contact {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            phone,
        }
    }

    /// Compares the user-visible fields only, ignoring `id`.
    pub fn same_fields(&self, first_name: &str, last_name: &str, phone: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name && self.phone == phone
    }

    /// Name field the contact is grouped by.
    pub fn sort_name(&self, key: SortKey) -> &str {
        match key {
            SortKey::First => &self.first_name,
            SortKey::Last => &self.last_name,
        }
    }

    /// Row title: the grouping name comes first.
    pub fn display_name(&self, key: SortKey) -> String {
        match key {
            SortKey::First => format!("{} {}", self.first_name, self.last_name),
            SortKey::Last => format!("{} {}", self.last_name, self.first_name),
        }
    }
}
