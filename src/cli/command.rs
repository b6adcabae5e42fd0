use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::domain::SortKey;
use crate::storage::DEFAULT_DATA_DIR;

#[derive(Parser, Debug)]
#[command(name = "icontacts", version, about = "Simple contact list grouped by initial")]
pub struct Cli {
    /// Storage choice (file, mem) are available
    #[arg(long, env = "ICONTACTS_STORAGE", default_value_t = String::from("file"))]
    pub storage: String,

    /// Directory holding the stored contacts
    #[arg(long, env = "ICONTACTS_DATA_DIR", default_value_t = String::from(DEFAULT_DATA_DIR))]
    pub data_dir: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact first name
        #[arg(long)]
        first_name: String,

        /// Contact last name
        #[arg(long)]
        last_name: String,

        /// Contact phone number, '+' followed by 7 to 15 digits
        #[arg(long)]
        phone: String,
    },
    /// List contacts grouped by the initial of the chosen name
    List {
        /// Name to group and order by
        #[arg(long, value_enum, default_value_t = SortKey::First)]
        sort: SortKey,
    },
    /// Show a single contact
    Show {
        /// Contact id, as printed by `list`
        #[arg(long)]
        id: Uuid,
    },
    /// Edit an existing contact
    /// Provide the contact id followed by the fields you wish to update
    Edit {
        /// Contact id, as printed by `list`
        #[arg(long)]
        id: Uuid,

        /// Update first name
        #[arg(long)]
        first_name: Option<String>,

        /// Update last name
        #[arg(long)]
        last_name: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a contact by id,
    /// or by first name, last name and phone (first match wins)
    Delete {
        /// Contact id, as printed by `list`
        #[arg(long, conflicts_with_all = ["first_name", "last_name", "phone"])]
        id: Option<Uuid>,

        /// First name of contact to delete
        #[arg(long, required_unless_present = "id")]
        first_name: Option<String>,

        /// Last name of contact to delete
        #[arg(long, required_unless_present = "id")]
        last_name: Option<String>,

        /// Phone number of contact to delete
        #[arg(long, required_unless_present = "id")]
        phone: Option<String>,
    },
}
