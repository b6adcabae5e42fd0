pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::{Contact, ContactGroup, SortKey};

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "First name: {}\n\
        Last name: {}\n\
        Phone: {}\n\
        Id: {}",
        contact.first_name, contact.last_name, contact.phone, contact.id
    )
}

pub fn display_groups(groups: &[ContactGroup], key: SortKey) -> String {
    let mut output = String::new();

    for group in groups {
        // Contacts without the selected name are listed under '#'
        let title = if group.title.is_empty() { "#" } else { group.title.as_str() };
        output.push_str(title);
        output.push('\n');

        for c in &group.contacts {
            output.push_str(&format!(
                "    {:<30} {:<16} {}\n",
                c.display_name(key),
                c.phone,
                c.id
            ));
        }
    }
    output
}
