use super::*;
use clap::ValueEnum;
use std::collections::BTreeMap;
use unicode_segmentation::UnicodeSegmentation;

/// Name field contacts are grouped and ordered by.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    #[default]
    First,
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactGroup {
    pub title: String,
    pub contacts: Vec<Contact>,
}

/// First grapheme of the selected name, or `""` when that name is empty.
pub fn group_key(contact: &Contact, key: SortKey) -> String {
    contact
        .sort_name(key)
        .graphemes(true)
        .next()
        .map(String::from)
        .unwrap_or_default()
}

/// Partitions contacts by initial. Buckets come back ordered by title using
/// case-sensitive string ordering; members keep their input order.
pub fn group_contacts(contacts: &[Contact], key: SortKey) -> Vec<ContactGroup> {
    let mut buckets: BTreeMap<String, Vec<Contact>> = BTreeMap::new();

    for contact in contacts {
        buckets
            .entry(group_key(contact, key))
            .or_default()
            .push(contact.clone());
    }

    buckets
        .into_iter()
        .map(|(title, contacts)| ContactGroup { title, contacts })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(first: &str, last: &str) -> Contact {
        Contact::new(first.to_string(), last.to_string(), "+1234567".to_string())
    }

    fn titles(groups: &[ContactGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.title.as_str()).collect()
    }

    #[test]
    fn groups_by_first_name_case_sensitive() {
        let contacts = vec![
            contact("Ann", "Lee"),
            contact("Bob", "Lee"),
            contact("ann", "Kim"),
        ];

        let groups = group_contacts(&contacts, SortKey::First);

        assert_eq!(titles(&groups), vec!["A", "B", "a"]);
        assert_eq!(groups[0].contacts, vec![contacts[0].clone()]);
        assert_eq!(groups[2].contacts, vec![contacts[2].clone()]);
    }

    #[test]
    fn groups_by_last_name_keep_input_order() {
        let contacts = vec![
            contact("Zed", "Lee"),
            contact("Ann", "Kim"),
            contact("Amy", "Lam"),
        ];

        let groups = group_contacts(&contacts, SortKey::Last);

        assert_eq!(titles(&groups), vec!["K", "L"]);
        let l_names: Vec<&str> = groups[1]
            .contacts
            .iter()
            .map(|c| c.first_name.as_str())
            .collect();
        assert_eq!(l_names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn grouping_is_deterministic() {
        let contacts = vec![
            contact("Cara", "Moe"),
            contact("Abe", "Noe"),
            contact("Cid", "Oz"),
            contact("Abe", "Poe"),
        ];

        let first = group_contacts(&contacts, SortKey::First);
        let second = group_contacts(&contacts, SortKey::First);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_name_lands_in_leading_fallback_group() {
        let contacts = vec![contact("Bob", "Lee"), contact("", "Kim")];

        let groups = group_contacts(&contacts, SortKey::First);

        assert_eq!(titles(&groups), vec!["", "B"]);
        assert_eq!(groups[0].contacts[0].last_name, "Kim");
    }

    #[test]
    fn multibyte_initial_is_one_char() {
        let groups = group_contacts(&[contact("Жанна", "Ли")], SortKey::First);

        assert_eq!(titles(&groups), vec!["Ж"]);
    }

    #[test]
    fn combining_mark_stays_with_initial() {
        let emile = contact("E\u{301}mile", "Zola");
        let eve = contact("Eve", "Lee");

        let groups = group_contacts(&[emile.clone(), eve], SortKey::First);

        assert_eq!(titles(&groups), vec!["E", "E\u{301}"]);
        assert_eq!(groups[1].contacts, vec![emile]);
    }

    #[test]
    fn no_contacts_no_groups() {
        assert!(group_contacts(&[], SortKey::Last).is_empty());
    }
}
