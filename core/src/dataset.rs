//! Built-in contact list loaded at startup.

use contacts_types::{ContactId, ContactProfile};

/// `(id, name, description, online)`
const CONTACTS: &[(u32, &str, &str, bool)] = &[
    (
        0,
        "Amara Okafor",
        "Runs the neighbourhood book swap and answers messages within minutes.",
        true,
    ),
    (
        1,
        "Bruno Lindqvist",
        "Night-shift paramedic. Best reached after noon.",
        false,
    ),
    (
        2,
        "Chen Wei",
        "Organises the Thursday climbing group; always looking for belay partners.",
        true,
    ),
    (
        3,
        "Dalia Haddad",
        "Freelance translator working between Arabic, French and English.",
        true,
    ),
    (
        4,
        "Emeka Nwosu",
        "Keeps bees on the roof of the community garden.",
        false,
    ),
    (
        5,
        "Freya Sørensen",
        "Restores vintage bicycles and lends tools to anyone who asks.",
        true,
    ),
    (
        6,
        "Gustavo Ribeiro",
        "Drummer in two bands, neither of which has released anything.",
        false,
    ),
    (
        7,
        "Hana Kobayashi",
        "Teaches weekend pottery classes at the old fire station.",
        true,
    ),
    (
        8,
        "Idris Rahman",
        "Volunteer coordinator for the food bank on Mill Street.",
        false,
    ),
    (
        9,
        "Jolene Mercer",
        "Bakes sourdough on Saturdays and trades loaves for seeds.",
        true,
    ),
];

/// Fresh copy of the built-in dataset, in display order.
#[must_use]
pub fn builtin_contacts() -> Vec<ContactProfile> {
    CONTACTS
        .iter()
        .map(|&(id, name, description, online)| {
            ContactProfile::new(ContactId::new(id), name, description, online)
        })
        .collect()
}
