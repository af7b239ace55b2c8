//! Navigable screen identities.

use std::fmt;

use crate::ContactId;

/// One of the two screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// The contact list. Root of the navigation stack.
    #[default]
    List,
    /// Details for a single contact.
    Detail(ContactId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Detail(id) => write!(f, "detail/{id}"),
        }
    }
}
