//! Immutable, ordered contact dataset with id lookup.

use thiserror::Error;

use contacts_types::{ContactId, ContactProfile};

use crate::builtin_contacts;

/// Lookup of an id that is not part of the dataset.
///
/// Ids only ever come from the rendered list, so hitting this means a caller
/// mixed up datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no contact with id {id}")]
pub struct ContactNotFound {
    pub id: ContactId,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("contact id {0} appears more than once")]
    DuplicateId(ContactId),
}

/// The ordered contact list shown by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    contacts: Vec<ContactProfile>,
}

impl Directory {
    /// Wraps `contacts`, keeping their order. Ids must be unique.
    pub fn new(contacts: Vec<ContactProfile>) -> Result<Self, DirectoryError> {
        for (index, contact) in contacts.iter().enumerate() {
            if contacts[..index].iter().any(|c| c.id() == contact.id()) {
                return Err(DirectoryError::DuplicateId(contact.id()));
            }
        }
        Ok(Self { contacts })
    }

    /// Directory over [`builtin_contacts`].
    pub fn builtin() -> Result<Self, DirectoryError> {
        Self::new(builtin_contacts())
    }

    #[must_use]
    pub fn contacts(&self) -> &[ContactProfile] {
        &self.contacts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Linear search by id.
    pub fn get(&self, id: ContactId) -> Result<&ContactProfile, ContactNotFound> {
        self.contacts
            .iter()
            .find(|contact| contact.id() == id)
            .ok_or(ContactNotFound { id })
    }

    #[must_use]
    pub fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|contact| contact.id() == id)
    }

    #[must_use]
    pub fn at(&self, index: usize) -> Option<&ContactProfile> {
        self.contacts.get(index)
    }
}
