//! The contact record and its derived presence.

use crate::ContactId;

/// Whether a contact is currently reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Active,
    Offline,
}

impl Presence {
    #[must_use]
    pub const fn from_online(online: bool) -> Self {
        if online { Self::Active } else { Self::Offline }
    }

    /// Status line shown under a contact's name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active now",
            Self::Offline => "Offline",
        }
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A single entry of the contact dataset.
///
/// Immutable once constructed: fields are private and only exposed through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactProfile {
    id: ContactId,
    name: String,
    description: String,
    online: bool,
}

impl ContactProfile {
    pub fn new(
        id: ContactId,
        name: impl Into<String>,
        description: impl Into<String>,
        online: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            online,
        }
    }

    #[must_use]
    pub fn id(&self) -> ContactId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online
    }

    #[must_use]
    pub fn presence(&self) -> Presence {
        Presence::from_online(self.online)
    }

    /// Reference an avatar image would be loaded from.
    ///
    /// The description doubles as the picture reference. Nothing resolves it
    /// yet; avatars render a fixed placeholder.
    #[must_use]
    pub fn avatar_ref(&self) -> &str {
        &self.description
    }
}
