use crate::ContactId;

/// A user intent, produced by the input layer or attached to a UI element.
///
/// Screens hand these out in place of callbacks: a contact card carries
/// `OpenContact(id)` and the detail title bar carries `Back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenContact(ContactId),
    /// Open the card under the list cursor.
    OpenSelected,
    Back,
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    PageDown,
    PageUp,
    ScrollDown,
    ScrollUp,
    Quit,
}
