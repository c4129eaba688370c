//! The [`ViewModel`] trait for the MVVM architecture.

use crate::app::Message;

/// Trait containing methods for `ViewModel` modules in the MVVM architecture.
pub trait ViewModel {
    /// Consumes a message on behalf of a [`crate::view::View`], possibly
    /// answering with a follow-up message.
    fn update(&mut self, message: Message) -> Option<Message>;
}
