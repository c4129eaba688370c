use iced::{Element, Subscription};

use crate::app::Message;

/// Behavior every screen exposes to the application loop.
pub trait View {
    fn update(&mut self, message: Message) -> Option<Message>;

    fn view(&self) -> Element<'_, Message>;

    fn subscription(&self) -> Subscription<Message>;
}
