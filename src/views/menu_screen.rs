use iced::{
    widget::{button, container, text, Column},
    Alignment, Element, Length, Subscription,
};
use log::debug;

use crate::{app::Message, view::View};

/// Which panel the menu is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuMode {
    StartPrompt,
    GameOver { final_score: u32 },
}

/// The screen shown whenever no round is running: the start prompt at
/// launch, the game-over panel after a collision. It subscribes to nothing,
/// so no timers run and no game input gets through while it is up.
#[derive(Debug)]
pub struct MenuScreen {
    mode: MenuMode,
    high_score: u32,
}

impl MenuScreen {
    #[must_use]
    pub fn start_prompt(high_score: u32) -> Self {
        Self {
            mode: MenuMode::StartPrompt,
            high_score,
        }
    }

    #[must_use]
    pub fn game_over(final_score: u32, high_score: u32) -> Self {
        Self {
            mode: MenuMode::GameOver { final_score },
            high_score,
        }
    }

    #[must_use]
    pub fn get_mode(&self) -> MenuMode {
        self.mode
    }
}

impl View for MenuScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        debug!("Received message for the menu but was: {message:#?}");
        None
    }

    fn view(&self) -> Element<'_, Message> {
        let start_label = match self.mode {
            MenuMode::StartPrompt => "Start Game",
            MenuMode::GameOver { .. } => "Restart",
        };
        let start_button = button(
            text(start_label)
                .align_x(iced::alignment::Horizontal::Center)
                .align_y(iced::alignment::Vertical::Center),
        )
        .on_press(Message::StartGame)
        .width(160)
        .height(50);

        let mut panel = Column::new().spacing(20).align_x(Alignment::Center);
        panel = match self.mode {
            MenuMode::StartPrompt => panel.push(text("Snake").size(40)),
            MenuMode::GameOver { final_score } => panel
                .push(text("Game Over").size(40))
                .push(text(format!("Score: {final_score}"))),
        };
        panel = panel
            .push(text(format!("High Score: {}", self.high_score)))
            .push(start_button);

        container(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }
}
