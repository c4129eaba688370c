use iced::{Element, Subscription};
use log::{debug, error};

use crate::{
    models::{config::GameConfig, high_score::HighScoreStore},
    view::View,
    view_models::game_view_model::GameViewModel,
    views::{
        game_screen::{GameMessage, GameScreen},
        menu_screen::MenuScreen,
    },
};

/// Top-level messages routed through the application loop.
#[derive(Clone, Debug)]
pub enum Message {
    /// Start or restart a round from the menu.
    StartGame,
    /// A round ended in a collision.
    GameOver { score: u32 },
    /// Traffic for the round currently on screen.
    Game(GameMessage),
}

pub struct State {
    screen: Screen,
    config: GameConfig,
    store: HighScoreStore,
}

#[derive(Debug)]
enum Screen {
    Menu(MenuScreen),
    Game(GameScreen),
}

impl View for Screen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match self {
            Screen::Menu(screen) => screen.update(message),
            Screen::Game(screen) => screen.update(message),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self {
            Screen::Menu(screen) => screen.view(),
            Screen::Game(screen) => screen.view(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self {
            Screen::Menu(screen) => screen.subscription(),
            Screen::Game(screen) => screen.subscription(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        let store = HighScoreStore::load_default();
        Self {
            screen: Screen::Menu(MenuScreen::start_prompt(store.get())),
            config: GameConfig::default(),
            store,
        }
    }

    pub fn update(state: &mut State, message: Message) {
        match message {
            Message::StartGame => {
                match GameViewModel::new(state.config, state.store.clone()) {
                    Ok(view_model) => {
                        debug!("Starting a round");
                        state.screen = Screen::Game(GameScreen::new(view_model));
                    }
                    Err(e) => error!("Could not start a round: {e:?}"),
                }
            }
            Message::GameOver { score } => {
                state.store.record(score);
                state.screen = Screen::Menu(MenuScreen::game_over(score, state.store.get()));
            }
            Message::Game(game_message) => {
                if let Some(next) = state.screen.update(Message::Game(game_message)) {
                    // Finite recursion: a round only ever answers with a
                    // transition message, which the arms above consume.
                    Self::update(state, next);
                }
            }
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<'_, Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
