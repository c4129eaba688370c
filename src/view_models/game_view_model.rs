use std::collections::VecDeque;

use iced::{
    keyboard::{key::Named, Key},
    touch,
};
use log::{debug, info, warn};

use crate::{
    app::Message,
    models::{
        board::{Board, BoardError, Direction, TickOutcome},
        clock::GameClock,
        config::GameConfig,
        gesture::SwipeTracker,
        high_score::HighScoreStore,
    },
    view_model::ViewModel,
    views::game_screen::GameMessage,
};

/// Drives one round: advances the board on movement ticks, counts seconds on
/// clock ticks, applies keyboard and swipe input, and writes through to the
/// high-score store the moment the score beats it.
#[derive(Debug)]
pub struct GameViewModel {
    board: Board,
    clock: GameClock,
    store: HighScoreStore,
    swipe: SwipeTracker,
    game_over: bool,
}

impl GameViewModel {
    /// Creates the state for a fresh round.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] when the configured grid is too small to
    /// play on.
    pub fn new(config: GameConfig, store: HighScoreStore) -> Result<Self, BoardError> {
        debug!("New round on a {}x{} grid", config.rows, config.cols);
        Ok(Self {
            board: Board::new(config)?,
            clock: GameClock::new(),
            store,
            swipe: SwipeTracker::new(),
            game_over: false,
        })
    }

    fn handle_tick(&mut self) -> Option<Message> {
        if self.game_over {
            debug!("Tick after the round ended");
            return None;
        }
        match self.board.tick() {
            TickOutcome::Moved => None,
            TickOutcome::Ate => {
                let score = self.board.get_score();
                if self.store.record(score) {
                    info!("New high score: {score}");
                }
                None
            }
            TickOutcome::Collision(kind) => {
                debug!("Round over on a {kind:?} collision");
                self.game_over = true;
                Some(Message::GameOver {
                    score: self.board.get_score(),
                })
            }
        }
    }

    fn handle_clock(&mut self) {
        if !self.game_over {
            self.clock.tick();
        }
    }

    fn handle_key(&mut self, key: &Key) {
        if self.game_over {
            return;
        }
        if let Some(direction) = Self::direction_for_key(key) {
            self.board.steer(direction);
        }
    }

    fn handle_touch(&mut self, event: touch::Event) {
        if self.game_over {
            return;
        }
        match event {
            touch::Event::FingerPressed { position, .. } => {
                self.swipe.begin(position.x, position.y);
            }
            touch::Event::FingerMoved { position, .. } => {
                self.swipe.update(position.x, position.y);
            }
            touch::Event::FingerLifted { .. } => {
                if let Some(direction) = self.swipe.finish() {
                    self.board.steer(direction);
                }
            }
            touch::Event::FingerLost { .. } => self.swipe.cancel(),
        }
    }

    #[must_use]
    pub fn direction_for_key(key: &Key) -> Option<Direction> {
        match key {
            Key::Named(Named::ArrowUp) => Some(Direction::Up),
            Key::Named(Named::ArrowDown) => Some(Direction::Down),
            Key::Named(Named::ArrowLeft) => Some(Direction::Left),
            Key::Named(Named::ArrowRight) => Some(Direction::Right),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_rows(&self) -> usize {
        self.board.get_rows()
    }

    #[must_use]
    pub fn get_cols(&self) -> usize {
        self.board.get_cols()
    }

    #[must_use]
    pub fn get_snake(&self) -> &VecDeque<(usize, usize)> {
        self.board.get_snake()
    }

    #[must_use]
    pub fn get_food(&self) -> (usize, usize) {
        self.board.get_food()
    }

    #[must_use]
    pub fn get_score(&self) -> u32 {
        self.board.get_score()
    }

    #[must_use]
    pub fn get_high_score(&self) -> u32 {
        self.store.get()
    }

    #[must_use]
    pub fn get_time_display(&self) -> String {
        self.clock.display()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

impl ViewModel for GameViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Game(game_message) = message {
            match game_message {
                GameMessage::Tick(_) => self.handle_tick(),
                GameMessage::Clock(_) => {
                    self.handle_clock();
                    None
                }
                GameMessage::Key(key) => {
                    self.handle_key(&key);
                    None
                }
                GameMessage::Touch(event) => {
                    self.handle_touch(event);
                    None
                }
            }
        } else {
            warn!("Non-game message sent to GameViewModel: {message:#?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gridsnake_vm_{name}_{}.json", std::process::id()))
    }

    fn test_vm(name: &str) -> GameViewModel {
        let path = temp_path(name);
        let _ = std::fs::remove_file(&path);
        GameViewModel::new(GameConfig::small(), HighScoreStore::load(path)).unwrap()
    }

    #[test]
    fn fresh_round_is_zeroed() {
        let vm = test_vm("fresh");
        assert_eq!(vm.get_score(), 0);
        assert_eq!(vm.get_time_display(), "00:00");
        assert_eq!(vm.get_snake().len(), 1);
        assert!(!vm.is_game_over());
    }

    #[test]
    fn collision_ends_the_round_once() {
        let mut vm = test_vm("collision");
        vm.board = Board::with_state(GameConfig::small(), &[(0, 0)], Direction::Up, (4, 4));
        let message = vm.handle_tick();
        assert!(matches!(message, Some(Message::GameOver { score: 0 })));
        assert!(vm.is_game_over());
        assert!(vm.handle_tick().is_none());
    }

    #[test]
    fn eating_writes_the_record_through() {
        let path = temp_path("record");
        let _ = std::fs::remove_file(&path);
        let mut vm =
            GameViewModel::new(GameConfig::small(), HighScoreStore::load(&path)).unwrap();
        vm.board = Board::with_state(GameConfig::small(), &[(1, 3)], Direction::Down, (2, 3));
        assert!(vm.handle_tick().is_none());
        assert_eq!(vm.get_score(), 1);
        assert_eq!(vm.get_high_score(), 1);
        assert_eq!(HighScoreStore::load(&path).get(), 1);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn clock_only_runs_while_playing() {
        let mut vm = test_vm("clock");
        vm.handle_clock();
        vm.handle_clock();
        assert_eq!(vm.get_time_display(), "00:02");
        vm.game_over = true;
        vm.handle_clock();
        assert_eq!(vm.get_time_display(), "00:02");
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(
            GameViewModel::direction_for_key(&Key::Named(Named::ArrowUp)),
            Some(Direction::Up)
        );
        assert_eq!(
            GameViewModel::direction_for_key(&Key::Named(Named::ArrowDown)),
            Some(Direction::Down)
        );
        assert_eq!(
            GameViewModel::direction_for_key(&Key::Named(Named::ArrowLeft)),
            Some(Direction::Left)
        );
        assert_eq!(
            GameViewModel::direction_for_key(&Key::Named(Named::ArrowRight)),
            Some(Direction::Right)
        );
        assert_eq!(
            GameViewModel::direction_for_key(&Key::Named(Named::Space)),
            None
        );
    }

    #[test]
    fn swipes_steer_the_snake() {
        let mut vm = test_vm("swipe");
        let finger = touch::Finger(0);
        vm.handle_touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(10.0, 10.0),
        });
        vm.handle_touch(touch::Event::FingerMoved {
            id: finger,
            position: Point::new(70.0, 20.0),
        });
        vm.handle_touch(touch::Event::FingerLifted {
            id: finger,
            position: Point::new(70.0, 20.0),
        });
        assert_eq!(vm.board.get_direction(), Direction::Right);
    }

    #[test]
    fn reversing_swipes_are_ignored() {
        let mut vm = test_vm("reverse_swipe");
        let finger = touch::Finger(0);
        // The round starts heading down; an upward swipe must not flip it.
        vm.handle_touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(50.0, 90.0),
        });
        vm.handle_touch(touch::Event::FingerMoved {
            id: finger,
            position: Point::new(50.0, 10.0),
        });
        vm.handle_touch(touch::Event::FingerLifted {
            id: finger,
            position: Point::new(50.0, 10.0),
        });
        assert_eq!(vm.board.get_direction(), Direction::Down);
    }
}
