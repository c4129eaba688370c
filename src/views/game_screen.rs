use std::time::Duration;

use iced::{
    event::{self, Event},
    keyboard::{self, Key},
    time::{self, Instant},
    touch,
    widget::{column, container, row, text, Column, Row},
    Border, Color, Element, Length, Subscription,
};

use crate::{
    app::Message,
    models::board::TICK_MILLIS,
    view::View,
    view_model::ViewModel,
    view_models::game_view_model::GameViewModel,
};

/// Messages produced while a round is on screen.
#[derive(Clone, Debug)]
pub enum GameMessage {
    Tick(Instant),
    Clock(Instant),
    Key(Key),
    Touch(touch::Event),
}

/// How one cell gets painted this frame.
#[derive(Clone, Copy, Debug)]
enum CellPaint {
    Empty,
    Snake,
    Food,
}

#[derive(Debug)]
pub struct GameScreen {
    view_model: GameViewModel,
}

impl GameScreen {
    #[must_use]
    pub fn new(view_model: GameViewModel) -> Self {
        Self { view_model }
    }

    /// Rebuilds the paint buffer from scratch: snake segments first, food
    /// last so it stays visible when it spawned under the snake.
    fn paint_grid(&self) -> Vec<Vec<CellPaint>> {
        let mut grid =
            vec![vec![CellPaint::Empty; self.view_model.get_cols()]; self.view_model.get_rows()];
        for &(r, c) in self.view_model.get_snake() {
            grid[r][c] = CellPaint::Snake;
        }
        let (fr, fc) = self.view_model.get_food();
        grid[fr][fc] = CellPaint::Food;
        grid
    }
}

impl View for GameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<'_, Message> {
        let cell_size = 40;

        let make_container = |color: Color| {
            container(text(" ").color(color)) // Empty text to preserve size
                .width(cell_size)
                .height(cell_size)
                .style(move |_: &_| container::Style {
                    border: Border {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
                        width: 1.0,
                        ..Default::default()
                    },
                    background: Some(color.into()),
                    ..container::Style::default()
                })
        };

        let mut grid_view = Column::new();
        for paint_row in self.paint_grid() {
            let mut row_view = Row::new();
            for cell in paint_row {
                let rectangle = match cell {
                    CellPaint::Empty => make_container(Color::WHITE),
                    CellPaint::Snake => make_container(Color::from_rgb(0.0, 0.8, 0.2)),
                    CellPaint::Food => make_container(Color::from_rgb(1.0, 0.0, 0.0)),
                };
                row_view = row_view.push(rectangle);
            }
            grid_view = grid_view.push(row_view);
        }

        let header = row![
            text(format!("Score: {}", self.view_model.get_score())),
            text(format!("High Score: {}", self.view_model.get_high_score())),
            text(format!("Time: {}", self.view_model.get_time_display())),
        ]
        .spacing(40);

        container(column![header, grid_view].spacing(10))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick = time::every(Duration::from_millis(TICK_MILLIS))
            .map(GameMessage::Tick)
            .map(Message::Game);
        let clock = time::every(Duration::from_secs(1))
            .map(GameMessage::Clock)
            .map(Message::Game);
        let keyboard =
            keyboard::on_key_press(|key, _| Some(Message::Game(GameMessage::Key(key))));
        let touch = event::listen_with(|event, _status, _window| match event {
            Event::Touch(touch_event) => Some(Message::Game(GameMessage::Touch(touch_event))),
            _ => None,
        });
        Subscription::batch(vec![tick, clock, keyboard, touch])
    }
}
