use gridsnake::app::State;
use log::debug;

fn main() {
    std::env::set_var("RUST_LOG", "gridsnake=debug");
    env_logger::init();
    debug!("Debug on");
    let _ = iced::application("Snake", State::update, State::view)
        .window_size(iced::Size::new(840.0, 700.0))
        .subscription(State::subscription)
        .run();
}
