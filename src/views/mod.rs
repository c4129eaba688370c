pub mod game_screen;
pub mod menu_screen;
