pub mod command;
pub mod render;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use command::{event_to_app_event, key_to_app_event};
pub use render::draw;
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;
