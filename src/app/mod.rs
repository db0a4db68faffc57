pub mod app;
pub mod cursor;
pub mod event;
pub mod mode;
pub mod render_state;
pub mod state;

pub use app::App;
pub use cursor::LineCursor;
pub use event::{AppEvent, EntryEdit};
pub use mode::AppMode;
pub use render_state::RenderState;
pub use state::FormState;
