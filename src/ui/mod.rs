//! UI-Komponenten: Input-Handling, Status-Bar, Dialoge.

pub mod dialogs;
pub mod input;
mod keyboard;
pub mod status;

pub use dialogs::handle_file_dialogs;
pub use input::collect_viewport_events;
pub use status::render_status_bar;
