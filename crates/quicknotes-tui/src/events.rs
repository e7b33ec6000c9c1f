//! Application events delivered to the main loop.

use crossterm::event::KeyEvent;

pub enum AppEvent {
    Input(KeyEvent),
    Resize,
}
