//! Presentation options for the terminal session.

use crate::utils::render_game_state::RenderStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub style: RenderStyle,
    /// Clear the terminal before every board redraw.
    pub clear_screen: bool,
    /// Wait for Enter after an error or notice so it is not wiped by the redraw.
    pub pause_after_error: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::Ansi,
            clear_screen: true,
            pause_after_error: true,
        }
    }
}

impl SessionConfig {
    /// Escape-free, non-interactive output for scripted input and tests.
    pub fn headless() -> Self {
        Self {
            style: RenderStyle::Plain,
            clear_screen: false,
            pause_after_error: false,
        }
    }
}
