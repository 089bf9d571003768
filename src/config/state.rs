// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// A11Y panel open (true) or collapsed to its toggle button (false)
    pub show_checker: bool,

    /// Keyboard-highlighted testimonial row
    pub focused_row: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
