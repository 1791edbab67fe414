// UI components - one file per widget
//
// Components are pure render functions over &App: they read carousel state
// and draw, never mutate. State changes all go through App's handlers.

pub mod dots;
pub mod slide_panel;
pub mod status_bar;
pub mod title_bar;
