//! Desktop application wiring that composes views, state, and preferences for the Daybook window.

pub use self::desktop::run;
pub use self::options::DesktopOptions;

mod commands;
mod desktop;
mod helpers;
mod message;
mod options;
mod state;
mod theme;
mod update;
mod views;
