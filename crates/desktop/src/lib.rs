//! Desktop crate facade exposing the iced-based Daybook window to the wider workspace.

mod app;
mod telemetry;

pub use app::{run, DesktopOptions};
