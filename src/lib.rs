pub use daybook_core as core;
pub use daybook_core::book;
pub use daybook_core::filter;
pub use daybook_core::model;
pub use daybook_core::prefs;
pub use daybook_core::theme;

pub use daybook_desktop as desktop;
pub use daybook_desktop::DesktopOptions;
