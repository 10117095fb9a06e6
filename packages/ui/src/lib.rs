//! This crate contains all shared UI for the workspace.

mod home;
pub use home::HomePage;

mod shorts;
pub use shorts::ShortsFeed;

mod feed;
pub use feed::{use_feed, Feed};

pub mod clips;
pub mod scroll;
pub mod search;

mod theme;
pub use theme::AstroTheme;

mod toast;
pub use toast::{use_toasts, ToastKind, ToastProvider, Toasts};
