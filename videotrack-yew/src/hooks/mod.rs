mod use_watch;

pub use use_watch::{use_watch, WatchContext};
