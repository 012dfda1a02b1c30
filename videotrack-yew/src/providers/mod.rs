mod watch_provider;

pub use watch_provider::{WatchProvider, WatchProviderProps};
