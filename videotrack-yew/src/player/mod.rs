//! YouTube IFrame API bridge

mod youtube;

pub use youtube::{PlayerBridge, PlayerCallbacks, PlayerError, YtPlayer};
