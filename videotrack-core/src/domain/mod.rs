pub mod effects;
pub mod form;
pub mod player;
pub mod report;
pub mod segment;
pub mod watch_session;

pub use effects::WatchEffect;
pub use form::{is_form_complete, FormControl, FormField};
pub use player::{MetadataError, PlayerState, VideoMetadata};
pub use report::WatchReport;
pub use segment::{Segment, Timestamp};
pub use watch_session::{WatchError, WatchSession};
