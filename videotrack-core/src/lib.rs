pub mod domain;

pub use domain::{
    is_form_complete, FormControl, FormField, MetadataError, PlayerState, Segment, Timestamp,
    VideoMetadata, WatchEffect, WatchError, WatchReport, WatchSession,
};
