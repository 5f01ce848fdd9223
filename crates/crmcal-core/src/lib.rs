pub mod app_config;
pub mod bucket;
pub mod config;
pub mod dataset;
pub mod error;
pub mod event;
pub mod event_type;
pub mod fallback;
pub mod filter;
pub mod index;
pub mod preferences;
pub mod split;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use app_config::{AppConfig, Environment};
pub use bucket::{
    truncate_list, DateBuckets, DayBucket, DayKey, Truncated, MAX_DAY_LIST_ITEMS,
    MAX_INDICATOR_DOTS,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use dataset::{load_events, parse_events, EventsFile};
pub use error::{ConfigError, CoreError};
pub use event::{CalendarEvent, EntityRef, EventMetadata};
pub use event_type::{EventType, EventTypeStyle};
pub use fallback::{select_fallback, Fallback, FallbackDirection, FALLBACK_LIMIT};
pub use filter::{filter_events, EntityFilter, TypeFilter};
pub use index::{DayView, EventDateIndex};
pub use preferences::{
    CalendarPreferences, FilePreferences, MemoryPreferences, PreferenceError, PreferenceStore,
    SPLIT_RATIO_KEY, VIEW_MODE_KEY,
};
pub use split::{ContainerBounds, DragSession, LayoutError, SplitBounds, SplitLayout};
pub use state::{CalendarScope, CalendarState, DateRange, ViewMode};
