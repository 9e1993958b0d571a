//! # panorama-events
//!
//! The event side of the calendar: the feed-agnostic [`Event`] model,
//! subscribed [`CalendarSource`]s, and a per-year cache over an injected
//! [`EventCache`] backend. Fetching and iCalendar parsing happen elsewhere;
//! this crate starts from events that are already structured.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use panorama_events::{Event, MemoryCache, YearCache};
//!
//! let events = vec![Event::new("uid-1", "work", "Launch", "2024-03-01", "2024-03-02")
//!     .with_all_day(true)];
//! let now = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
//!
//! let mut cache = YearCache::new(MemoryCache::new());
//! cache.store(2024, &["work"], &events, now).unwrap();
//! assert_eq!(cache.load(2024, &["work"], now), Some(events));
//! ```

mod cache;
mod error;
mod event;
mod filter;
mod reader;
mod source;
mod time;
mod year_cache;

pub use cache::{EventCache, FileCache, MemoryCache};
pub use error::EventsError;
pub use event::{DEFAULT_EVENT_COLOR, Event, UNTITLED};
pub use filter::{events_in_year, select_sources};
pub use reader::read_events;
pub use source::{CALENDAR_COLORS, CalendarSource, DEFAULT_SOURCE_TITLE, create_source};
pub use time::parse_instant;
pub use year_cache::{CACHE_VERSION, DEFAULT_TTL_HOURS, YearCache, cache_key};
