//! # panorama-layout
//!
//! Maps events onto the rows of a year-long calendar. Each event becomes a
//! [`Segment`] per row it touches, with a horizontal span in that row's
//! columns and a lane chosen so no two bars in a lane overlap.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Event"] -->|"event_days()"| B["inclusive day span"]
//!     B -->|"DateRange::clamp()"| C["clamped span"]
//!     C -->|"sort"| D["ordered spans"]
//!     D -->|"place(Geometry)"| E["x_start, width"]
//!     E -->|"assign_lanes()"| F["Segment"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use panorama_calendar::{DateRange, WeekStart};
//! use panorama_events::Event;
//! use panorama_layout::{Geometry, ViewMode, build_segments};
//! use chrono::NaiveDate;
//!
//! let march = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
//! )
//! .unwrap();
//! let events = vec![
//!     Event::new("a", "work", "Offsite", "2024-03-01", "2024-03-03").with_all_day(true),
//!     Event::new("b", "work", "Review", "2024-03-02T14:00:00Z", "2024-03-02T15:00:00Z"),
//! ];
//!
//! let geometry = Geometry::new(ViewMode::DateGrid, WeekStart::default());
//! let segments = build_segments(&events, march, geometry);
//! assert_eq!(segments[0].width, 2);
//! assert_eq!(segments[1].lane, 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `geometry` | View modes and column counts |
//! | `span` | Event instants to inclusive day spans |
//! | `position` | Per-geometry horizontal placement |
//! | `lanes` | Greedy lane packing |
//! | `segment` | Segment builder for one row |
//! | `row_layout` | Segment builder over a whole year |
//! | `error` | Error types |

mod error;
mod geometry;
mod lanes;
mod position;
mod row_layout;
mod segment;
mod span;

pub use error::LayoutError;
pub use geometry::{CYCLICAL_COLUMNS, DATE_GRID_COLUMNS, Geometry, ViewMode};
pub use lanes::{assign_lanes, lane_count};
pub use position::{Placement, place};
pub use row_layout::{RowLayout, layout_rows};
pub use segment::{Segment, build_segments, build_segments_with_offset};
pub use span::{event_days, is_all_day_like};
