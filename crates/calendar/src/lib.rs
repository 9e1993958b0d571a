//! # panorama-calendar
//!
//! Pure date arithmetic for year-long linear calendars: Gregorian months,
//! weekday-aligned grids, and the cyclical ISO week-year partition.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year"] -->|"month_rows()"| B["12 month rows"]
//!     A -->|"iso_year_start()"| C["ISO week-year start"]
//!     C -->|"cyclical_rows()"| D["12 cycles + 4 reset weeks"]
//!     B -->|".range()"| E["DateRange"]
//!     D -->|".range()"| E
//!     F["WeekStart"] -->|"weekday_offset()"| G["first column of a month"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use panorama_calendar::{WeekStart, cyclical_rows, month_rows, weekday_offset};
//!
//! let months = month_rows(2024).unwrap();
//! assert_eq!(months.iter().map(|r| r.days()).sum::<u32>(), 366);
//!
//! let cycles = cyclical_rows(2024).unwrap();
//! assert_eq!(cycles.len(), 16);
//!
//! // March 2024 starts on a Friday.
//! assert_eq!(weekday_offset(2024, 3, WeekStart::SUNDAY).unwrap(), 5);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month lengths, labels, weekday offsets |
//! | `week` | Week-start newtype and weekday labels |
//! | `iso` | ISO 8601 week-year boundaries |
//! | `range` | Inclusive date ranges and clamping |
//! | `row` | Labeled rows |
//! | `structure` | Month and cyclical row generators |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod error;
mod iso;
mod month;
mod range;
mod row;
mod sequence;
mod structure;
mod week;

pub use error::CalendarError;
pub use iso::{iso_year_days, iso_year_start};
pub use month::{
    MONTH_LABELS, days_in_month, first_of_month, fixed_week_columns, is_leap_year, last_of_month,
    month_label, weekday_offset,
};
pub use range::DateRange;
pub use row::{Row, RowKind};
pub use sequence::date_sequence;
pub use structure::{CYCLE_DAYS, RESET_DAYS, cyclical_rows, month_rows};
pub use week::{WEEKDAY_LABELS, WeekStart, weekday_label};
