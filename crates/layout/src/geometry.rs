//! View modes and their grid geometries.

use std::fmt;
use std::str::FromStr;

use panorama_calendar::{Row, WeekStart, cyclical_rows, fixed_week_columns, month_rows};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Column count of the date grid: one column per possible day of month.
pub const DATE_GRID_COLUMNS: u32 = 31;

/// Column count of the cyclical grid: four Monday-first weeks.
pub const CYCLICAL_COLUMNS: u32 = 28;

/// The three interchangeable year layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Months as rows, day-of-month as columns.
    #[default]
    DateGrid,
    /// Months as rows, columns aligned to a common weekday.
    FixedWeek,
    /// 28-day cycles and reset weeks over the ISO week-year.
    Cyclical,
}

impl ViewMode {
    /// Returns the kebab-case name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::DateGrid => "date-grid",
            ViewMode::FixedWeek => "fixed-week",
            ViewMode::Cyclical => "cyclical",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date-grid" => Ok(ViewMode::DateGrid),
            "fixed-week" => Ok(ViewMode::FixedWeek),
            "cyclical" => Ok(ViewMode::Cyclical),
            other => Err(LayoutError::UnknownViewMode {
                name: other.to_string(),
            }),
        }
    }
}

/// How event dates map onto columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// Column = day of month - 1.
    DateGrid,
    /// Column = weekday offset of the month's first day + day of month - 1.
    FixedWeek {
        /// First weekday of the column grid.
        week_start: WeekStart,
    },
    /// Column = days since the row's first day.
    Cyclical,
}

impl Geometry {
    /// Builds the geometry for `mode`. `week_start` only matters for
    /// [`ViewMode::FixedWeek`].
    pub fn new(mode: ViewMode, week_start: WeekStart) -> Self {
        match mode {
            ViewMode::DateGrid => Geometry::DateGrid,
            ViewMode::FixedWeek => Geometry::FixedWeek { week_start },
            ViewMode::Cyclical => Geometry::Cyclical,
        }
    }

    /// Returns the view mode this geometry belongs to.
    pub fn mode(self) -> ViewMode {
        match self {
            Geometry::DateGrid => ViewMode::DateGrid,
            Geometry::FixedWeek { .. } => ViewMode::FixedWeek,
            Geometry::Cyclical => ViewMode::Cyclical,
        }
    }

    /// Returns the rows this geometry lays out for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Calendar`] when `year` cannot be represented.
    pub fn rows(self, year: i32) -> Result<Vec<Row>, LayoutError> {
        let rows = match self {
            Geometry::DateGrid | Geometry::FixedWeek { .. } => month_rows(year)?,
            Geometry::Cyclical => cyclical_rows(year)?,
        };
        Ok(rows)
    }

    /// Returns the number of columns every row of `year` is drawn with.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Calendar`] when `year` cannot be represented.
    pub fn columns(self, year: i32) -> Result<u32, LayoutError> {
        match self {
            Geometry::DateGrid => Ok(DATE_GRID_COLUMNS),
            Geometry::FixedWeek { week_start } => Ok(fixed_week_columns(year, week_start)?),
            Geometry::Cyclical => Ok(CYCLICAL_COLUMNS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("date-grid".parse::<ViewMode>().unwrap(), ViewMode::DateGrid);
        assert_eq!("Fixed-Week".parse::<ViewMode>().unwrap(), ViewMode::FixedWeek);
        assert_eq!(" cyclical ".parse::<ViewMode>().unwrap(), ViewMode::Cyclical);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "agenda".parse::<ViewMode>().unwrap_err(),
            LayoutError::UnknownViewMode {
                name: "agenda".to_string()
            }
        );
    }

    #[test]
    fn display_roundtrip() {
        for mode in [ViewMode::DateGrid, ViewMode::FixedWeek, ViewMode::Cyclical] {
            assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), mode);
        }
    }

    #[test]
    fn serde_kebab_case() {
        let json = serde_json::to_string(&ViewMode::FixedWeek).unwrap();
        assert_eq!(json, "\"fixed-week\"");
    }

    #[test]
    fn geometry_mode_roundtrip() {
        let ws = WeekStart::MONDAY;
        for mode in [ViewMode::DateGrid, ViewMode::FixedWeek, ViewMode::Cyclical] {
            assert_eq!(Geometry::new(mode, ws).mode(), mode);
        }
    }

    #[test]
    fn rows_per_geometry() {
        assert_eq!(Geometry::DateGrid.rows(2024).unwrap().len(), 12);
        assert_eq!(Geometry::Cyclical.rows(2024).unwrap().len(), 16);
    }

    #[test]
    fn columns_per_geometry() {
        assert_eq!(Geometry::DateGrid.columns(2024).unwrap(), 31);
        assert_eq!(Geometry::Cyclical.columns(2024).unwrap(), 28);
        let fixed = Geometry::FixedWeek {
            week_start: WeekStart::SUNDAY,
        };
        assert_eq!(fixed.columns(2024).unwrap(), 36);
    }
}
