//! Text and JSON renditions of rows and layouts.

use std::fmt::{self, Write};

use panorama_calendar::{Row, WeekStart, weekday_label};
use panorama_layout::{Geometry, RowLayout, ViewMode, place};
use serde::Serialize;

const LABEL_WIDTH: usize = 12;
const EMPTY_CELL: char = '.';
const OUTSIDE_CELL: char = ' ';
const BAR_CELL: char = '=';

/// JSON envelope for a whole-year layout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport<'a> {
    pub year: i32,
    pub mode: ViewMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start: Option<u8>,
    pub columns: u32,
    pub rows: &'a [RowLayout<'a>],
}

impl<'a> LayoutReport<'a> {
    pub fn new(year: i32, geometry: Geometry, columns: u32, rows: &'a [RowLayout<'a>]) -> Self {
        let week_start = match geometry {
            Geometry::FixedWeek { week_start } => Some(week_start.get()),
            _ => None,
        };
        Self {
            year,
            mode: geometry.mode(),
            week_start,
            columns,
            rows,
        }
    }
}

/// One line per row: label, first and last day, length.
pub fn rows_text(rows: &[Row]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for row in rows {
        writeln!(
            out,
            "{:<LABEL_WIDTH$} {} .. {}  {:>2} days",
            row.label(),
            row.start_date(),
            row.end_date(),
            row.days()
        )?;
    }
    Ok(out)
}

/// Column header: day numbers for the date grid, weekday initials otherwise.
fn header(geometry: Geometry, columns: u32) -> String {
    (0..columns as usize)
        .map(|col| match geometry {
            Geometry::DateGrid => char::from_digit(((col + 1) % 10) as u32, 10).unwrap_or('?'),
            Geometry::FixedWeek { week_start } => weekday_initial(week_start, col),
            Geometry::Cyclical => weekday_initial(WeekStart::MONDAY, col),
        })
        .collect()
}

fn weekday_initial(week_start: WeekStart, column: usize) -> char {
    weekday_label(week_start.weekday_at(column))
        .chars()
        .next()
        .unwrap_or('?')
}

/// Renders each row as a cell line followed by one bar line per lane and a
/// segment listing.
pub fn layout_text(
    report: &LayoutReport<'_>,
    geometry: Geometry,
) -> Result<String, fmt::Error> {
    let columns = report.columns as usize;
    let mut out = String::new();
    writeln!(
        out,
        "{} {} ({} columns)",
        report.mode, report.year, report.columns
    )?;
    writeln!(out, "{:<LABEL_WIDTH$} {}", "", header(geometry, report.columns))?;

    for layout in report.rows {
        let row = layout.row;
        let cells = place(geometry, row.range(), row.start_date(), row.end_date());
        let grid: String = (0..columns)
            .map(|col| {
                let col = col as u32;
                if cells.x_start <= col && col <= cells.x_end() {
                    EMPTY_CELL
                } else {
                    OUTSIDE_CELL
                }
            })
            .collect();
        writeln!(out, "{:<LABEL_WIDTH$} {}", row.label(), grid.trim_end())?;

        for lane in 0..layout.lane_count {
            let mut bar = vec![OUTSIDE_CELL; columns];
            for segment in layout.segments.iter().filter(|s| s.lane == lane) {
                let first = segment.x_start as usize;
                let last = (segment.x_end() as usize).min(columns.saturating_sub(1));
                for cell in bar.iter_mut().take(last + 1).skip(first) {
                    *cell = BAR_CELL;
                }
                if let Some(c) = segment.event.display_title().chars().next() {
                    if first < columns {
                        bar[first] = c;
                    }
                }
            }
            let bar: String = bar.into_iter().collect();
            writeln!(out, "{:<LABEL_WIDTH$} {}", "", bar.trim_end())?;
        }

        for segment in &layout.segments {
            writeln!(
                out,
                "{:<LABEL_WIDTH$}   L{} [{:>2}..{:>2}] {} ({} .. {})",
                "",
                segment.lane,
                segment.x_start,
                segment.x_end(),
                segment.event.display_title(),
                segment.start,
                segment.end
            )?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use chrono::{Offset, Utc};
    use panorama_events::Event;
    use panorama_layout::layout_rows;

    use super::*;

    #[test]
    fn rows_text_lists_every_row() {
        let rows = panorama_calendar::month_rows(2024).unwrap();
        let text = rows_text(&rows).unwrap();
        assert_eq!(text.lines().count(), 12);
        assert!(text.starts_with("January"), "got: {text}");
        assert!(text.contains("2024-02-01 .. 2024-02-29  29 days"));
    }

    #[test]
    fn headers_per_geometry() {
        assert_eq!(&header(Geometry::DateGrid, 12), "123456789012");
        assert_eq!(&header(Geometry::Cyclical, 7), "MTWTFSS");
        let sunday = Geometry::FixedWeek {
            week_start: WeekStart::SUNDAY,
        };
        assert_eq!(&header(sunday, 8), "SMTWTFSS");
    }

    #[test]
    fn layout_text_draws_bars() {
        let geometry = Geometry::DateGrid;
        let rows = geometry.rows(2024).unwrap();
        let events = vec![
            Event::new("a", "c", "Offsite", "2024-01-02", "2024-01-05").with_all_day(true),
            Event::new("b", "c", "Call", "2024-01-03T10:00:00Z", "2024-01-03T11:00:00Z"),
        ];
        let layouts = layout_rows(&events, &rows, geometry, Utc.fix());
        let report = LayoutReport::new(2024, geometry, 31, &layouts);
        let text = layout_text(&report, geometry).unwrap();

        assert!(text.starts_with("date-grid 2024 (31 columns)"));
        assert!(text.contains("\n              O==\n"), "got:\n{text}");
        assert!(text.contains("\n               C\n"), "got:\n{text}");
        assert!(text.contains("L1 [ 2.. 2] Call (2024-01-03 .. 2024-01-03)"));
    }

    #[test]
    fn report_json_shape() {
        let geometry = Geometry::FixedWeek {
            week_start: WeekStart::MONDAY,
        };
        let report = LayoutReport::new(2024, geometry, 37, &[]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "fixed-week");
        assert_eq!(json["weekStart"], 1);
        assert_eq!(json["columns"], 37);
        assert!(json["rows"].as_array().unwrap().is_empty());
    }
}
