use crate::core::dataset::{
    BIRTH_YEAR, Dataset, END_STATION, END_TIME, GENDER, START_STATION, START_TIME, TRIP_DURATION,
    USER_TYPE,
};
use crate::core::models::Trip;
use crate::stats::{ColumnStat, DurationStats, StationStats, TimeStats, UserStats};
use crate::ui::chrome::UiChrome;
use crate::ui::table_printer::TablePrinter;
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};
use std::time::Duration;

pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";
pub const NO_GENDER_MESSAGE: &str = "No gender data available for the selected city.";
pub const NO_BIRTH_MESSAGE: &str = "No birth data provided for the selected city.";

const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";
const MISSING_CELL: &str = "-";

/// Plain-text rendering of the four reports and of raw trip rows.
#[derive(Debug, Default, Clone)]
pub struct ReportPrinter {
    chrome: UiChrome,
    tables: TablePrinter,
    util: WidthUtil,
}

impl ReportPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_time<W: Write + ?Sized>(
        &self,
        out: &mut W,
        stats: Option<&TimeStats>,
        elapsed: Duration,
    ) -> io::Result<()> {
        self.header(out, "Calculating The Most Frequent Times of Travel...")?;
        match stats {
            Some(s) => {
                writeln!(out, "The most common month is: {}", s.month_name())?;
                writeln!(out, "The most common day of week is: {}", s.day_name())?;
                writeln!(out, "The most common start hour is: {}", s.hour)?;
            }
            None => writeln!(out, "{NO_DATA_MESSAGE}")?,
        }
        self.footer(out, elapsed)
    }

    pub fn print_station<W: Write + ?Sized>(
        &self,
        out: &mut W,
        stats: Option<&StationStats>,
        elapsed: Duration,
    ) -> io::Result<()> {
        self.header(out, "Calculating The Most Popular Stations and Trip...")?;
        match stats {
            Some(s) => {
                writeln!(out, "The most common start station is: {}", s.start_station)?;
                writeln!(out, "The most common end station is: {}", s.end_station)?;
                writeln!(out, "The most common station combination is:\n{}", s.combination)?;
            }
            None => writeln!(out, "{NO_DATA_MESSAGE}")?,
        }
        self.footer(out, elapsed)
    }

    pub fn print_duration<W: Write + ?Sized>(
        &self,
        out: &mut W,
        stats: Option<&DurationStats>,
        elapsed: Duration,
    ) -> io::Result<()> {
        self.header(out, "Calculating Trip Duration...")?;
        match stats {
            Some(s) => {
                writeln!(out, "The total travel time is: {} seconds", float_text(s.total))?;
                writeln!(out, "The mean travel time is: {} seconds", float_text(s.mean))?;
            }
            None => writeln!(out, "{NO_DATA_MESSAGE}")?,
        }
        self.footer(out, elapsed)
    }

    pub fn print_user<W: Write + ?Sized>(
        &self,
        out: &mut W,
        stats: Option<&UserStats>,
        elapsed: Duration,
    ) -> io::Result<()> {
        self.header(out, "Calculating User Stats...")?;
        let Some(s) = stats else {
            writeln!(out, "{NO_DATA_MESSAGE}")?;
            return self.footer(out, elapsed);
        };

        writeln!(out, "Counts of user types:")?;
        self.tables
            .render_counts(USER_TYPE, &s.user_types, "No user types recorded.", out)?;

        match &s.genders {
            ColumnStat::Computed(counts) => {
                writeln!(out, "\nCounts of gender:")?;
                self.tables
                    .render_counts(GENDER, counts, "No gender values recorded.", out)?;
            }
            ColumnStat::Unavailable => writeln!(out, "\n{NO_GENDER_MESSAGE}")?,
        }

        match &s.birth_years {
            ColumnStat::Computed(Some(years)) => {
                writeln!(out, "\nEarliest year of birth: {}", years.earliest)?;
                writeln!(out, "Most recent year of birth: {}", years.most_recent)?;
                writeln!(out, "Most common year of birth: {}", years.most_common)?;
            }
            ColumnStat::Computed(None) => writeln!(out, "\nNo birth years recorded.")?,
            ColumnStat::Unavailable => writeln!(out, "\n{NO_BIRTH_MESSAGE}")?,
        }
        self.footer(out, elapsed)
    }

    /// One page of raw rows, prefixed by their source row index.
    pub fn print_raw_rows<W: Write + ?Sized>(
        &self,
        out: &mut W,
        dataset: &Dataset,
        page: &[Trip],
    ) -> io::Result<()> {
        let columns = dataset.columns();
        let mut headers = vec![
            "",
            START_TIME,
            END_TIME,
            TRIP_DURATION,
            START_STATION,
            END_STATION,
            USER_TYPE,
        ];
        if columns.gender {
            headers.push(GENDER);
        }
        if columns.birth_year {
            headers.push(BIRTH_YEAR);
        }
        headers.extend(["month", "day_of_week", "hour"]);

        let rows: Vec<Vec<String>> = page
            .iter()
            .map(|t| {
                let r = &t.record;
                let mut row = vec![
                    r.row.to_string(),
                    r.start_time.format(TIMESTAMP_DISPLAY).to_string(),
                    r.end_time
                        .map(|t| t.format(TIMESTAMP_DISPLAY).to_string())
                        .unwrap_or_else(|| MISSING_CELL.to_string()),
                    r.trip_duration
                        .map(float_text)
                        .unwrap_or_else(|| MISSING_CELL.to_string()),
                    cell_or_missing(r.start_station.as_deref()),
                    cell_or_missing(r.end_station.as_deref()),
                    cell_or_missing(r.user_type.as_deref()),
                ];
                if columns.gender {
                    row.push(cell_or_missing(r.gender.as_deref()));
                }
                if columns.birth_year {
                    row.push(
                        r.birth_year
                            .map(|y| y.to_string())
                            .unwrap_or_else(|| MISSING_CELL.to_string()),
                    );
                }
                row.extend([
                    t.month.to_string(),
                    t.day_of_week.to_string(),
                    t.hour.to_string(),
                ]);
                row
            })
            .collect();

        self.tables
            .with_max_line_width(self.util.terminal_width())
            .render_table(&headers, &rows, None, out)
    }

    fn header<W: Write + ?Sized>(&self, out: &mut W, title: &str) -> io::Result<()> {
        writeln!(out, "\n{title}\n")
    }

    fn footer<W: Write + ?Sized>(&self, out: &mut W, elapsed: Duration) -> io::Result<()> {
        writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
        self.chrome.render_separator(out)
    }
}

fn cell_or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_CELL).to_string()
}

/// Shortest float text, always with a fractional part (`167.0`, `489.066`).
pub(crate) fn float_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
