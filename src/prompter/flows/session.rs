use std::io::Write;
use std::time::Instant;

use strum::IntoEnumIterator;

use crate::core::context::AppContext;
use crate::core::dataset::{Dataset, load_data};
use crate::core::types::{DayOfWeek, Filter, Month};
use crate::errors::{Error, Result};
use crate::logging::LogTarget;
use crate::prompter::choice::{Choice, ChoicePrompt};
use crate::prompter::models::{Flow, FlowCtrl, SessionState};
use crate::stats::{station_stats, time_stats, trip_duration_stats, user_stats};
use crate::ui::chrome::UiChrome;
use crate::ui::report_printer::ReportPrinter;
use crate::ui::table_printer::TablePrinter;

const YES: &str = "yes";

/// One pass per iteration: pick filters, load, report, page, ask to restart.
/// Nothing but the shared context survives a restart.
pub struct SessionFlow<'a, W: Write> {
    ctx: &'a mut AppContext,
    out: W,
    chrome: UiChrome,
    reports: ReportPrinter,
    state: SessionState,
    prompt: ChoicePrompt,
    greeted: bool,
    city: Option<String>,
    month: Option<Filter<Month>>,
    dataset: Option<Dataset>,
    offset: usize,
}

impl<'a, W: Write> SessionFlow<'a, W> {
    pub fn new(ctx: &'a mut AppContext, out: W) -> Self {
        Self {
            ctx,
            out,
            chrome: UiChrome::new(),
            reports: ReportPrinter::new(),
            state: SessionState::AskCity,
            prompt: ChoicePrompt::new(),
            greeted: false,
            city: None,
            month: None,
            dataset: None,
            offset: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.out
    }

    fn page_size(&self) -> usize {
        self.ctx.config.raw_page_size()
    }

    fn current_choice(&self) -> Choice {
        match self.state {
            SessionState::AskCity => Choice::new(
                "Which city would you like to explore?",
                self.ctx.catalog.names(),
            ),
            SessionState::AskMonth => Choice::new(
                "Which month would you like to explore?",
                Month::iter().map(|m| m.to_string()),
            )
            .with_default("all"),
            SessionState::AskDay => Choice::new(
                "Which week day would you like to explore?",
                DayOfWeek::iter().map(|d| d.to_string()),
            )
            .with_default("all"),
            SessionState::AskRawData if self.offset == 0 => Choice::yes_no(format!(
                "Would you like to see {} rows of raw data?",
                self.page_size()
            )),
            SessionState::AskRawData => Choice::yes_no(format!(
                "Would you like to see {} more rows of raw data?",
                self.page_size()
            )),
            SessionState::AskRestart => {
                Choice::yes_no("\nWould you like to restart? Enter yes or no.\n")
            }
        }
    }

    fn print_startup(&mut self) -> Result<()> {
        if self.ctx.startup_displayed {
            return Ok(());
        }
        self.chrome.render_banner(&mut self.out)?;
        writeln!(self.out)?;
        writeln!(self.out, "Config path: {}", self.ctx.config.path().display())?;
        writeln!(self.out, "Logs path: {}", self.ctx.logs_dir.display())?;
        let rows: Vec<Vec<String>> = self
            .ctx
            .config
            .rows()
            .into_iter()
            .map(|(k, d, v)| vec![k, d, v])
            .collect();
        TablePrinter::new().render_table(
            &["KEY", "DESCRIPTION", "VALUE"],
            &rows,
            None,
            &mut self.out,
        )?;
        writeln!(self.out)?;
        self.ctx.startup_displayed = true;
        Ok(())
    }

    fn restart(&mut self) {
        self.state = SessionState::AskCity;
        self.greeted = false;
        self.city = None;
        self.month = None;
        self.dataset = None;
        self.offset = 0;
    }

    fn accept(&mut self, answer: &str) -> Result<FlowCtrl> {
        match self.state {
            SessionState::AskCity => {
                self.city = Some(answer.to_string());
                self.state = SessionState::AskMonth;
            }
            SessionState::AskMonth => {
                self.month = Some(parse_filter(answer)?);
                self.state = SessionState::AskDay;
            }
            SessionState::AskDay => {
                let day: Filter<DayOfWeek> = parse_filter(answer)?;
                let city = self
                    .city
                    .clone()
                    .ok_or_else(|| Error::parse("No city selected before day."))?;
                let month = self
                    .month
                    .ok_or_else(|| Error::parse("No month selected before day."))?;
                self.chrome.render_separator(&mut self.out)?;
                self.run_reports(&city, month, day)?;
            }
            SessionState::AskRawData => {
                if answer == YES {
                    self.show_next_page()?;
                } else {
                    self.state = SessionState::AskRestart;
                }
            }
            SessionState::AskRestart => {
                if answer == YES {
                    self.ctx
                        .logger
                        .info("Session restarted", LogTarget::FileOnly);
                    self.restart();
                } else {
                    return Ok(FlowCtrl::Finish);
                }
            }
        }
        Ok(FlowCtrl::Continue)
    }

    fn run_reports(
        &mut self,
        city: &str,
        month: Filter<Month>,
        day: Filter<DayOfWeek>,
    ) -> Result<()> {
        let logger = self.ctx.logger.clone();
        logger.info(
            format!("Filters selected: city={city}, month={month}, day={day}"),
            LogTarget::FileOnly,
        );

        let dataset = load_data(&self.ctx.catalog, city, month, day)?;
        let selection = *dataset.selection();
        logger.info(
            format!(
                "Loaded {} of {} rows for {}",
                dataset.len(),
                dataset.source_rows(),
                dataset.city()
            ),
            LogTarget::FileOnly,
        );
        if dataset.is_empty() {
            logger.warn(
                format!("No trips match the selection ({selection})"),
                LogTarget::FileOnly,
            );
        }

        let started = Instant::now();
        let stats = time_stats(&dataset);
        self.reports
            .print_time(&mut self.out, stats.as_ref(), started.elapsed())?;

        let started = Instant::now();
        let stats = station_stats(&dataset);
        self.reports
            .print_station(&mut self.out, stats.as_ref(), started.elapsed())?;

        let started = Instant::now();
        let stats = trip_duration_stats(&dataset);
        self.reports
            .print_duration(&mut self.out, stats.as_ref(), started.elapsed())?;

        let started = Instant::now();
        let stats = user_stats(&dataset);
        self.reports
            .print_user(&mut self.out, stats.as_ref(), started.elapsed())?;

        self.offset = 0;
        self.state = if dataset.is_empty() {
            SessionState::AskRestart
        } else {
            SessionState::AskRawData
        };
        self.dataset = Some(dataset);
        Ok(())
    }

    fn show_next_page(&mut self) -> Result<()> {
        let size = self.page_size();
        let Some(dataset) = self.dataset.as_ref() else {
            self.state = SessionState::AskRestart;
            return Ok(());
        };
        if self.offset < dataset.len() {
            let page = dataset.page(self.offset, size);
            self.reports.print_raw_rows(&mut self.out, dataset, page)?;
            self.offset += size;
        }
        if self.offset >= dataset.len() {
            self.state = SessionState::AskRestart;
        }
        Ok(())
    }
}

fn parse_filter<T: std::str::FromStr>(answer: &str) -> Result<Filter<T>> {
    Filter::parse(answer).ok_or_else(|| Error::parse(format!("Unsupported filter: '{answer}'")))
}

impl<'a, W: Write> Flow for SessionFlow<'a, W> {
    fn render(&mut self) -> Result<()> {
        self.print_startup()?;
        if self.state == SessionState::AskCity && !self.greeted {
            self.chrome.render_greeting(&mut self.out)?;
            self.greeted = true;
        }
        let choice = self.current_choice();
        self.prompt.render(&choice, &mut self.out)?;
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        let choice = self.current_choice();
        match self.prompt.answer(&choice, input) {
            Some(answer) => self.accept(&answer),
            None => Ok(FlowCtrl::Continue),
        }
    }
}
