use crate::errors::{Error, Result};
use crate::prompter::choice::{Choice, ChoicePrompt};
use crate::prompter::models::{Flow, FlowCtrl};
use std::io::{self, BufRead, BufReader, Write};

/// Drives a [`Flow`]: render, block on one line of input, hand it over,
/// repeat until the flow finishes or the input ends.
#[derive(Debug, Default, Clone)]
pub struct Prompter;

impl Prompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run<F: Flow>(&self, flow: F) -> Result<()> {
        let stdin = io::stdin();
        let reader = BufReader::new(stdin);
        self.run_with_reader(flow, reader)
    }

    pub fn run_with_reader<F: Flow, R: BufRead>(&self, mut flow: F, mut reader: R) -> Result<()> {
        loop {
            flow.render()?;

            let mut line = String::new();
            let n = reader.read_line(&mut line).map_err(Error::Io)?;
            if n == 0 {
                return Ok(());
            }
            let line = line.trim_end_matches(['\r', '\n']);

            match flow.handle_input(line)? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish => return Ok(()),
            }
        }
    }

    /// Asks `choice` until an answer resolves, re-prompting after
    /// "Invalid input.". `None` when the input ends first.
    pub fn get_input<R: BufRead, W: Write + ?Sized>(
        &self,
        choice: &Choice,
        reader: R,
        out: &mut W,
    ) -> Result<Option<String>> {
        let mut answer = None;
        let flow = QuestionFlow {
            choice,
            prompt: ChoicePrompt::new(),
            out,
            answer: &mut answer,
        };
        self.run_with_reader(flow, reader)?;
        Ok(answer)
    }
}

struct QuestionFlow<'a, W: Write + ?Sized> {
    choice: &'a Choice,
    prompt: ChoicePrompt,
    out: &'a mut W,
    answer: &'a mut Option<String>,
}

impl<W: Write + ?Sized> Flow for QuestionFlow<'_, W> {
    fn render(&mut self) -> Result<()> {
        self.prompt.render(self.choice, &mut *self.out)?;
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        match self.prompt.answer(self.choice, input) {
            Some(answer) => {
                *self.answer = Some(answer);
                Ok(FlowCtrl::Finish)
            }
            None => Ok(FlowCtrl::Continue),
        }
    }
}
