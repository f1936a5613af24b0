use crate::errors::Result;

pub enum FlowCtrl {
    Continue,
    Finish,
}

pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AskCity,    // pick one of the catalog cities
    AskMonth,   // month or default "all"
    AskDay,     // weekday or default "all"
    AskRawData, // page through raw rows
    AskRestart, // start over or quit
}
