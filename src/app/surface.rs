//! Output seams for a session run: a status sink that is overwritten
//! as the run moves between phases, and a log sink that only ever
//! appends.
use crate::libs::writing::cc;
use crate::log;

pub trait Surface {
    fn set_status(&mut self, text: &str);
    fn log(&mut self, line: &str);
}

/// Terminal host surface.  Phase changes go to stderr through the
/// timestamped logger so they stay visible when stdout is piped;
/// session lines go to stdout.
#[derive(Debug, Default)]
pub struct TermSurface;

impl TermSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for TermSurface {
    fn set_status(&mut self, text: &str) {
        log!(cc::CYAN, "{}", text);
    }

    fn log(&mut self, line: &str) {
        println!("{line}");
    }
}

/// In-memory surface.  Collects the full session transcript so an
/// embedding host (or a test) can inspect the log and final status
/// after the run.
#[derive(Debug, Default)]
pub struct MemSurface {
    pub status: String,
    pub lines: Vec<String>,
}

impl MemSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for MemSurface {
    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
