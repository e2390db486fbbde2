use std::fmt::{self, Display};

///
/// A half-open `[start, end)` window on a chromosome
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Window {
    pub chr: String,
    pub start: u64,
    pub end: u64,
}

impl Window {
    pub fn width(&self) -> u64 {
        self.end - self.start
    }
}

impl Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chr, self.start, self.end)
    }
}

///
/// Number of features starting inside one window. One row of the output table.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct WindowCount {
    pub chr: String,
    pub start: u64,
    pub end: u64,
    pub count: u64,
}

impl WindowCount {
    pub fn new(window: Window, count: u64) -> Self {
        WindowCount {
            chr: window.chr,
            start: window.start,
            end: window.end,
            count,
        }
    }

    pub fn width(&self) -> u64 {
        self.end - self.start
    }

    ///
    /// Get the tab-separated row of this record
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}\t{}", self.chr, self.start, self.end, self.count)
    }
}

impl Display for WindowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
