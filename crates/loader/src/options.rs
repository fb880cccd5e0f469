/// Where the header row is, if any.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Header {
    /// First row is a header iff its first cell is not a number.
    #[default]
    Auto,
    /// Every row is data.
    None,
    /// Rows before `n` are skipped, row `n` is the header.
    Row(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadOptions {
    pub header: Header,
    /// Timeframe the file is going to be resampled to; checked against the
    /// inferred time step right after loading.
    pub timeframe: Option<String>,
}

impl ReadOptions {
    pub fn with_header(mut self, header: Header) -> Self {
        self.header = header;
        self
    }

    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = Some(timeframe.into());
        self
    }
}
