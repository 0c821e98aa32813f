/// Aggregate completion of one load operation.
///
/// Each top-level queue item reports exactly one completion, however many
/// secondary fetches its parse chain performed. The percentage is the
/// rounded integer share of completed items and never decreases.
#[derive(Debug)]
pub struct ProgressTracker {
    total: usize,
    loaded: usize,
    percent: u8,
    ready_fired: bool,
}

impl ProgressTracker {
    /// A tracker over `total` top-level items. An empty load is born
    /// complete.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            loaded: 0,
            percent: if total == 0 { 100 } else { 0 },
            ready_fired: false,
        }
    }

    /// Record the completion of one top-level item and return the new
    /// percentage.
    pub fn record_item(&mut self) -> u8 {
        self.loaded += 1;
        self.percent = (self.loaded as f64 / self.total as f64 * 100.0).round() as u8;
        self.percent
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.percent == 100
    }

    /// Latched completion check: true exactly once, the first time the
    /// percentage reaches 100.
    pub fn take_ready(&mut self) -> bool {
        if self.percent == 100 && !self.ready_fired {
            self.ready_fired = true;
            true
        } else {
            false
        }
    }
}
