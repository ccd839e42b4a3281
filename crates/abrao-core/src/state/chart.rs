//! Owner of the dashboard's single chart resource
//!
//! The chart is rebuilt on every data change. `ChartSlot` drops the previous
//! chart before building its replacement, so at most one is ever alive.

#[derive(Debug)]
pub struct ChartSlot<C> {
    current: Option<C>,
    generation: u64,
}

impl<C> Default for ChartSlot<C> {
    fn default() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }
}

impl<C> ChartSlot<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Release the held chart, then build and hold a new one.
    pub fn replace_with<F>(&mut self, build: F) -> &C
    where
        F: FnOnce() -> C,
    {
        self.release();
        self.generation += 1;
        self.current.insert(build())
    }

    /// Drop the held chart, if any.
    pub fn release(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!(generation = self.generation, "chart released");
        }
    }

    pub fn current(&self) -> Option<&C> {
        self.current.as_ref()
    }

    /// Number of charts built so far
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
