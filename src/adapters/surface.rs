use crate::core::RenderSurface;

/// Prints every displayed text to stdout as a label line.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSurface {
    prefix: String,
}

impl ConsoleSurface {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl RenderSurface for ConsoleSurface {
    fn display(&self, text: &str) {
        println!("{}[ {} ]", self.prefix, text);
    }
}

/// Drops everything. For headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn display(&self, _text: &str) {}
}
