//! Render targets.

use std::cell::{Cell, RefCell};

/// Capability to replace the application's rendered view.
pub trait RenderTarget {
    /// Replace the whole view with `html`.
    fn render(&self, html: &str);

    /// Current view contents.
    fn content(&self) -> String;
}

/// Render target kept in memory.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    html: RefCell<String>,
    renders: Cell<usize>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the view was replaced.
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }
}

impl RenderTarget for MemoryTarget {
    fn render(&self, html: &str) {
        *self.html.borrow_mut() = html.to_string();
        self.renders.set(self.renders.get() + 1);
    }

    fn content(&self) -> String {
        self.html.borrow().clone()
    }
}
