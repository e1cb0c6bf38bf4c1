//! Shared utilities for integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use spa_navigator::host::MemoryHost;
use spa_navigator::navigation::{NavigationContext, Navigator};

pub const ORIGIN: &str = "http://localhost:8080";

/// One callback invocation: which view ran and the path it saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub view: &'static str,
    pub path: String,
}

/// Navigator wired to a memory host, with a shared call log.
pub struct Harness {
    pub host: Rc<MemoryHost>,
    pub navigator: Navigator,
    pub calls: Rc<RefCell<Vec<Call>>>,
}

impl Harness {
    /// Host starting at `origin + start`, no routes registered.
    pub fn new(start: &str) -> Self {
        let host = Rc::new(MemoryHost::new(&format!("{ORIGIN}{start}")).unwrap());
        Self {
            navigator: Navigator::new(host.clone()),
            host,
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// The dog app's routes: home, list, missing.
    pub fn dog_app(start: &str) -> Self {
        let harness = Self::new(start);
        harness.view("/", "home");
        harness.view("/all-dogs", "list");
        harness.view("default", "missing");
        harness
    }

    /// Register a view that only records its invocations.
    pub fn view(&self, path: &str, view: &'static str) {
        let calls = self.calls.clone();
        self.navigator.register(path, move |ctx: NavigationContext| {
            calls.borrow_mut().push(Call {
                view,
                path: ctx.path().to_string(),
            });
        });
    }

    pub fn url(path: &str) -> String {
        format!("{ORIGIN}{path}")
    }

    /// Drain the call log.
    pub fn take_calls(&self) -> Vec<Call> {
        self.calls.borrow_mut().drain(..).collect()
    }
}

pub fn call(view: &'static str, path: &str) -> Call {
    Call {
        view,
        path: path.to_string(),
    }
}
