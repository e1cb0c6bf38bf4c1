//! Simulation results.

use std::fmt;

use serde::Serialize;

/// One dispatched navigation as seen by a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationRecord {
    /// Path of the URL navigated to.
    pub path: String,
    /// Route key that answered ("default" for the fallback).
    pub route: String,
}

/// A script step that returned an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepFailure {
    /// Zero-based index into the script.
    pub step: usize,
    pub error: String,
}

/// Everything observed while replaying a script.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub navigations: Vec<NavigationRecord>,
    pub final_location: String,
    pub history: Vec<String>,
    pub native_loads: Vec<String>,
    pub renders: usize,
    pub content: String,
    pub failures: Vec<StepFailure>,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Navigations:")?;
        for (i, nav) in self.navigations.iter().enumerate() {
            writeln!(f, "  {:>3}. {} -> {}", i + 1, nav.path, nav.route)?;
        }
        writeln!(f, "History:")?;
        for entry in &self.history {
            let marker = if *entry == self.final_location { "*" } else { " " };
            writeln!(f, "  {marker} {entry}")?;
        }
        if !self.native_loads.is_empty() {
            writeln!(f, "Native loads:")?;
            for url in &self.native_loads {
                writeln!(f, "    {url}")?;
            }
        }
        if !self.failures.is_empty() {
            writeln!(f, "Failures:")?;
            for failure in &self.failures {
                writeln!(f, "    step {}: {}", failure.step, failure.error)?;
            }
        }
        writeln!(f, "Location: {}", self.final_location)?;
        writeln!(f, "Renders:  {}", self.renders)?;
        write!(f, "View:     {}", self.content)
    }
}
