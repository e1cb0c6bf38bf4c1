//! Navigation simulator.
//!
//! # Data Flow
//! ```text
//! NavigatorConfig
//!     → runner.rs (MemoryHost + MemoryTarget + Navigator, one view per route)
//!     → listen() renders the initial location
//!     → each ScriptStep: click / back / forward / redirect / navigate
//!     → report.rs (navigations, history, final view)
//! ```

pub mod report;
pub mod runner;

pub use report::{NavigationRecord, SimulationReport, StepFailure};
pub use runner::{Simulation, SimulationError};
