//! Script replay against an in-memory host.
//!
//! # Responsibilities
//! - Register one view per configured route
//! - Boot the navigator and replay the script step by step
//! - Collect what the views and the host observed
//!
//! # Design Decisions
//! - Views share one `MemoryTarget`, like a single `#app` mount point
//! - A failing step is recorded and replay continues

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::config::validation::{validate_config, ValidationError};
use crate::config::{NavigatorConfig, RouteConfig, ScriptStep};
use crate::host::MemoryHost;
use crate::navigation::{NavigationContext, NavigationError, Navigator};
use crate::simulation::report::{NavigationRecord, SimulationReport, StepFailure};
use crate::view::{MemoryTarget, RenderTarget};

/// Errors that stop a simulation before any step runs.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {0:?}")]
    InvalidConfig(Vec<ValidationError>),

    #[error("Invalid initial URL: {0}")]
    InitialUrl(#[from] url::ParseError),

    #[error("Boot navigation failed: {0}")]
    Boot(#[from] NavigationError),
}

/// Replays a configured script.
pub struct Simulation {
    config: NavigatorConfig,
}

impl Simulation {
    pub fn new(config: NavigatorConfig) -> Self {
        Self { config }
    }

    /// Run the script to completion.
    pub fn run(&self) -> Result<SimulationReport, SimulationError> {
        validate_config(&self.config).map_err(SimulationError::InvalidConfig)?;

        let host = Rc::new(MemoryHost::new(&self.config.host.initial_url())?);
        let target = Rc::new(MemoryTarget::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        let navigator = Navigator::new(host.clone());
        for route in &self.config.routes {
            register_view(&navigator, route, target.clone(), log.clone());
        }

        navigator.listen()?;

        let mut failures = Vec::new();
        for (step, action) in self.config.script.iter().enumerate() {
            tracing::debug!(step, ?action, "Replaying step");
            if let Err(e) = apply_step(&navigator, &host, action) {
                tracing::warn!(step, error = %e, "Step failed");
                failures.push(StepFailure {
                    step,
                    error: e.to_string(),
                });
            }
        }

        navigator.close();

        let navigations = log.borrow().clone();
        Ok(SimulationReport {
            navigations,
            final_location: host.location().to_string(),
            history: host.entries().iter().map(ToString::to_string).collect(),
            native_loads: host.native_loads().iter().map(ToString::to_string).collect(),
            renders: target.render_count(),
            content: target.content(),
            failures,
        })
    }
}

fn register_view(
    navigator: &Navigator,
    route: &RouteConfig,
    target: Rc<MemoryTarget>,
    log: Rc<RefCell<Vec<NavigationRecord>>>,
) {
    let key = route.path.clone();
    let html = format!("<h1>{}</h1>", route.title);
    let redirect_to = route.redirect_to.clone();

    navigator.register(&route.path, move |ctx: NavigationContext| {
        target.render(&html);
        log.borrow_mut().push(NavigationRecord {
            path: ctx.path().to_string(),
            route: key.clone(),
        });

        if let Some(next) = &redirect_to {
            if let Err(e) = ctx.redirect.to(next) {
                tracing::warn!(from = %key, to = %next, error = %e, "View redirect failed");
            }
        }
    });
}

fn apply_step(
    navigator: &Navigator,
    host: &MemoryHost,
    step: &ScriptStep,
) -> Result<(), NavigationError> {
    match step {
        ScriptStep::Click(click) => {
            let outcome = host.click(click.to_event());
            tracing::debug!(
                default_prevented = outcome.default_prevented,
                native_load = ?outcome.native_load.as_ref().map(|u| u.as_str()),
                "Click delivered"
            );
        }
        ScriptStep::Back => {
            if !host.back() {
                tracing::debug!("Already at the oldest entry");
            }
        }
        ScriptStep::Forward => {
            if !host.forward() {
                tracing::debug!("Already at the newest entry");
            }
        }
        ScriptStep::Redirect { path } => {
            navigator.redirect(path)?;
        }
        ScriptStep::Navigate { url } => {
            navigator.navigate(url)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClickStep;

    fn paths(report: &SimulationReport) -> Vec<(&str, &str)> {
        report
            .navigations
            .iter()
            .map(|n| (n.path.as_str(), n.route.as_str()))
            .collect()
    }

    #[test]
    fn test_boot_renders_initial_location() {
        let mut config = NavigatorConfig::default();
        config.host.initial_path = "/unknown".to_string();

        let report = Simulation::new(config).run().unwrap();
        assert_eq!(paths(&report), vec![("/unknown", "default")]);
        assert_eq!(report.content, "<h1>Page not found</h1>");
        assert_eq!(report.history, vec!["http://localhost:8080/unknown"]);
    }

    #[test]
    fn test_script_replay() {
        let mut config = NavigatorConfig::default();
        config.script = vec![
            ScriptStep::Click(ClickStep::link("/sign-up")),
            ScriptStep::Redirect {
                path: "/all-dogs".to_string(),
            },
            ScriptStep::Back,
            ScriptStep::Forward,
        ];

        let report = Simulation::new(config).run().unwrap();
        assert_eq!(
            paths(&report),
            vec![
                ("/", "/"),
                ("/sign-up", "/sign-up"),
                ("/all-dogs", "/all-dogs"),
                ("/sign-up", "/sign-up"),
                ("/all-dogs", "/all-dogs"),
            ]
        );
        assert_eq!(report.final_location, "http://localhost:8080/all-dogs");
        assert_eq!(report.history.len(), 3);
        assert_eq!(report.renders, 5);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_view_redirect_chain() {
        let mut config = NavigatorConfig::default();
        config.routes.push(RouteConfig {
            path: "/log-out".to_string(),
            title: "Logging out".to_string(),
            redirect_to: Some("/".to_string()),
        });
        config.script = vec![ScriptStep::Click(ClickStep::link("/log-out"))];

        let report = Simulation::new(config).run().unwrap();
        assert_eq!(
            paths(&report),
            vec![("/", "/"), ("/log-out", "/log-out"), ("/", "/")]
        );
        assert_eq!(report.final_location, "http://localhost:8080/");
        assert_eq!(report.content, "<h1>Welcome to dog app</h1>");
    }

    #[test]
    fn test_external_click_loads_natively() {
        let mut config = NavigatorConfig::default();
        let mut click = ClickStep::link("https://dogs.example/");
        click.external = true;
        config.script = vec![ScriptStep::Click(click)];

        let report = Simulation::new(config).run().unwrap();
        assert_eq!(report.navigations.len(), 1);
        assert_eq!(report.native_loads, vec!["https://dogs.example/"]);
    }

    #[test]
    fn test_failed_step_is_recorded() {
        let mut config = NavigatorConfig::default();
        config.script = vec![
            ScriptStep::Navigate {
                url: "not a url".to_string(),
            },
            ScriptStep::Redirect {
                path: "/new-dog".to_string(),
            },
        ];

        let report = Simulation::new(config).run().unwrap();
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].step, 0);
        assert_eq!(report.final_location, "http://localhost:8080/new-dog");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = NavigatorConfig::default();
        config.routes.clear();
        let err = Simulation::new(config).run().unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }
}
