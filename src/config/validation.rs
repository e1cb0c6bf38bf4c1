//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the route set has a fallback and well-formed, unique paths
//! - Check the host origin and redirect targets
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: NavigatorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use url::Url;

use crate::config::schema::NavigatorConfig;
use crate::navigation::FALLBACK_ROUTE;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no '{fallback}' route configured", fallback = FALLBACK_ROUTE)]
    MissingFallback,

    #[error("route path '{0}' must start with '/'")]
    InvalidPath(String),

    #[error("route path '{0}' configured more than once")]
    DuplicatePath(String),

    #[error("origin '{origin}' is invalid: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("initial path '{0}' must start with '/'")]
    InvalidInitialPath(String),

    #[error("route '{route}' redirects to '{target}', which must start with '/'")]
    InvalidRedirect { route: String, target: String },

    #[error("route '{0}' is part of a redirect loop")]
    RedirectLoop(String),
}

/// Check `config` and collect every problem found.
pub fn validate_config(config: &NavigatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_origin(&config.host.origin, &mut errors);
    if !config.host.initial_path.starts_with('/') {
        errors.push(ValidationError::InvalidInitialPath(
            config.host.initial_path.clone(),
        ));
    }

    let mut seen = HashSet::new();
    for route in &config.routes {
        if route.path != FALLBACK_ROUTE && !route.path.starts_with('/') {
            errors.push(ValidationError::InvalidPath(route.path.clone()));
        }
        if !seen.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicatePath(route.path.clone()));
        }
        if let Some(target) = &route.redirect_to {
            if !target.starts_with('/') {
                errors.push(ValidationError::InvalidRedirect {
                    route: route.path.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    if !seen.contains(FALLBACK_ROUTE) {
        errors.push(ValidationError::MissingFallback);
    }

    validate_redirect_chains(config, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_origin(origin: &str, errors: &mut Vec<ValidationError>) {
    let invalid = |reason: String| ValidationError::InvalidOrigin {
        origin: origin.to_string(),
        reason,
    };

    match Url::parse(origin) {
        Ok(url) if !url.origin().is_tuple() => {
            errors.push(invalid("has no host".to_string()));
        }
        Ok(url) if url.path() != "/" || url.query().is_some() || url.fragment().is_some() => {
            errors.push(invalid("must not contain a path, query or fragment".to_string()));
        }
        Ok(_) => {}
        Err(e) => errors.push(invalid(e.to_string())),
    }
}

/// Follow every redirect chain; a chain that revisits a route never settles.
///
/// Targets resolve the way the navigator resolves them: origin + target,
/// parsed, then looked up by path with the fallback for unknown paths.
fn validate_redirect_chains(config: &NavigatorConfig, errors: &mut Vec<ValidationError>) {
    // An unparsable origin is already reported.
    let Ok(origin) = Url::parse(&config.host.origin) else {
        return;
    };
    let origin = origin.origin().ascii_serialization();
    let known: HashSet<&str> = config.routes.iter().map(|r| r.path.as_str()).collect();

    let resolve = |target: &str| -> Option<String> {
        let url = Url::parse(&format!("{origin}{target}")).ok()?;
        let path = url.path();
        let route = if known.contains(path) { path } else { FALLBACK_ROUTE };
        Some(route.to_string())
    };

    let redirects: HashMap<&str, String> = config
        .routes
        .iter()
        .filter_map(|r| {
            let route = resolve(r.redirect_to.as_deref()?)?;
            Some((r.path.as_str(), route))
        })
        .collect();

    let mut start_points: Vec<&str> = redirects.keys().copied().collect();
    start_points.sort_unstable();

    for start in start_points {
        let mut visited = HashSet::new();
        let mut current = start;
        while let Some(next) = redirects.get(current) {
            if !visited.insert(current) {
                errors.push(ValidationError::RedirectLoop(start.to_string()));
                break;
            }
            current = next.as_str();
        }
    }
}
