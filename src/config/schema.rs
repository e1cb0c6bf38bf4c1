//! Configuration schema definitions.
//!
//! This module defines the configuration consumed by the navigation simulator.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::host::event::{ClickEvent, ClickTarget, Modifiers, LINK_TAG, PRIMARY_BUTTON};
use crate::navigation::FALLBACK_ROUTE;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Simulated host environment.
    pub host: HostConfig,

    /// Route definitions, including the `"default"` fallback.
    pub routes: Vec<RouteConfig>,

    /// Events replayed after `listen()`.
    pub script: Vec<ScriptStep>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            host: HostConfig::default(),
            routes: default_routes(),
            script: Vec::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Host configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HostConfig {
    /// Scheme, host and port, e.g. "http://localhost:8080".
    pub origin: String,

    /// Path shown in the address bar when the app boots.
    pub initial_path: String,
}

impl HostConfig {
    /// Full URL the host starts on.
    pub fn initial_url(&self) -> String {
        format!("{}{}", self.origin.trim_end_matches('/'), self.initial_path)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:8080".to_string(),
            initial_path: "/".to_string(),
        }
    }
}

/// One route and the view it renders.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Exact path, or "default" for the fallback.
    pub path: String,

    /// Heading rendered by the view.
    pub title: String,

    /// Path the view redirects to as soon as it renders.
    #[serde(default)]
    pub redirect_to: Option<String>,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            redirect_to: None,
        }
    }
}

/// The dog app's route set.
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::new("/", "Welcome to dog app"),
        RouteConfig::new("/sign-up", "Create an account"),
        RouteConfig::new("/log-in", "Log in to your account"),
        RouteConfig::new("/all-dogs", "All the dogs"),
        RouteConfig::new("/new-dog", "Add a new dog"),
        RouteConfig::new(FALLBACK_ROUTE, "Page not found"),
    ]
}

/// A scripted host event or direct navigator call.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    /// User clicks an element.
    Click(ClickStep),
    /// Browser back button.
    Back,
    /// Browser forward button.
    Forward,
    /// A view calls `redirect(path)`.
    Redirect { path: String },
    /// Direct `navigate(url)` call.
    Navigate { url: String },
}

/// A click on an element.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClickStep {
    /// Link target; relative hrefs resolve against the current location.
    #[serde(default)]
    pub href: Option<String>,

    #[serde(default = "default_tag")]
    pub tag: String,

    #[serde(default)]
    pub button: i16,

    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub ctrl: bool,

    /// Element carries `data-external`.
    #[serde(default)]
    pub external: bool,
}

fn default_tag() -> String {
    LINK_TAG.to_string()
}

impl ClickStep {
    /// Plain click on a link to `href`.
    pub fn link(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            tag: default_tag(),
            button: PRIMARY_BUTTON,
            meta: false,
            shift: false,
            alt: false,
            ctrl: false,
            external: false,
        }
    }

    /// Build the host event this step describes.
    pub fn to_event(&self) -> ClickEvent {
        let mut target = ClickTarget::element(&self.tag);
        target.href = self.href.clone();
        target.external = self.external;

        let modifiers = Modifiers {
            meta: self.meta,
            shift: self.shift,
            alt: self.alt,
            ctrl: self.ctrl,
        };
        ClickEvent::new(self.button, modifiers, target)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NavigatorConfig::default();
        assert_eq!(config.host.initial_url(), "http://localhost:8080/");
        assert_eq!(config.routes.len(), 6);
        assert!(config.routes.iter().any(|r| r.path == FALLBACK_ROUTE));
        assert!(config.script.is_empty());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_initial_url_trims_trailing_slash() {
        let host = HostConfig {
            origin: "https://dogs.example/".to_string(),
            initial_path: "/all-dogs".to_string(),
        };
        assert_eq!(host.initial_url(), "https://dogs.example/all-dogs");
    }

    #[test]
    fn test_parse_script() {
        let config: NavigatorConfig = toml::from_str(
            r#"
            [host]
            initial_path = "/log-in"

            [[routes]]
            path = "/"
            title = "Home"

            [[routes]]
            path = "default"
            title = "Missing"

            [[script]]
            action = "click"
            href = "/"
            ctrl = true

            [[script]]
            action = "back"

            [[script]]
            action = "redirect"
            path = "/all-dogs"
            "#,
        )
        .unwrap();

        assert_eq!(config.host.origin, "http://localhost:8080");
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.script.len(), 3);

        let ScriptStep::Click(click) = &config.script[0] else {
            panic!("expected click step");
        };
        assert_eq!(click.tag, "A");
        assert!(click.ctrl);
        assert_eq!(click.button, 0);
        assert_eq!(config.script[1], ScriptStep::Back);
        assert_eq!(
            config.script[2],
            ScriptStep::Redirect {
                path: "/all-dogs".to_string()
            }
        );
    }

    #[test]
    fn test_click_step_to_event() {
        let mut step = ClickStep::link("/new-dog");
        step.external = true;
        step.button = 1;

        let event = step.to_event();
        assert!(event.target.is_link());
        assert!(event.target.external);
        assert_eq!(event.button, 1);
        assert_eq!(event.target.href.as_deref(), Some("/new-dog"));
        assert!(!event.modifiers.any());
    }
}
