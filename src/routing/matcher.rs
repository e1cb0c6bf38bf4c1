//! Click interception rules.
//!
//! # Responsibilities
//! - Decide whether a click is an in-app soft navigation
//! - Leave everything else to the host's native handling
//!
//! # Design Decisions
//! - One filter per condition, combined with AND semantics
//! - A click is intercepted only when every filter passes
//! - Tag comparison is case-insensitive; modifier and button checks are exact

use crate::host::event::{ClickEvent, PRIMARY_BUTTON};

/// Trait for testing a click against one interception condition.
pub trait ClickFilter: std::fmt::Debug {
    /// Returns true if the click satisfies this condition.
    fn allows(&self, event: &ClickEvent) -> bool;
}

/// Rejects targets carrying the external marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotExternal;

impl ClickFilter for NotExternal {
    fn allows(&self, event: &ClickEvent) -> bool {
        !event.target.external
    }
}

/// Accepts only the primary mouse button.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimaryButton;

impl ClickFilter for PrimaryButton {
    fn allows(&self, event: &ClickEvent) -> bool {
        event.button == PRIMARY_BUTTON
    }
}

/// Rejects clicks with meta, shift, alt or ctrl held (new tab / new window).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModifiers;

impl ClickFilter for NoModifiers {
    fn allows(&self, event: &ClickEvent) -> bool {
        !event.modifiers.any()
    }
}

/// Accepts only hyperlink targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hyperlink;

impl ClickFilter for Hyperlink {
    fn allows(&self, event: &ClickEvent) -> bool {
        event.target.is_link()
    }
}

/// Combines multiple filters with AND semantics.
#[derive(Debug)]
pub struct AllOf {
    filters: Vec<Box<dyn ClickFilter>>,
}

impl AllOf {
    pub fn new(filters: Vec<Box<dyn ClickFilter>>) -> Self {
        Self { filters }
    }
}

impl ClickFilter for AllOf {
    fn allows(&self, event: &ClickEvent) -> bool {
        self.filters.iter().all(|f| f.allows(event))
    }
}

/// Outcome of running the interception rules on a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interception {
    /// Soft-navigate to the contained href.
    Intercept(String),
    /// Leave the click to the host.
    PassThrough,
}

impl Interception {
    /// Label used as a metrics dimension.
    pub fn label(&self) -> &'static str {
        match self {
            Interception::Intercept(_) => "intercepted",
            Interception::PassThrough => "passed_through",
        }
    }
}

/// The navigator's interception policy.
#[derive(Debug)]
pub struct LinkInterceptor {
    rule: AllOf,
}

impl LinkInterceptor {
    pub fn new() -> Self {
        Self {
            rule: AllOf::new(vec![
                Box::new(NotExternal),
                Box::new(PrimaryButton),
                Box::new(NoModifiers),
                Box::new(Hyperlink),
            ]),
        }
    }

    /// Classify a click. Links without an href are never intercepted.
    pub fn classify(&self, event: &ClickEvent) -> Interception {
        if !self.rule.allows(event) {
            return Interception::PassThrough;
        }
        match &event.target.href {
            Some(href) => Interception::Intercept(href.clone()),
            None => Interception::PassThrough,
        }
    }
}

impl Default for LinkInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::event::{ClickTarget, Modifiers};

    const HREF: &str = "http://localhost:8080/all-dogs";

    fn link_click() -> ClickEvent {
        ClickEvent::primary(ClickTarget::link(HREF))
    }

    #[test]
    fn test_plain_link_click_is_intercepted() {
        let interceptor = LinkInterceptor::new();
        assert_eq!(
            interceptor.classify(&link_click()),
            Interception::Intercept(HREF.to_string())
        );
    }

    #[test]
    fn test_external_marker_passes_through() {
        let interceptor = LinkInterceptor::new();
        let event = ClickEvent::primary(ClickTarget::link(HREF).external());
        assert_eq!(interceptor.classify(&event), Interception::PassThrough);
    }

    #[test]
    fn test_non_primary_buttons_pass_through() {
        let interceptor = LinkInterceptor::new();
        for button in [1, 2, 3, 4] {
            let event = link_click().with_button(button);
            assert_eq!(interceptor.classify(&event), Interception::PassThrough);
        }
    }

    #[test]
    fn test_each_modifier_passes_through() {
        let interceptor = LinkInterceptor::new();
        let held = [
            Modifiers { meta: true, ..Modifiers::none() },
            Modifiers { shift: true, ..Modifiers::none() },
            Modifiers { alt: true, ..Modifiers::none() },
            Modifiers { ctrl: true, ..Modifiers::none() },
        ];
        for modifiers in held {
            let event = link_click().with_modifiers(modifiers);
            assert_eq!(interceptor.classify(&event), Interception::PassThrough);
        }
    }

    #[test]
    fn test_non_link_targets_pass_through() {
        let interceptor = LinkInterceptor::new();
        for tag in ["BUTTON", "DIV", "SPAN", "IMG"] {
            let event = ClickEvent::primary(ClickTarget::element(tag));
            assert_eq!(interceptor.classify(&event), Interception::PassThrough);
        }
    }

    #[test]
    fn test_link_without_href_passes_through() {
        let interceptor = LinkInterceptor::new();
        let event = ClickEvent::primary(ClickTarget::element("a"));
        assert_eq!(interceptor.classify(&event), Interception::PassThrough);
    }

    #[test]
    fn test_all_of_requires_every_filter() {
        let rule = AllOf::new(vec![Box::new(PrimaryButton), Box::new(Hyperlink)]);
        assert!(rule.allows(&link_click()));
        assert!(!rule.allows(&link_click().with_button(2)));
        assert!(AllOf::new(Vec::new()).allows(&link_click().with_button(2)));
    }
}
