//! Host event payloads delivered to navigator handlers.

/// Button code of the primary (usually left) mouse button.
pub const PRIMARY_BUTTON: i16 = 0;

/// Tag name identifying a hyperlink element.
pub const LINK_TAG: &str = "A";

/// Modifier keys held during a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

impl Modifiers {
    /// No modifier held.
    pub fn none() -> Self {
        Self::default()
    }

    /// True if any modifier key was held.
    pub fn any(&self) -> bool {
        self.meta || self.shift || self.alt || self.ctrl
    }
}

/// The element a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    /// Upper-case tag name as reported by the DOM (`A`, `BUTTON`, ...).
    pub tag: String,
    /// Fully resolved href for hyperlinks.
    pub href: Option<String>,
    /// Element carries the external marker (`data-external`).
    pub external: bool,
}

impl ClickTarget {
    /// A hyperlink pointing at `href`.
    pub fn link(href: impl Into<String>) -> Self {
        Self {
            tag: LINK_TAG.to_string(),
            href: Some(href.into()),
            external: false,
        }
    }

    /// A non-link element.
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_uppercase(),
            href: None,
            external: false,
        }
    }

    /// Mark the element as external.
    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    /// True if the element is a hyperlink.
    pub fn is_link(&self) -> bool {
        self.tag.eq_ignore_ascii_case(LINK_TAG)
    }
}

/// A click delivered by the host.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub button: i16,
    pub modifiers: Modifiers,
    pub target: ClickTarget,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(button: i16, modifiers: Modifiers, target: ClickTarget) -> Self {
        Self {
            button,
            modifiers,
            target,
            default_prevented: false,
        }
    }

    /// Unmodified primary-button click on `target`.
    pub fn primary(target: ClickTarget) -> Self {
        Self::new(PRIMARY_BUTTON, Modifiers::none(), target)
    }

    pub fn with_button(mut self, button: i16) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Suppress the host's native handling of this click.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
