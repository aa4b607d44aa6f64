//! Search triggers and the one-widget-per-page guard.

use std::cell::Cell;

/// What caused a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Click on the submit control.
    Click,
    /// Enter pressed while the text input has focus.
    EnterKey,
}

impl Trigger {
    /// The trigger for a `keydown` event's `key`, if it submits.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Enter").then_some(Self::EnterKey)
    }

    /// Name used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::EnterKey => "enter",
        }
    }
}

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

/// Ensures at most one widget is mounted on the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct MountGuard;

impl MountGuard {
    /// Claim the page. Returns `false` if a widget already claimed it.
    #[must_use]
    pub fn claim() -> bool {
        MOUNTED.with(|mounted| !mounted.replace(true))
    }

    /// Give the page back, e.g. when mounting found no regions.
    pub fn release() {
        MOUNTED.with(|mounted| mounted.set(false));
    }
}
