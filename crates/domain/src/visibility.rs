//! Lifecycle of an element that is animated in and out with CSS transitions.
//!
//! ```text
//! Absent ──insert──▶ Inserted ──reveal──▶ Visible
//!    ▲                   │                   │
//!    └──finish── Hiding ◀┴───────hide────────┘
//! ```
//!
//! An element is inserted without its `show` class and only revealed on the
//! next animation frame, otherwise the browser never observes the starting
//! state of the transition. Hiding removes the class first and detaches the
//! element once the transition ends, or once a fallback timer fires when no
//! `transitionend` event is delivered.

/// Current animation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Absent,
    Inserted,
    Visible,
    Hiding,
}

impl Phase {
    /// Put the element on screen. Valid from `Absent`, and from `Hiding`
    /// when the element is shown again before its exit completed.
    pub fn insert(&mut self) -> bool {
        self.step(|phase| matches!(phase, Self::Absent | Self::Hiding).then_some(Self::Inserted))
    }

    /// Mark an inserted element visible.
    pub fn reveal(&mut self) -> bool {
        self.step(|phase| (phase == Self::Inserted).then_some(Self::Visible))
    }

    /// Start the exit transition. Repeated calls are no-ops.
    pub fn hide(&mut self) -> bool {
        self.step(|phase| {
            matches!(phase, Self::Inserted | Self::Visible).then_some(Self::Hiding)
        })
    }

    /// Complete the exit transition. Only acts while hiding, so a late
    /// `transitionend` or fallback timer cannot remove a re-shown element.
    pub fn finish(&mut self) -> bool {
        self.step(|phase| (phase == Self::Hiding).then_some(Self::Absent))
    }

    /// Whether the element is attached or displayed at all.
    #[must_use]
    pub fn is_displayed(self) -> bool {
        self != Self::Absent
    }

    /// Whether the element carries its `show` class.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    /// Whether user interaction with the element should still be honoured.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Inserted | Self::Visible)
    }

    fn step(&mut self, next: impl FnOnce(Self) -> Option<Self>) -> bool {
        match next(*self) {
            Some(phase) => {
                *self = phase;
                true
            }
            None => false,
        }
    }
}
