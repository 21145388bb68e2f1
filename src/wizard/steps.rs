//! Step table and step-flow state machine

use std::fmt;

use crate::constants::{FIRST_STEP, STEP_COUNT};

/// Accent colour of a step, mapped to a terminal colour by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Lime,
    Blue,
    Yellow,
    Cyan,
    Indigo,
}

/// Static description of one wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub id: u8,
    pub label: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

/// The checkout steps, in order
pub static STEPS: [StepDefinition; STEP_COUNT as usize] = [
    StepDefinition { id: 1, label: "Postcode", icon: "⌖", accent: Accent::Green },
    StepDefinition { id: 2, label: "Waste Type", icon: "♻", accent: Accent::Lime },
    StepDefinition { id: 3, label: "Select Skip", icon: "▣", accent: Accent::Blue },
    StepDefinition { id: 4, label: "Permit Check", icon: "⛨", accent: Accent::Yellow },
    StepDefinition { id: 5, label: "Choose Date", icon: "▦", accent: Accent::Cyan },
    StepDefinition { id: 6, label: "Payment", icon: "£", accent: Accent::Indigo },
];

/// Step the catalog grid lives on
pub const SELECT_SKIP_STEP: u8 = 3;

/// Where a step stands relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl StepStatus {
    pub fn derive(id: u8, current: u8) -> Self {
        use std::cmp::Ordering;
        match id.cmp(&current) {
            Ordering::Less => StepStatus::Completed,
            Ordering::Equal => StepStatus::Current,
            Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Only completed steps accept a jump from the step indicator
    pub fn is_clickable(self) -> bool {
        self == StepStatus::Completed
    }
}

/// A successful transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepChange {
    pub from: u8,
    pub to: u8,
}

impl fmt::Display for StepChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} -> {}", self.from, self.to)
    }
}

/// Callback invoked after every successful transition
pub type StepListener = Box<dyn FnMut(StepChange) + Send>;

/// Current step plus the transition policy.
///
/// Transitions are total: moves outside the allowed set leave the state
/// untouched and return `false`. Listeners hear about changes only.
pub struct StepFlow {
    current: u8,
    listeners: Vec<StepListener>,
}

impl fmt::Debug for StepFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepFlow")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for StepFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl StepFlow {
    /// Fresh session, starting on the first step
    pub fn new() -> Self {
        Self::starting_at(FIRST_STEP)
    }

    /// Start on a host-chosen step, clamped into range
    pub fn starting_at(step: u8) -> Self {
        Self {
            current: step.clamp(FIRST_STEP, STEP_COUNT),
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn is_terminal(&self) -> bool {
        self.current == STEP_COUNT
    }

    pub fn status(&self, id: u8) -> StepStatus {
        StepStatus::derive(id, self.current)
    }

    /// Every step paired with its status, in order
    pub fn statuses(&self) -> impl Iterator<Item = (&'static StepDefinition, StepStatus)> + '_ {
        STEPS.iter().map(move |s| (s, self.status(s.id)))
    }

    pub fn subscribe(&mut self, listener: StepListener) {
        self.listeners.push(listener);
    }

    /// Jump back to a completed step
    pub fn go_to(&mut self, target: u8) -> bool {
        if target >= FIRST_STEP && target < self.current {
            self.set(target);
            true
        } else {
            false
        }
    }

    /// Continue to the next step
    pub fn advance(&mut self) -> bool {
        if self.current < STEP_COUNT {
            self.set(self.current + 1);
            true
        } else {
            false
        }
    }

    /// Return to the previous step
    pub fn back(&mut self) -> bool {
        if self.current > FIRST_STEP {
            self.set(self.current - 1);
            true
        } else {
            false
        }
    }

    fn set(&mut self, to: u8) {
        let change = StepChange {
            from: self.current,
            to,
        };
        self.current = to;
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}
