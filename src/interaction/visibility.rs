use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::SeriesId;
use crate::error::{ChartError, ChartResult};

/// Focus half of the visibility state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusState {
    #[default]
    Unfocused,
    Focused(SeriesId),
}

impl FocusState {
    #[must_use]
    pub fn series(self) -> Option<SeriesId> {
        match self {
            Self::Unfocused => None,
            Self::Focused(series) => Some(series),
        }
    }
}

/// Per-series visibility flags plus the focused series.
///
/// While focused, exactly the focused series is shown and the rest are dimmed
/// regardless of their stored flags; while unfocused the flags are
/// authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityState {
    flags: SmallVec<[bool; 16]>,
    focus: FocusState,
}

impl VisibilityState {
    /// All series visible, nothing focused.
    #[must_use]
    pub fn new(series_count: usize) -> Self {
        Self {
            flags: SmallVec::from_elem(true, series_count),
            focus: FocusState::Unfocused,
        }
    }

    #[must_use]
    pub fn focus(&self) -> FocusState {
        self.focus
    }

    #[must_use]
    pub fn focused_series(&self) -> Option<SeriesId> {
        self.focus.series()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.flags.len()
    }

    /// Stored flag of `series`; `false` for ids outside the state.
    #[must_use]
    pub fn flag(&self, series: SeriesId) -> bool {
        self.flags.get(series.index()).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Whether `series` is drawn at full strength.
    #[must_use]
    pub fn is_shown(&self, series: SeriesId) -> bool {
        match self.focus {
            FocusState::Focused(focused) => focused == series,
            FocusState::Unfocused => self.flag(series),
        }
    }

    fn ensure_known(&self, series: SeriesId) -> ChartResult<()> {
        if series.index() >= self.flags.len() {
            return Err(ChartError::InvalidData(format!(
                "series id {} outside visibility state of {} series",
                series.index(),
                self.flags.len()
            )));
        }
        Ok(())
    }
}

/// New flag of one series after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityChange {
    pub series: SeriesId,
    pub visible: bool,
}

/// Result of one legend click: the next state and one change per series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityTransition {
    pub state: VisibilityState,
    pub changes: Vec<VisibilityChange>,
}

/// Pure transition function of the focus state machine.
///
/// - `Unfocused` + click `k` -> `Focused(k)`, only `k` flagged visible.
/// - `Focused(k)` + click `k` -> `Unfocused`, every flag reset to visible.
/// - `Focused(j)` + click `k != j` -> `Focused(k)`, only `k` flagged visible.
pub fn transition(
    state: &VisibilityState,
    clicked: SeriesId,
) -> ChartResult<VisibilityTransition> {
    state.ensure_known(clicked)?;

    let next_focus = match state.focus {
        FocusState::Focused(focused) if focused == clicked => FocusState::Unfocused,
        FocusState::Focused(_) | FocusState::Unfocused => FocusState::Focused(clicked),
    };

    let flags: SmallVec<[bool; 16]> = (0..state.flags.len())
        .map(|index| match next_focus {
            FocusState::Unfocused => true,
            FocusState::Focused(focused) => focused.index() == index,
        })
        .collect();
    let changes = flags
        .iter()
        .enumerate()
        .map(|(index, &visible)| VisibilityChange {
            series: SeriesId(index),
            visible,
        })
        .collect();

    Ok(VisibilityTransition {
        state: VisibilityState {
            flags,
            focus: next_focus,
        },
        changes,
    })
}

/// Owner of the session's [`VisibilityState`], mutated only through clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityStateMachine {
    state: VisibilityState,
}

impl VisibilityStateMachine {
    #[must_use]
    pub fn new(series_count: usize) -> Self {
        Self {
            state: VisibilityState::new(series_count),
        }
    }

    #[must_use]
    pub fn state(&self) -> &VisibilityState {
        &self.state
    }

    /// Applies a legend click and returns the per-series flags it emitted.
    pub fn click(&mut self, series: SeriesId) -> ChartResult<Vec<VisibilityChange>> {
        let VisibilityTransition { state, changes } = transition(&self.state, series)?;
        trace!(from = ?self.state.focus, to = ?state.focus, "visibility transition");
        self.state = state;
        Ok(changes)
    }
}
