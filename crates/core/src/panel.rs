/// Which of the two mutually exclusive secondary-information views is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// The compact control strip.
    Collapsed,
    /// The expanded discussion panel.
    Expanded,
}

/// Two-state machine behind the collapsed strip / expanded panel swap.
///
/// Exactly one state is active at a time and only explicit user actions move
/// it. A transition presents as a composed pair: the outgoing state's subtree
/// animates out while the incoming one animates in. The machine tracks the
/// outgoing state in `leaving` until the rendering layer reports the exit
/// animation finished (`finish_exit`), at which point the old subtree
/// unmounts; at most one such pair is ever in flight. The very first entrance
/// of the initial `Collapsed` view is delayed so the page can settle, after
/// which every transition animates immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelMachine {
    state: PanelState,
    leaving: Option<PanelState>,
    settle_pending: bool,
}

impl Default for PanelMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelMachine {
    /// First-paint settle delay for the initial collapsed entrance, in seconds.
    pub const SETTLE_DELAY_SECS: f32 = 1.0;

    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PanelState::Collapsed,
            leaving: None,
            settle_pending: true,
        }
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// The state currently animating out, until `finish_exit` lands.
    #[must_use]
    pub fn leaving(&self) -> Option<PanelState> {
        self.leaving
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.state == PanelState::Expanded
    }

    /// Entrance delay for the currently entering subtree. Non-zero only for
    /// the one-time settle delay; exits never wait.
    #[must_use]
    pub fn entrance_delay_secs(&self) -> f32 {
        if self.settle_pending {
            Self::SETTLE_DELAY_SECS
        } else {
            0.0
        }
    }

    /// The toggle action on the collapsed indicator. The displaced state
    /// becomes the leaving one; a toggle mid-flight replaces the pair rather
    /// than stacking a second.
    pub fn toggle(&mut self) {
        self.settle_pending = false;
        let displaced = self.state;
        self.state = match self.state {
            PanelState::Collapsed => PanelState::Expanded,
            PanelState::Expanded => PanelState::Collapsed,
        };
        self.leaving = Some(displaced);
    }

    /// The dismiss action inside the expanded panel. Always forces
    /// `Expanded -> Collapsed`, never the reverse; dismissing an already
    /// collapsed panel changes nothing.
    pub fn dismiss(&mut self) {
        self.settle_pending = false;
        if self.state == PanelState::Expanded {
            self.leaving = Some(PanelState::Expanded);
        }
        self.state = PanelState::Collapsed;
    }

    /// Reported by the rendering layer when the outgoing subtree's exit
    /// animation completes; the subtree unmounts on the next render.
    pub fn finish_exit(&mut self) {
        self.leaving = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed_with_settle_delay() {
        let machine = PanelMachine::new();
        assert_eq!(machine.state(), PanelState::Collapsed);
        assert_eq!(
            machine.entrance_delay_secs(),
            PanelMachine::SETTLE_DELAY_SECS
        );
    }

    #[test]
    fn toggle_alternates_states() {
        let mut machine = PanelMachine::new();
        machine.toggle();
        assert_eq!(machine.state(), PanelState::Expanded);
        machine.toggle();
        assert_eq!(machine.state(), PanelState::Collapsed);
    }

    #[test]
    fn dismiss_only_collapses() {
        let mut machine = PanelMachine::new();
        machine.toggle();
        machine.dismiss();
        assert_eq!(machine.state(), PanelState::Collapsed);
        machine.dismiss();
        assert_eq!(machine.state(), PanelState::Collapsed);
    }

    #[test]
    fn transition_tracks_the_outgoing_state() {
        let mut machine = PanelMachine::new();
        assert_eq!(machine.leaving(), None);
        machine.toggle();
        assert_eq!(machine.leaving(), Some(PanelState::Collapsed));
        machine.finish_exit();
        assert_eq!(machine.leaving(), None);
    }

    #[test]
    fn dismiss_marks_the_panel_as_leaving() {
        let mut machine = PanelMachine::new();
        machine.toggle();
        machine.finish_exit();
        machine.dismiss();
        assert_eq!(machine.state(), PanelState::Collapsed);
        assert_eq!(machine.leaving(), Some(PanelState::Expanded));
    }

    #[test]
    fn mid_flight_toggle_keeps_a_single_pair() {
        let mut machine = PanelMachine::new();
        machine.toggle();
        machine.toggle();
        assert_eq!(machine.state(), PanelState::Collapsed);
        assert_eq!(machine.leaving(), Some(PanelState::Expanded));
    }

    #[test]
    fn any_transition_consumes_the_settle_delay() {
        let mut machine = PanelMachine::new();
        machine.toggle();
        assert_eq!(machine.entrance_delay_secs(), 0.0);
        machine.dismiss();
        // Every later collapsed entrance animates immediately.
        assert_eq!(machine.entrance_delay_secs(), 0.0);
    }
}
