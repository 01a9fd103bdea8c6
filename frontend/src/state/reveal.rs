use std::rc::Rc;
use yew::prelude::*;

/// Visibility of one scroll-revealed block. Only ever moves from hidden to
/// visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// An observer callback fired for the block.
    Observed { intersecting: bool },
    /// Observation is impossible, show the block right away.
    Fallback,
}

impl RevealState {
    pub fn visible(&self) -> bool {
        self.visible
    }
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.visible {
            return self;
        }
        match action {
            RevealAction::Observed { intersecting: true } | RevealAction::Fallback => {
                Rc::new(Self { visible: true })
            }
            RevealAction::Observed { intersecting: false } => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: RevealState, actions: &[RevealAction]) -> Vec<bool> {
        let mut state = Rc::new(state);
        actions
            .iter()
            .map(|action| {
                state = state.clone().reduce(*action);
                state.visible()
            })
            .collect()
    }

    #[test]
    fn starts_hidden() {
        assert!(!RevealState::default().visible());
    }

    #[test]
    fn stays_hidden_until_intersecting() {
        let seen = apply(
            RevealState::default(),
            &[
                RevealAction::Observed { intersecting: false },
                RevealAction::Observed { intersecting: false },
                RevealAction::Observed { intersecting: true },
            ],
        );
        assert_eq!(seen, vec![false, false, true]);
    }

    #[test]
    fn never_reverts_once_visible() {
        let seen = apply(
            RevealState::default(),
            &[
                RevealAction::Observed { intersecting: true },
                RevealAction::Observed { intersecting: false },
                RevealAction::Observed { intersecting: false },
            ],
        );
        assert_eq!(seen, vec![true, true, true]);
    }

    #[test]
    fn fallback_shows_immediately() {
        let seen = apply(
            RevealState::default(),
            &[RevealAction::Fallback, RevealAction::Observed { intersecting: false }],
        );
        assert_eq!(seen, vec![true, true]);
    }

    #[test]
    fn repeated_trigger_keeps_same_allocation() {
        let visible = Rc::new(RevealState::default()).reduce(RevealAction::Fallback);
        let again = visible.clone().reduce(RevealAction::Observed { intersecting: true });
        assert!(Rc::ptr_eq(&visible, &again));
    }
}
