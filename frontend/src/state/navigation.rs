use std::rc::Rc;
use log::debug;
use yew::prelude::*;
use crate::config;

/// Header and mobile drawer state for the current page session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub drawer_open: bool,
    pub header_scrolled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    OpenDrawer,
    CloseDrawer,
    ToggleDrawer,
    /// Latest vertical scroll offset in CSS pixels.
    Scrolled(f64),
}

pub fn is_past_threshold(offset: f64) -> bool {
    offset > config::HEADER_SCROLL_THRESHOLD_PX
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::OpenDrawer => Self { drawer_open: true, ..*self },
            NavAction::CloseDrawer => Self { drawer_open: false, ..*self },
            NavAction::ToggleDrawer => Self { drawer_open: !self.drawer_open, ..*self },
            NavAction::Scrolled(offset) => Self {
                header_scrolled: is_past_threshold(offset),
                ..*self
            },
        };

        // Scroll events fire constantly, skip re-rendering when nothing moved
        if next == *self {
            return self;
        }
        if next.drawer_open != self.drawer_open {
            debug!("Mobile drawer {}", if next.drawer_open { "opened" } else { "closed" });
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(actions: &[NavAction]) -> NavigationState {
        let state = actions
            .iter()
            .fold(Rc::new(NavigationState::default()), |state, action| state.reduce(*action));
        *state
    }

    #[test]
    fn fresh_load_is_closed_and_unscrolled() {
        assert_eq!(
            NavigationState::default(),
            NavigationState { drawer_open: false, header_scrolled: false }
        );
        assert!(!run(&[NavAction::Scrolled(0.0)]).header_scrolled);
    }

    #[test]
    fn open_then_close_returns_to_closed() {
        let state = run(&[NavAction::OpenDrawer, NavAction::CloseDrawer]);
        assert!(!state.drawer_open);
    }

    #[test]
    fn toggle_twice_is_identity() {
        assert_eq!(run(&[NavAction::ToggleDrawer, NavAction::ToggleDrawer]), run(&[]));
        let open = run(&[NavAction::OpenDrawer]);
        let toggled = run(&[NavAction::OpenDrawer, NavAction::ToggleDrawer, NavAction::ToggleDrawer]);
        assert_eq!(toggled, open);
    }

    #[test]
    fn header_flag_tracks_last_offset_strictly_above_threshold() {
        assert!(!run(&[NavAction::Scrolled(50.0)]).header_scrolled);
        assert!(run(&[NavAction::Scrolled(50.5)]).header_scrolled);
        assert!(!run(&[NavAction::Scrolled(400.0), NavAction::Scrolled(10.0)]).header_scrolled);
    }

    #[test]
    fn scrolling_leaves_drawer_alone() {
        let state = run(&[NavAction::OpenDrawer, NavAction::Scrolled(300.0)]);
        assert_eq!(state, NavigationState { drawer_open: true, header_scrolled: true });
    }

    #[test]
    fn unchanged_scroll_reuses_state() {
        let state = Rc::new(NavigationState::default());
        let next = state.clone().reduce(NavAction::Scrolled(12.0));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
