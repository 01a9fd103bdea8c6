use std::rc::Rc;
use log::debug;
use yew::prelude::*;

/// Which FAQ entry is expanded, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub open_index: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionAction {
    Select(usize),
}

impl AccordionState {
    pub fn is_open(&self, index: usize) -> bool {
        self.open_index == Some(index)
    }
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let AccordionAction::Select(index) = action;
        let open_index = if self.is_open(index) { None } else { Some(index) };
        debug!("FAQ selection {:?} -> {:?}", self.open_index, open_index);
        Rc::new(Self { open_index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn select_all(indices: &[usize]) -> Option<usize> {
        indices
            .iter()
            .fold(Rc::new(AccordionState::default()), |state, &i| {
                state.reduce(AccordionAction::Select(i))
            })
            .open_index
    }

    #[test]
    fn nothing_open_initially() {
        assert_eq!(AccordionState::default().open_index, None);
    }

    #[test]
    fn selecting_from_none_opens() {
        assert_eq!(select_all(&[3]), Some(3));
    }

    #[test]
    fn selecting_open_entry_collapses_it() {
        assert_eq!(select_all(&[2, 2]), None);
    }

    #[test]
    fn selecting_other_entry_switches() {
        assert_eq!(select_all(&[0, 4]), Some(4));
        let state = Rc::new(AccordionState::default())
            .reduce(AccordionAction::Select(0))
            .reduce(AccordionAction::Select(4));
        assert!(!state.is_open(0));
        assert!(state.is_open(4));
    }

    #[test]
    fn reopening_after_collapse() {
        assert_eq!(select_all(&[1, 1, 1]), Some(1));
    }
}
