//! Navigation menu state machine.
//!
//! Two states, three events. The wasm side only applies classes when
//! `apply` reports that the state actually changed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger/trigger control was activated.
    ToggleActivated,
    /// Any navigation link was selected.
    LinkSelected,
    /// The Escape key was pressed anywhere on the page.
    EscapePressed,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Apply one event and return the next state.
    pub fn apply(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::ToggleActivated) => MenuState::Open,
            (MenuState::Open, MenuEvent::ToggleActivated) => MenuState::Closed,
            (_, MenuEvent::LinkSelected) => MenuState::Closed,
            (_, MenuEvent::EscapePressed) => MenuState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_returns_to_initial_state() {
        let s = MenuState::default();
        assert_eq!(s, MenuState::Closed);
        let s = s.apply(MenuEvent::ToggleActivated);
        assert!(s.is_open());
        let s = s.apply(MenuEvent::ToggleActivated);
        assert_eq!(s, MenuState::Closed);
    }

    #[test]
    fn link_selection_forces_closed_regardless_of_prior_state() {
        assert_eq!(
            MenuState::Open.apply(MenuEvent::LinkSelected),
            MenuState::Closed
        );
        assert_eq!(
            MenuState::Closed.apply(MenuEvent::LinkSelected),
            MenuState::Closed
        );
    }

    #[test]
    fn escape_closes_open_menu_and_is_a_noop_when_closed() {
        assert_eq!(
            MenuState::Open.apply(MenuEvent::EscapePressed),
            MenuState::Closed
        );
        assert_eq!(
            MenuState::Closed.apply(MenuEvent::EscapePressed),
            MenuState::Closed
        );
    }
}
