use std::fmt;

use rust_fsm::state_machine;

state_machine! {
    derive(Debug, Clone, Copy, PartialEq, Eq)
    pub ScreenFsm(Home)

    Home => {
        StartGame => Playing
    },
    Playing => {
        RoundFinished => Completed,
        BackHome => Home,
    },
    Completed => {
        Retry => Playing,
        BackHome => Home,
    }
}

impl fmt::Display for ScreenFsmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenFsmState::Home => "home",
            ScreenFsmState::Playing => "game",
            ScreenFsmState::Completed => "completion",
        };
        f.write_str(name)
    }
}

impl ScreenFsmInput {
    /// Verb used in transition errors.
    pub(crate) fn action(&self) -> &'static str {
        match self {
            ScreenFsmInput::StartGame => "start a game",
            ScreenFsmInput::RoundFinished => "finish the round",
            ScreenFsmInput::Retry => "retry",
            ScreenFsmInput::BackHome => "go back home",
        }
    }
}
