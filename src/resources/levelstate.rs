//! Level play state and terminal-condition rules.
//!
//! While `play` is true the interaction and outcome systems run. Once an
//! [`Outcome`] is decided `play` drops to false and the level is frozen in
//! that state until a new level instance is built.

use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}

/// Which terminal condition wins when both hold in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerminalPriority {
    #[default]
    LoseFirst,
    WinFirst,
}

impl FromStr for TerminalPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lose_first" => Ok(TerminalPriority::LoseFirst),
            "win_first" => Ok(TerminalPriority::WinFirst),
            other => Err(format!("unknown terminal priority '{}'", other)),
        }
    }
}

impl fmt::Display for TerminalPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TerminalPriority::LoseFirst => "lose_first",
            TerminalPriority::WinFirst => "win_first",
        })
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelState {
    /// Interactions and terminal checks run only while this is set.
    pub play: bool,
    pub outcome: Option<Outcome>,
}

impl LevelState {
    pub fn won(&self) -> bool {
        self.outcome == Some(Outcome::Won)
    }

    pub fn lost(&self) -> bool {
        self.outcome == Some(Outcome::Lost)
    }

    /// Record the outcome and stop play.
    pub fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.play = false;
    }
}

/// Decide the terminal condition for this frame, if any.
///
/// Lose holds when the player is dead, win when no collectibles remain.
/// Nothing fires while not playing.
pub fn evaluate_outcome(
    play: bool,
    player_alive: bool,
    collectibles_remaining: usize,
    priority: TerminalPriority,
) -> Option<Outcome> {
    if !play {
        return None;
    }
    let lose = !player_alive;
    let win = collectibles_remaining == 0;
    match priority {
        TerminalPriority::LoseFirst if lose => Some(Outcome::Lost),
        TerminalPriority::LoseFirst if win => Some(Outcome::Won),
        TerminalPriority::WinFirst if win => Some(Outcome::Won),
        TerminalPriority::WinFirst if lose => Some(Outcome::Lost),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_outcome_while_not_playing() {
        assert_eq!(evaluate_outcome(false, false, 0, TerminalPriority::LoseFirst), None);
    }

    #[test]
    fn test_lose_and_win_alone() {
        let p = TerminalPriority::LoseFirst;
        assert_eq!(evaluate_outcome(true, false, 3, p), Some(Outcome::Lost));
        assert_eq!(evaluate_outcome(true, true, 0, p), Some(Outcome::Won));
        assert_eq!(evaluate_outcome(true, true, 1, p), None);
    }

    #[test]
    fn test_priority_breaks_ties() {
        assert_eq!(
            evaluate_outcome(true, false, 0, TerminalPriority::LoseFirst),
            Some(Outcome::Lost)
        );
        assert_eq!(
            evaluate_outcome(true, false, 0, TerminalPriority::WinFirst),
            Some(Outcome::Won)
        );
    }

    #[test]
    fn test_finish_stops_play() {
        let mut state = LevelState {
            play: true,
            outcome: None,
        };
        state.finish(Outcome::Lost);
        assert!(!state.play);
        assert!(state.lost() && !state.won());
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("win_first".parse(), Ok(TerminalPriority::WinFirst));
        assert_eq!(" LOSE_FIRST".parse(), Ok(TerminalPriority::LoseFirst));
        assert!("sometimes".parse::<TerminalPriority>().is_err());
    }
}
