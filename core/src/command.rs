use serde::{Deserialize, Serialize};

/// Answer to the play-again prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerCommand {
    Play,
    Quit,
}

impl PlayerCommand {
    /// "q" quits. Anything else, including an empty line, plays.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "q" {
            Self::Quit
        } else {
            Self::Play
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_q_quits() {
        assert_eq!(PlayerCommand::parse("q\n"), PlayerCommand::Quit);
        assert_eq!(PlayerCommand::parse("\n"), PlayerCommand::Play);
        assert_eq!(PlayerCommand::parse("quit"), PlayerCommand::Play);
        assert_eq!(PlayerCommand::parse("Q"), PlayerCommand::Play);
    }
}
