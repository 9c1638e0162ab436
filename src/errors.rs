use thiserror::Error;

use crate::battle::BetTier;

/// Errors surfaced by the battle engine to its collaborators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Bet tier {tier:?} has no settlement rule")]
    UnsupportedBet { tier: BetTier },

    #[error("Battle request {ticket_id} was withdrawn before pairing")]
    Withdrawn { ticket_id: String },

    #[error("Match executor stopped before the request was resolved")]
    ExecutorStopped,

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Result type alias for battle engine operations
pub type BattleResult<T> = Result<T, BattleError>;

impl BattleError {
    pub fn unsupported_bet(tier: BetTier) -> Self {
        Self::UnsupportedBet { tier }
    }

    pub fn withdrawn(ticket_id: impl Into<String>) -> Self {
        Self::Withdrawn {
            ticket_id: ticket_id.into(),
        }
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for BattleError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration_error(error.to_string())
    }
}
