/// Failures surfaced by economy operations.
///
/// `Validation` and `InsufficientFunds` are rejections shown to the user and
/// leave state untouched. `Storage` is fatal to the operation.
#[derive(Debug, thiserror::Error)]
pub enum EconomyError {
    #[error("{0}")]
    Validation(String),

    #[error("you don't have enough coins: balance {balance}, stake {stake}")]
    InsufficientFunds { balance: i64, stake: i64 },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl EconomyError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True for rejections that should be shown to the user rather than logged.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}
