//! Error types for the dice-pool engine.

/// Errors that can occur while composing or parsing a roll.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    /// A roll notation string could not be parsed.
    #[error("malformed roll spec: {0:?}")]
    MalformedSpec(String),

    /// The subject of a test is not known to the character store.
    #[error("unknown subject: {0}")]
    SubjectNotFound(String),

    /// An explicitly supplied pool size was negative.
    #[error("invalid pool size: {0}")]
    InvalidPool(i32),

    /// A recipe names an attribute the character does not have.
    #[error("character '{subject}' has no attribute '{attribute}'")]
    UnknownAttribute {
        /// The character that was looked up.
        subject: String,
        /// The missing attribute.
        attribute: String,
    },

    /// Attributes and modifiers summed past what a pool size can hold.
    #[error("dice pool out of range")]
    PoolOverflow,

    /// Recorded dice that the spec could not have produced.
    #[error("dice {values:?} cannot come from {spec}")]
    ImpossibleRoll {
        /// Canonical notation of the spec.
        spec: String,
        /// The rejected face values.
        values: Vec<u32>,
    },

    /// A `character.recipe` target string could not be parsed.
    #[error("malformed test target: {0:?}")]
    MalformedTarget(String),

    /// An extended test was advanced after it had already terminated.
    #[error("extended test already finished")]
    ExtendedTestFinished,
}

/// Convenience result type for engine operations.
pub type HrResult<T> = Result<T, RollError>;
