use crate::utils::GenericError;
use std::fmt::{Display, Formatter};

/// An error returned by [`super::StateManager`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A state was never written and has no default.
    Missing {
        /// A state name.
        state: String,
        /// A scope where the state was requested.
        scope: &'static str,
    },
    /// A state was requested with a type different from the one it was written with.
    TypeMismatch {
        /// A state name.
        state: String,
        /// A requested type.
        expected: &'static str,
        /// An actual type.
        actual: &'static str,
    },
    /// A name is reserved for a built-in state.
    ReservedName(String),
}

/// A type alias for result type with `StateError`.
pub type StateResult<T> = Result<T, StateError>;

impl Display for StateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { state, scope } => write!(f, "state '{state}' is missing in {scope} scope"),
            Self::TypeMismatch { state, expected, actual } => {
                write!(f, "state '{state}' is requested as '{expected}', but it keeps '{actual}'")
            }
            Self::ReservedName(name) => write!(f, "state name '{name}' is reserved"),
        }
    }
}

impl std::error::Error for StateError {}

impl From<StateError> for GenericError {
    fn from(err: StateError) -> Self {
        err.to_string().into()
    }
}
