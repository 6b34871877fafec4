//! Miscellaneous utilities.

use nom::{IResult, Needed};
use std::fmt;
use thiserror::Error;

/// Error from `nom` handling
#[derive(Debug, Error)]
pub enum NomError {
    /// We have leftover input that we didn't expect.
    #[error("Unexpected extra input")]
    UnexpectedInput,

    /// Our input data ended sooner than we expected.
    #[error("Incomplete input: '{0:?}' needed.")]
    IncompleteInput(Needed),

    /// An error happend during parsing
    #[error("Error from nom : {0}")]
    Error(String),

    /// And Failure happend during parsing
    #[error("Failure from nom : {0}")]
    Failure(String),
}

/// Extend `IResult` management, and convert to [`Result`] with [`NomError`]
pub trait IResultExt<I, O, E> {
    /// Convert an `IResult` to Result<_, `NomError`> and check than the input is empty after parsing.
    /// # Errors
    /// Forward `Error` and `Failure` from nom, and return `UnexpectedInput` if the input is not empty after parsing.
    fn to_result_no_rest(self) -> Result<O, NomError>;

    /// Convert an `IResult` to Result<_, `NomError`>
    /// # Errors
    /// Forward `Error` and `Failure` from nom.
    fn to_result(self) -> Result<(I, O), NomError>;
}

impl<I: Default + Eq, O, E: fmt::Debug> IResultExt<I, O, E> for IResult<I, O, E> {
    fn to_result_no_rest(self) -> Result<O, NomError> {
        let (rest, val) = self.to_result()?;
        if rest == I::default() {
            Ok(val)
        } else {
            Err(NomError::UnexpectedInput)
        }
    }

    fn to_result(self) -> Result<(I, O), NomError> {
        match self {
            Ok((rest, val)) => Ok((rest, val)),
            Err(err) => match err {
                nom::Err::Incomplete(needed) => Err(NomError::IncompleteInput(needed)),
                nom::Err::Error(err) => Err(NomError::Error(format!("{err:?}"))),
                nom::Err::Failure(err) => Err(NomError::Failure(format!("{err:?}"))),
            },
        }
    }
}
