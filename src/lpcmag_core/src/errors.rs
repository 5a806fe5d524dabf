//! # Errors
//! Errors emitted by lpcmag_core

// Define all errors which may be raised by this crate, as well as optionally provide
// conversion to pyo3 error types which allow for the errors to be raised in Python.
use std::{error, fmt};

/// lpcmag specific result.
pub type LpcResult<T> = Result<T, Error>;

/// Possible Errors which may be raised by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Orbital arc or Oort group outside of the supported values.
    InvalidArgument(String),

    /// Heliocentric distance where the brightening law is undefined, zero, negative or
    /// not finite.
    DomainError(String),

    /// Input or variable exceeded expected or allowed bounds.
    ValueError(String),

    /// Drawing the light curves failed.
    PlotError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(s) => {
                write!(f, "{}", s)
            }
            Error::DomainError(s) => {
                write!(f, "{}", s)
            }
            Error::ValueError(s) => {
                write!(f, "{}", s)
            }
            Error::PlotError(s) => {
                write!(f, "Failed to draw light curves: {}", s)
            }
        }
    }
}

#[cfg(feature = "pyo3")]
use pyo3::{exceptions, PyErr};

#[cfg(feature = "pyo3")]
impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        match err {
            Error::InvalidArgument(s) => PyErr::new::<exceptions::PyValueError, _>(s),

            Error::DomainError(s) => PyErr::new::<exceptions::PyValueError, _>(s),

            Error::ValueError(s) => PyErr::new::<exceptions::PyValueError, _>(s),

            Error::PlotError(s) => PyErr::new::<exceptions::PyValueError, _>(format!(
                "Failed to draw light curves: {}",
                s
            )),
        }
    }
}

#[cfg(feature = "plot")]
impl<E: error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>> for Error {
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::PlotError(value.to_string())
    }
}
