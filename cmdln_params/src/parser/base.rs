use thiserror::Error;

use crate::api::CaptureError;

#[derive(Debug, Error)]
#[error("Config error: {0}")]
/// A misconfigured set of parameters, detected by [`ParamSet::build`](crate::ParamSet::build).
pub struct ConfigError(pub(crate) String);

/// The error returned when the tokens cannot be assigned according to the parameters.
///
/// The underlying [`Cause`] is available via [`ArgumentError::cause`] or [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("Argument error: {0}")]
pub struct ArgumentError(#[source] Cause);

impl ArgumentError {
    /// The underlying cause of this error.
    pub fn cause(&self) -> &Cause {
        &self.0
    }

    /// Take the underlying cause of this error.
    pub fn into_cause(self) -> Cause {
        self.0
    }
}

impl From<Cause> for ArgumentError {
    fn from(cause: Cause) -> Self {
        ArgumentError(cause)
    }
}

/// Why the tokens could not be assigned.
#[derive(Debug, Error)]
pub enum Cause {
    /// A required parameter was offered no tokens.
    #[error("Missing required argument '{0}'.")]
    MissingRequiredArgument(String),

    /// A parameter captured fewer tokens than its minimum length.
    #[error("Argument '{0}' captured less than its minimum length.")]
    CapturedLessThanMinimum(String),

    /// A parameter captured more tokens than it was offered.
    #[error("Argument '{0}' captured more than it was offered.")]
    CapturedMoreThanOffered(String),

    /// Tokens remained after every parameter captured.
    #[error("Too many arguments, {0} remaining.")]
    TooManyArguments(usize),

    /// A captured token could not be converted to the parameter's type.
    #[error("Argument '{name}' cannot convert '{token}' to {type_name}.")]
    Conversion {
        /// The parameter name.
        name: String,
        /// The offending token.
        token: String,
        /// The receiving type.
        type_name: &'static str,
        /// The underlying conversion error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A parameter's own capture or assignment logic failed.
    #[error("Argument '{name}' failed: {source}")]
    Specification {
        /// The parameter name.
        name: String,
        /// The underlying specification error.
        #[source]
        source: CaptureError,
    },
}

impl Cause {
    pub(crate) fn from_capture(name: &str, error: CaptureError) -> Self {
        match error {
            CaptureError::InvalidConversion {
                token,
                type_name,
                source,
            } => Cause::Conversion {
                name: name.to_string(),
                token,
                type_name,
                source,
            },
            error => Cause::Specification {
                name: name.to_string(),
                source: error,
            },
        }
    }
}
