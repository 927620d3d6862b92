use thiserror::Error;

/// Behaviour of a positional parameter, as seen by the capture negotiation.
///
/// Negotiation happens in two passes.
/// The first pass asks every specification for its [`Specification::min_length`].
/// The second pass offers each specification, in order, the longest slice of tokens it may take without starving the
/// minimums of the specifications after it.
/// The specification decides how much of that slice to keep via [`Specification::capture_length`], and then
/// receives those tokens in [`Specification::assign`].
pub trait Specification {
    /// Caller defined payload (ex: help text), never interpreted during parsing.
    type Metadata;

    /// The name of this parameter, used in error messages.
    fn name(&self) -> &str;

    /// The metadata attached to this parameter.
    fn metadata(&self) -> &Self::Metadata;

    /// The minimum number of tokens to capture.
    /// Typically `1` for a required parameter and `0` for an optional one.
    fn min_length(&self) -> Result<usize, CaptureError>;

    /// Decide how many of the offered `candidates` to capture.
    ///
    /// The result must lie within `[min_length, candidates.len()]`.
    /// A single value parameter returns `1`, a greedy list returns `candidates.len()`.
    fn capture_length(&self, candidates: &[&str]) -> Result<usize, CaptureError>;

    /// Receive the captured tokens, of the length chosen by `capture_length`.
    /// Never invoked for an empty capture.
    fn assign(&mut self, tokens: &[&str]) -> Result<(), CaptureError>;
}

impl<S: Specification + ?Sized> Specification for Box<S> {
    type Metadata = S::Metadata;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn metadata(&self) -> &Self::Metadata {
        (**self).metadata()
    }

    fn min_length(&self) -> Result<usize, CaptureError> {
        (**self).min_length()
    }

    fn capture_length(&self, candidates: &[&str]) -> Result<usize, CaptureError> {
        (**self).capture_length(candidates)
    }

    fn assign(&mut self, tokens: &[&str]) -> Result<(), CaptureError> {
        (**self).assign(tokens)
    }
}

/// Behaviour to receive the tokens captured by a parameter.
///
/// The value adapters ([`Scalar`](crate::Scalar), [`Optional`](crate::Optional), [`List`](crate::List)) implement this,
/// as does any `FnMut(&[&str]) -> Result<(), CaptureError>`.
pub trait Receiver {
    /// Receive the captured tokens.
    fn receive(&mut self, tokens: &[&str]) -> Result<(), CaptureError>;
}

impl<F> Receiver for F
where
    F: FnMut(&[&str]) -> Result<(), CaptureError>,
{
    fn receive(&mut self, tokens: &[&str]) -> Result<(), CaptureError> {
        self(tokens)
    }
}

/// An error raised by a specification or its receiver.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// A token could not be converted into the receiving type.
    #[error("cannot convert '{token}' to {type_name}: {source}.")]
    InvalidConversion {
        /// The offending token.
        token: String,
        /// The receiving type.
        type_name: &'static str,
        /// The underlying conversion error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The receiver was handed a number of tokens it cannot hold.
    #[error("cannot receive {received} values (expected={expected}).")]
    Cardinality {
        /// The number of tokens the receiver holds.
        expected: usize,
        /// The number of tokens handed over.
        received: usize,
    },

    /// A sentinel terminated capture was offered tokens without the sentinel.
    #[error("missing the '{0}' separator.")]
    MissingSentinel(String),

    /// Any other specification defined failure.
    #[error("{0}")]
    Invalid(String),
}

pub(crate) fn convert<T>(token: &str) -> Result<T, CaptureError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    T::from_str(token).map_err(|error| CaptureError::InvalidConversion {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
        source: Box::new(error),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;

    #[test]
    fn convert_u32() {
        let value: u32 = convert("5").unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn convert_invalid() {
        let error = convert::<u32>("abc").unwrap_err();
        assert_matches!(
            &error,
            CaptureError::InvalidConversion { token, type_name: "u32", .. } if token == "abc"
        );
        assert_contains!(error.to_string(), "cannot convert 'abc' to u32");
    }

    #[test]
    fn closure_receiver() {
        let mut received: Vec<String> = Vec::default();
        let mut receiver = |tokens: &[&str]| -> Result<(), CaptureError> {
            received.extend(tokens.iter().map(|t| t.to_string()));
            Ok(())
        };
        receiver.receive(&["a", "b"]).unwrap();
        assert_eq!(received, vec!["a", "b"]);
    }
}
