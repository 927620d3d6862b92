use std::collections::HashSet;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::api::capture::*;
use crate::prelude::Collectable;

/// A value adapter that takes a single token (precisely 1).
///
/// ### Example
/// ```
/// # use cmdln_params as cmdln;
/// use cmdln::Scalar;
///
/// let mut variable: u32 = 0;
/// let mut scalar = Scalar::new(&mut variable);
/// scalar.set("5").unwrap();
/// assert_eq!(scalar.to_string(), "5");
/// drop(scalar);
/// assert_eq!(variable, 5);
/// ```
pub struct Scalar<'a, T> {
    variable: &'a mut T,
}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar adapter.
    pub fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }

    /// The currently stored value.
    pub fn value(&self) -> &T {
        &*self.variable
    }
}

impl<'a, T> Scalar<'a, T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    /// Parse `token`, replacing the stored value.
    /// On error, the stored value is left untouched.
    pub fn set(&mut self, token: &str) -> Result<(), CaptureError> {
        *self.variable = convert(token)?;
        Ok(())
    }
}

impl<'a, T> Receiver for Scalar<'a, T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    fn receive(&mut self, tokens: &[&str]) -> Result<(), CaptureError> {
        match tokens {
            [token] => self.set(token),
            _ => Err(CaptureError::Cardinality {
                expected: 1,
                received: tokens.len(),
            }),
        }
    }
}

impl<'a, T: std::fmt::Display> std::fmt::Display for Scalar<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.variable)
    }
}

impl<'a, T: std::fmt::Debug> std::fmt::Debug for Scalar<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Scalar").field(&self.variable).finish()
    }
}

/// A value adapter that maps down to [`Option`], taking a single token (precisely 1).
///
/// The variable stays `None` unless a token is captured.
pub struct Optional<'a, T> {
    variable: &'a mut Option<T>,
}

impl<'a, T> Optional<'a, T> {
    /// Create an optional adapter.
    pub fn new(variable: &'a mut Option<T>) -> Self {
        Self { variable }
    }

    /// The currently stored value.
    pub fn value(&self) -> Option<&T> {
        self.variable.as_ref()
    }
}

impl<'a, T> Optional<'a, T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    /// Parse `token`, replacing the stored value.
    /// On error, the stored value is left untouched.
    pub fn set(&mut self, token: &str) -> Result<(), CaptureError> {
        self.variable.replace(convert(token)?);
        Ok(())
    }
}

impl<'a, T> Receiver for Optional<'a, T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    fn receive(&mut self, tokens: &[&str]) -> Result<(), CaptureError> {
        match tokens {
            [token] => self.set(token),
            _ => Err(CaptureError::Cardinality {
                expected: 1,
                received: tokens.len(),
            }),
        }
    }
}

impl<'a, T: std::fmt::Display> std::fmt::Display for Optional<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.variable {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}

impl<'a, T: std::fmt::Debug> std::fmt::Debug for Optional<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Optional").field(&self.variable).finish()
    }
}

/// A value adapter that takes any number of tokens into a [`Collectable`] (ex: `Vec<T>`).
///
/// Each assignment replaces the collection; values never accumulate across parses.
///
/// ### Example
/// ```
/// # use cmdln_params as cmdln;
/// use cmdln::List;
///
/// let mut variable: Vec<u32> = vec![9];
/// let mut list = List::new(&mut variable);
/// list.set(&["1", "2"]).unwrap();
/// assert_eq!(list.to_string(), "[1, 2]");
/// drop(list);
/// assert_eq!(variable, vec![1, 2]);
/// ```
pub struct List<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    variable: &'a mut C,
    _phantom: PhantomData<T>,
}

impl<'a, C, T> List<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    /// Create a list adapter.
    pub fn new(variable: &'a mut C) -> Self {
        Self {
            variable,
            _phantom: PhantomData,
        }
    }

    /// The currently stored collection.
    pub fn value(&self) -> &C {
        &*self.variable
    }
}

impl<'a, C, T> List<'a, C, T>
where
    C: 'a + Collectable<T> + Default,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    /// Parse every token, replacing the stored collection.
    /// The first failing token aborts the call, leaving the stored collection untouched.
    pub fn set(&mut self, tokens: &[&str]) -> Result<(), CaptureError> {
        let mut collection = C::default();

        for token in tokens {
            collection.add(convert(token)?);
        }

        *self.variable = collection;
        Ok(())
    }
}

impl<'a, C, T> Receiver for List<'a, C, T>
where
    C: 'a + Collectable<T> + Default,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    fn receive(&mut self, tokens: &[&str]) -> Result<(), CaptureError> {
        self.set(tokens)
    }
}

impl<'a, C, T> std::fmt::Display for List<'a, C, T>
where
    C: 'a + Collectable<T>,
    for<'b> &'b C: IntoIterator<Item = &'b T>,
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;

        for (i, item) in (&*self.variable).into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{item}")?;
        }

        write!(f, "]")
    }
}

impl<'a, C, T> std::fmt::Debug for List<'a, C, T>
where
    C: 'a + Collectable<T> + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("List").field(&self.variable).finish()
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}
