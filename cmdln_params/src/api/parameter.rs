use crate::api::capture::*;
use crate::constant::DEFAULT_SENTINEL;
use crate::model::Bound;

/// The common positional parameter: a [`Bound`] on the tokens it captures, plus a [`Receiver`] for them.
///
/// A `Param` greedily captures as many of the offered tokens as its bound allows.
pub struct Param<'a, M = ()> {
    name: String,
    bound: Bound,
    receiver: Box<dyn Receiver + 'a>,
    metadata: M,
}

impl<'a> Param<'a, ()> {
    /// Create a required parameter that captures precisely 1 token.
    ///
    /// ### Example
    /// ```
    /// # use cmdln_params as cmdln;
    /// use cmdln::{Bound, Param, Scalar};
    ///
    /// let mut value: u32 = 0;
    /// let param = Param::single(Scalar::new(&mut value), "value");
    /// assert_eq!(param.bound(), Bound::Range(1, 1));
    /// ```
    pub fn single(receiver: impl Receiver + 'a, name: impl Into<String>) -> Self {
        Self::custom(receiver, name, Bound::Range(1, 1))
    }

    /// Create a required parameter that captures all the remaining tokens (at least 1).
    ///
    /// ### Example
    /// ```
    /// # use cmdln_params as cmdln;
    /// use cmdln::{Bound, List, Param};
    ///
    /// let mut items: Vec<u32> = Vec::default();
    /// let param = Param::list(List::new(&mut items), "items").optional();
    /// assert_eq!(param.bound(), Bound::Lower(0));
    /// ```
    pub fn list(receiver: impl Receiver + 'a, name: impl Into<String>) -> Self {
        Self::custom(receiver, name, Bound::Lower(1))
    }

    /// Create a parameter with an explicit `bound`.
    pub fn custom(receiver: impl Receiver + 'a, name: impl Into<String>, bound: Bound) -> Self {
        Self {
            name: name.into(),
            bound,
            receiver: Box::new(receiver),
            metadata: (),
        }
    }
}

impl<'a, M> Param<'a, M> {
    /// Make this parameter optional (its minimum becomes 0).
    pub fn optional(mut self) -> Self {
        self.bound = self.bound.optional();
        self
    }

    /// Attach caller defined metadata to this parameter.
    pub fn with_metadata<N>(self, metadata: N) -> Param<'a, N> {
        let Param {
            name,
            bound,
            receiver,
            ..
        } = self;
        Param {
            name,
            bound,
            receiver,
            metadata,
        }
    }

    /// The bound of this parameter.
    pub fn bound(&self) -> Bound {
        self.bound
    }
}

impl<'a, M> Specification for Param<'a, M> {
    type Metadata = M;

    fn name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &M {
        &self.metadata
    }

    fn min_length(&self) -> Result<usize, CaptureError> {
        match self.bound {
            Bound::Range(min, max) if min > max => Err(CaptureError::Invalid(format!(
                "bound {} has a minimum above its maximum",
                self.bound
            ))),
            _ => Ok(self.bound.min()),
        }
    }

    fn capture_length(&self, candidates: &[&str]) -> Result<usize, CaptureError> {
        Ok(self.bound.limit(candidates.len()))
    }

    fn assign(&mut self, tokens: &[&str]) -> Result<(), CaptureError> {
        self.receiver.receive(tokens)
    }
}

impl<'a, M> std::fmt::Debug for Param<'a, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Param[{n}, {b}]", n = self.name, b = self.bound)
    }
}

/// A decorator which ends the capture of the wrapped specification at a sentinel token (ex: `--`).
///
/// The sentinel itself is captured (so the next parameter does not see it), but is stripped before assignment.
/// This lets one parameter take "everything before the `--`" while the next takes "everything after".
///
/// ### Example
/// ```
/// # use cmdln_params as cmdln;
/// use cmdln::{List, Param, ParamSet, Separated};
///
/// let mut commits: Vec<String> = Vec::default();
/// let mut paths: Vec<String> = Vec::default();
/// let mut parser = ParamSet::new()
///     .add(Separated::new(Param::list(List::new(&mut commits), "commits").optional()))
///     .add(Param::list(List::new(&mut paths), "paths").optional())
///     .build()
///     .unwrap();
///
/// parser.parse_tokens(&["HEAD~1", "HEAD", "--", "src/"]).unwrap();
/// drop(parser);
///
/// assert_eq!(commits, vec!["HEAD~1", "HEAD"]);
/// assert_eq!(paths, vec!["src/"]);
/// ```
#[derive(Debug)]
pub struct Separated<S> {
    inner: S,
    sentinel: String,
    required: bool,
}

impl<S: Specification> Separated<S> {
    /// Wrap `inner`, ending its capture at [`DEFAULT_SENTINEL`].
    pub fn new(inner: S) -> Self {
        Self::with_sentinel(inner, DEFAULT_SENTINEL)
    }

    /// Wrap `inner`, ending its capture at `sentinel`.
    pub fn with_sentinel(inner: S, sentinel: impl Into<String>) -> Self {
        Self {
            inner,
            sentinel: sentinel.into(),
            required: false,
        }
    }

    /// Fail the capture when the offered tokens do not contain the sentinel.
    pub fn require_sentinel(mut self) -> Self {
        self.required = true;
        self
    }

    /// The wrapped specification.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Specification> Specification for Separated<S> {
    type Metadata = S::Metadata;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn metadata(&self) -> &Self::Metadata {
        self.inner.metadata()
    }

    fn min_length(&self) -> Result<usize, CaptureError> {
        self.inner.min_length()
    }

    fn capture_length(&self, candidates: &[&str]) -> Result<usize, CaptureError> {
        match candidates.iter().position(|token| *token == self.sentinel) {
            Some(index) => self.inner.capture_length(&candidates[..=index]),
            None if self.required => Err(CaptureError::MissingSentinel(self.sentinel.clone())),
            None => self.inner.capture_length(candidates),
        }
    }

    fn assign(&mut self, tokens: &[&str]) -> Result<(), CaptureError> {
        let tokens = match tokens.split_last() {
            Some((last, head)) if *last == self.sentinel => head,
            _ => tokens,
        };

        if tokens.is_empty() {
            // Only the sentinel was captured.
            return Ok(());
        }

        self.inner.assign(tokens)
    }
}
