use std::collections::HashSet;

use crate::api::Specification;
use crate::parser::{negotiate, ArgumentError, ConfigError};

type BoxedSpecification<'a, M> = Box<dyn Specification<Metadata = M> + 'a>;

/// An ordered set of positional parameters.
///
/// The order in which parameters are added is the left-to-right order in which they capture tokens.
///
/// ### Example
/// ```
/// # use cmdln_params as cmdln;
/// use cmdln::{ParamSet};
///
/// let mut parser = ParamSet::<()>::new()
///     // Configure with ParamSet::add.
///     .build()
///     .unwrap();
/// parser.parse_tokens(empty::slice()).unwrap();
/// ```
pub struct ParamSet<'a, M = ()> {
    specifications: Vec<BoxedSpecification<'a, M>>,
}

impl<'a, M> Default for ParamSet<'a, M> {
    fn default() -> Self {
        Self {
            specifications: Vec::default(),
        }
    }
}

impl<'a, M> ParamSet<'a, M> {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a positional parameter to the set.
    ///
    /// ### Example
    /// ```
    /// # use cmdln_params as cmdln;
    /// use cmdln::{List, Param, ParamSet, Scalar};
    ///
    /// let mut command: String = String::default();
    /// let mut files: Vec<String> = Vec::default();
    /// let mut parser = ParamSet::new()
    ///     .add(Param::single(Scalar::new(&mut command), "command"))
    ///     .add(Param::list(List::new(&mut files), "files").optional())
    ///     .build()
    ///     .unwrap();
    ///
    /// parser.parse_tokens(&["s/a/b/", "in.txt"]).unwrap();
    /// drop(parser);
    ///
    /// assert_eq!(command, "s/a/b/");
    /// assert_eq!(files, vec!["in.txt"]);
    /// ```
    pub fn add(mut self, specification: impl Specification<Metadata = M> + 'a) -> Self {
        self.specifications.push(Box::new(specification));
        self
    }

    /// Build the positional parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    pub fn build(self) -> Result<PositionalParser<'a, M>, ConfigError> {
        let mut names = HashSet::new();

        for specification in &self.specifications {
            if !names.insert(specification.name().to_string()) {
                return Err(ConfigError(format!(
                    "Cannot duplicate the parameter '{}'.",
                    specification.name()
                )));
            }

            if let Err(error) = specification.min_length() {
                return Err(ConfigError(format!(
                    "Parameter '{}' is invalid: {error}",
                    specification.name()
                )));
            }
        }

        Ok(PositionalParser {
            specifications: self.specifications,
        })
    }
}

/// The configured positional parser.
/// Built via [`ParamSet::build`].
///
/// The parser holds the (mutable) borrows of the variables its parameters assign.
/// Read them once the parser is dropped.
/// A parser may be used for any number of parses, one at a time.
pub struct PositionalParser<'a, M = ()> {
    specifications: Vec<BoxedSpecification<'a, M>>,
}

impl<'a, M> PositionalParser<'a, M> {
    /// Run the parser against the input tokens.
    ///
    /// The tokens must exclude the program name, as well as any options (ex: `--flag`).
    /// See [`negotiate`] for how the tokens are distributed across the parameters.
    ///
    /// Parameters assigned before an error is encountered keep their values.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), ArgumentError> {
        negotiate(&mut self.specifications, tokens)
    }

    /// Run the parser against owned arguments (ex: `std::env::args().skip(1)`).
    pub fn parse_args(
        &mut self,
        args: impl IntoIterator<Item = String>,
    ) -> Result<(), ArgumentError> {
        let args: Vec<String> = args.into_iter().collect();
        self.parse_tokens(
            args.iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// The parameters of this parser, in positional order.
    pub fn specifications(&self) -> &[BoxedSpecification<'a, M>] {
        &self.specifications
    }
}

impl<'a, M> std::fmt::Debug for PositionalParser<'a, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.specifications.iter().map(|s| s.name()))
            .finish()
    }
}
