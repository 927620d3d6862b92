use crate::api::Specification;
use crate::parser::base::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Negotiate the capture lengths of `specifications` over `tokens`, assigning each its slice.
///
/// Negotiation happens in two passes.
/// 1. Each specification declares its minimum length.
/// 2. In declaration order, each specification is offered the tokens from the cursor up to a *ceiling*.
/// The ceiling reserves exactly enough trailing tokens to satisfy the minimums of the specifications that follow.
/// The specification chooses how many of the offered tokens to capture, and is assigned those tokens.
///
/// Earlier specifications therefore get first claim on ambiguous tokens, while later required specifications are
/// guaranteed their minimum.
/// An optional specification offered no tokens is skipped without being assigned.
///
/// Assignment is not transactional: if a later specification fails, the assignments already made remain.
///
/// ### Example
/// ```
/// # use cmdln_params as cmdln;
/// use cmdln::{negotiate, List, Param, Scalar};
///
/// let mut rest: Vec<String> = Vec::default();
/// let mut last: String = String::default();
/// let mut specifications = vec![
///     Param::list(List::new(&mut rest), "rest").optional(),
///     Param::single(Scalar::new(&mut last), "last"),
/// ];
///
/// negotiate(&mut specifications, &["a", "b", "c"]).unwrap();
/// drop(specifications);
///
/// assert_eq!(rest, vec!["a", "b"]);
/// assert_eq!(last, "c");
/// ```
pub fn negotiate<S>(specifications: &mut [S], tokens: &[&str]) -> Result<(), ArgumentError>
where
    S: Specification,
{
    // 1. Determine the minimum length of every specification.
    let mut minimums = Vec::with_capacity(specifications.len());

    for specification in specifications.iter() {
        let minimum = specification
            .min_length()
            .map_err(|error| Cause::from_capture(specification.name(), error))?;
        minimums.push(minimum);
    }

    // Widened, since the minimums may sum past `usize::MAX`.
    let mut remaining_minimum: u128 = minimums.iter().map(|minimum| *minimum as u128).sum();
    let mut cursor = 0;

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Negotiating {} tokens across {} specifications (minimum {remaining_minimum}).",
            tokens.len(),
            specifications.len()
        );
    }

    // 2. Allocate the tokens in declaration order.
    for (specification, minimum) in specifications.iter_mut().zip(minimums) {
        // Never past the tokens reserved for the minimums of the following specifications.
        // Never above `tokens.len()`, since `remaining_minimum` includes `minimum`.
        let ceiling = (tokens.len() as u128 + minimum as u128).saturating_sub(remaining_minimum);
        let ceiling = ceiling as usize;

        if ceiling <= cursor {
            if minimum > 0 {
                return Err(Cause::MissingRequiredArgument(specification.name().to_string()).into());
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Skipping '{}': no tokens available.", specification.name());
            }

            continue;
        }

        let offered = &tokens[cursor..ceiling];
        let length = specification
            .capture_length(offered)
            .map_err(|error| Cause::from_capture(specification.name(), error))?;

        if length < minimum {
            return Err(Cause::CapturedLessThanMinimum(specification.name().to_string()).into());
        }

        if length > offered.len() {
            return Err(Cause::CapturedMoreThanOffered(specification.name().to_string()).into());
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Specification '{}' captured {length} of {} offered tokens at {cursor}.",
                specification.name(),
                offered.len()
            );
        }

        if length > 0 {
            specification
                .assign(&offered[..length])
                .map_err(|error| Cause::from_capture(specification.name(), error))?;
        }

        cursor += length;
        remaining_minimum -= minimum as u128;
    }

    if cursor < tokens.len() {
        return Err(Cause::TooManyArguments(tokens.len() - cursor).into());
    }

    Ok(())
}
