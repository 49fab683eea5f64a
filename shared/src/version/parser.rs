//! Version range parser using nom.
//!
//! Parses expressions like:
//! - `*`
//! - `>=7.0.0`
//! - `>=2.0.0 <8.0.0`
//! - `<6.0.0 || >=7.7.0`
//! - `5.0.0 - 6.8.0`

use super::range::{VersionRange, VersionRangeError};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, multispace0, multispace1, one_of},
    combinator::{map, map_res, opt, recognize, value},
    multi::{separated_list0, separated_list1},
    sequence::{delimited, preceded},
    IResult, Parser,
};
use semver::{Comparator, Op, Prerelease, VersionReq};

/// Parses a version range expression.
///
/// An empty expression is equivalent to `*`.
///
/// # Errors
///
/// Returns [`VersionRangeError::SyntaxError`] if the expression is not a
/// valid range or has unexpected trailing content.
///
/// # Examples
///
/// ```
/// use shared::version::{parse_range, parse_version};
///
/// let range = parse_range("<6.0.0 || >=7.7.0").unwrap();
/// assert!(range.matches(&parse_version("7.7.0").unwrap()));
/// assert!(!range.matches(&parse_version("6.8.0").unwrap()));
/// ```
pub fn parse_range(input: &str) -> Result<VersionRange, VersionRangeError> {
    let trimmed = input.trim();

    match range(trimmed) {
        Ok((remaining, alternatives)) => {
            let remaining = remaining.trim();
            if remaining.is_empty() {
                Ok(VersionRange {
                    source: trimmed.to_string(),
                    alternatives,
                })
            } else {
                Err(VersionRangeError::SyntaxError {
                    range: input.to_string(),
                    message: format!("unexpected trailing content: '{remaining}'"),
                })
            }
        }
        Err(e) => Err(VersionRangeError::SyntaxError {
            range: input.to_string(),
            message: format!("{e}"),
        }),
    }
}

/// A possibly incomplete version as written in a range: `7`, `7.x`, `7.10.0-rc1`.
///
/// `None` components are wildcards; once a component is a wildcard every
/// following component is too.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Partial {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    pre: Prerelease,
}

impl Partial {
    fn comparator(&self, op: Op) -> Option<Comparator> {
        let major = self.major?;
        Some(Comparator {
            op,
            major,
            minor: self.minor,
            patch: self.patch,
            pre: self.pre.clone(),
        })
    }

    /// A bare version with no operator: exact when complete, prefix match otherwise.
    fn bare_comparator(&self) -> Option<Comparator> {
        if self.patch.is_some() {
            self.comparator(Op::Exact)
        } else {
            self.comparator(Op::Wildcard)
        }
    }
}

// ============================================================================
// Range parser
// ============================================================================

fn range(input: &str) -> IResult<&str, Vec<VersionReq>> {
    separated_list1(
        delimited(multispace0, tag("||"), multispace0),
        alternative,
    )
    .parse(input)
}

fn alternative(input: &str) -> IResult<&str, VersionReq> {
    let (input, comparators) = alt((hyphen_range, comparator_set)).parse(input)?;
    Ok((input, VersionReq { comparators }))
}

fn hyphen_range(input: &str) -> IResult<&str, Vec<Comparator>> {
    let (input, low) = partial(input)?;
    let (input, _) = (multispace1, char('-'), multispace1).parse(input)?;
    let (input, high) = partial(input)?;

    let comparators = [
        low.comparator(Op::GreaterEq),
        high.comparator(Op::LessEq),
    ]
    .into_iter()
    .flatten()
    .collect();

    Ok((input, comparators))
}

fn comparator_set(input: &str) -> IResult<&str, Vec<Comparator>> {
    map(
        separated_list0(multispace1, comparator),
        |comparators: Vec<Option<Comparator>>| comparators.into_iter().flatten().collect(),
    )
    .parse(input)
}

// ============================================================================
// Comparator parser
// ============================================================================

/// `<0.0.0` without a prerelease: no version satisfies it.
const UNSATISFIABLE: Comparator = Comparator {
    op: Op::Less,
    major: 0,
    minor: Some(0),
    patch: Some(0),
    pre: Prerelease::EMPTY,
};

/// Parses a single comparator. Yields `None` for wildcards such as `*` or
/// `>=*`, which accept any version. `<*` and `>*` accept none.
fn comparator(input: &str) -> IResult<&str, Option<Comparator>> {
    let (input, op) = opt(operator).parse(input)?;
    let (input, _) = multispace0(input)?;
    let (input, partial) = partial(input)?;

    let comparator = match op {
        Some(Op::Less | Op::Greater) if partial.major.is_none() => Some(UNSATISFIABLE),
        Some(op) => partial.comparator(op),
        None => partial.bare_comparator(),
    };

    Ok((input, comparator))
}

fn operator(input: &str) -> IResult<&str, Op> {
    alt((
        value(Op::GreaterEq, tag(">=")),
        value(Op::LessEq, tag("<=")),
        value(Op::Greater, tag(">")),
        value(Op::Less, tag("<")),
        value(Op::Exact, tag("=")),
        value(Op::Tilde, tag("~")),
        value(Op::Caret, tag("^")),
    ))
    .parse(input)
}

// ============================================================================
// Partial version parser
// ============================================================================

fn partial(input: &str) -> IResult<&str, Partial> {
    let (input, _) = opt(char('v')).parse(input)?;
    let (input, major) = component(input)?;
    let (input, minor) = opt(preceded(char('.'), component)).parse(input)?;
    let (input, patch) = opt(preceded(char('.'), component)).parse(input)?;
    let (input, pre) = opt(preceded(char('-'), prerelease)).parse(input)?;
    let (input, _) = opt(preceded(char('+'), identifiers)).parse(input)?;

    let minor = major.and(minor.flatten());
    let patch = minor.and(patch.flatten());
    let pre = if patch.is_some() {
        pre.unwrap_or(Prerelease::EMPTY)
    } else {
        Prerelease::EMPTY
    };

    Ok((
        input,
        Partial {
            major,
            minor,
            patch,
            pre,
        },
    ))
}

/// A numeric version component, or `x`/`X`/`*` for a wildcard.
fn component(input: &str) -> IResult<&str, Option<u64>> {
    alt((
        value(None, one_of("xX*")),
        map(map_res(digit1, str::parse::<u64>), Some),
    ))
    .parse(input)
}

fn prerelease(input: &str) -> IResult<&str, Prerelease> {
    map_res(identifiers, Prerelease::new).parse(input)
}

fn identifiers(input: &str) -> IResult<&str, &str> {
    recognize(separated_list1(
        char('.'),
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-'),
    ))
    .parse(input)
}
