//! Common parsing types used by the version parsers
use nom::{IResult, error::VerboseError};

pub type VResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;
