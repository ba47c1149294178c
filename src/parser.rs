use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use nom::character::complete::{digit1, one_of};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::sequence::pair;
use nom::{Finish, IResult, Parser};

use crate::error::{Error, Result};

/// Decimal integer with an optional leading sign.
pub fn base10_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s| N::from_str(s)).parse(input)
}

fn integer_token(input: &str) -> IResult<&str, i64> {
    all_consuming(base10_numeric).parse(input)
}

/// Parses one whitespace-free token, which must be an integer in its entirety.
/// The error is detached from `token` so it can outlive the input text.
pub fn parse_token(token: &str) -> std::result::Result<i64, nom::error::Error<String>> {
    let (_rest, n) = integer_token(token)
        .finish()
        .map_err(|nom::error::Error { input, code }| nom::error::Error {
            input: input.to_owned(),
            code,
        })?;

    Ok(n)
}

pub fn read_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let io_error = |source: io::Error| Error::Io {
        path: path.to_owned(),
        source,
    };

    let bytes = fs::read(path).map_err(io_error)?;
    String::from_utf8(bytes).map_err(|e| io_error(io::Error::new(io::ErrorKind::InvalidData, e)))
}
