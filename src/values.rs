use std::{fmt, ops::Deref, str::FromStr};

use tracing::trace;

use crate::{
    error::{Error, Result},
    rank::RankTransform,
};

/// A sequence of integers to be ranked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Values {
    values: Vec<i64>,
}

impl Values {
    pub fn new(values: Vec<i64>) -> Self {
        Values { values }
    }

    pub fn ranks(&self, transform: &RankTransform) -> Vec<usize> {
        transform.apply(&self.values)
    }
}

impl Deref for Values {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.values
    }
}

impl From<Vec<i64>> for Values {
    fn from(values: Vec<i64>) -> Self {
        Values { values }
    }
}

/// Parses integers separated by commas and/or whitespace, optionally inside
/// square brackets: `40,10,20,30`, `[40, 10, 20, 30]` or `40 10 20 30`. A
/// blank string is an empty sequence.
impl FromStr for Values {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')).unwrap_or(s);
        let mut values = Vec::with_capacity(s.len() / 2);
        let tokens = s.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty());
        for (position, token) in tokens.enumerate() {
            match token.parse() {
                Ok(n) => values.push(n),
                Err(_) => {
                    return Err(Error::InvalidValue { position, token: token.to_string() });
                }
            }
        }
        trace!(len = values.len(), "parsed values");
        Ok(Values { values })
    }
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.values)
    }
}

/// Writes `list` comma separated, without spaces or brackets.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, list: &[T]) -> fmt::Result {
    if let Some((first, rest)) = list.split_first() {
        write!(f, "{}", first)?;
        for x in rest {
            write!(f, ",{}", x)?;
        }
    }
    Ok(())
}

/// Displays ranks the same way as [`Values`].
pub struct Ranks<'a>(pub &'a [usize]);

impl fmt::Display for Ranks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0)
    }
}
