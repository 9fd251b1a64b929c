//! Command line configuration for the `array-rank` binary.

use std::ffi::OsString;

use clap::Parser;
use tracing::debug;

use crate::{
    error::{Error, Result},
    rank::{Direction, Lookup, RankTransform},
    values::Values,
};

#[derive(Parser, Debug)]
#[command(
    name = "array-rank",
    about = "Replaces every value with its rank among the distinct sorted values",
    after_help = "Log output is controlled with RUST_LOG, e.g. RUST_LOG=debug."
)]
pub struct Args {
    /// Integers separated by commas or spaces. Read from stdin when no values
    /// or random source are given
    #[arg(allow_hyphen_values = true, conflicts_with_all = ["random", "gaussian"])]
    pub values: Vec<String>,

    #[arg(long, value_enum, default_value_t = Direction::Ascending)]
    pub direction: Direction,

    /// Shorthand for `--direction descending`
    #[arg(long, conflicts_with = "direction")]
    pub descending: bool,

    /// Dictionary used for rank lookups
    #[arg(long, value_enum, default_value_t = Lookup::Hash)]
    pub lookup: Lookup,

    /// Ranks start at 0 instead of 1
    #[arg(long)]
    pub zero_based: bool,

    /// Rank LEN uniformly random integers
    #[arg(long, value_name = "LEN", conflicts_with = "gaussian")]
    pub random: Option<usize>,

    /// Smallest random integer
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min: i64,

    /// Largest random integer
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub max: i64,

    /// Rank LEN normally distributed integers
    #[arg(long, value_name = "LEN")]
    pub gaussian: Option<usize>,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub mean: f64,

    #[arg(long, default_value_t = 1.0)]
    pub std_dev: f64,

    /// Seed for random input
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Where the values to rank come from.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Literal(Values),
    Stdin,
    Uniform { len: usize, min: i64, max: i64 },
    Gaussian { len: usize, mean: f64, std_dev: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub input: Input,
    pub transform: RankTransform,
    pub seed: Option<u64>,
}

impl Config {
    /// Parse arguments, not including the program name.
    pub fn from_args<I, T>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = std::iter::once(OsString::from("array-rank"))
            .chain(args.into_iter().map(Into::into));
        let args = Args::try_parse_from(args).map_err(|e| Error::Usage(e.to_string()))?;
        Config::from_cli(args)
    }

    pub fn from_cli(args: Args) -> Result<Config> {
        let direction = if args.descending { Direction::Descending } else { args.direction };
        let mut transform = RankTransform::new().direction(direction).lookup(args.lookup);
        if args.zero_based {
            transform = transform.first_rank(0);
        }

        let input = match (args.random, args.gaussian) {
            (Some(len), _) => Input::Uniform { len, min: args.min, max: args.max },
            (None, Some(len)) => Input::Gaussian { len, mean: args.mean, std_dev: args.std_dev },
            (None, None) if args.values.is_empty() => Input::Stdin,
            (None, None) => Input::Literal(args.values.join(" ").parse()?),
        };
        let config = Config { input, transform, seed: args.seed };
        debug!(?config, "parsed arguments");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config> {
        Config::from_args(args.iter().copied())
    }

    #[test]
    fn defaults_to_stdin() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.input, Input::Stdin);
        assert_eq!(config.transform, RankTransform::new());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn literal_values() {
        let config = parse(&["40,10", "20", "-30"]).unwrap();
        assert_eq!(config.input, Input::Literal(Values::new(vec![40, 10, 20, -30])));
    }

    #[test]
    fn leading_negative_values() {
        let expected = Input::Literal(Values::new(vec![-5, 0, 5]));
        assert_eq!(parse(&["-5,0,5"]).unwrap().input, expected);
        assert_eq!(parse(&["-5,", "0", "5"]).unwrap().input, expected);
        assert_eq!(parse(&["-5", "0,5"]).unwrap().input, expected);
        let config = parse(&["--descending", "-5,0,5"]).unwrap();
        assert_eq!(config.input, expected);
        assert_eq!(config.transform.get_direction(), Direction::Descending);
    }

    #[test]
    fn options() {
        let config = parse(&["--descending", "--lookup", "tree", "--zero-based", "1,2"]).unwrap();
        let expected =
            RankTransform::new().direction(Direction::Descending).lookup(Lookup::Tree).first_rank(0);
        assert_eq!(config.transform, expected);

        let config = parse(&["--direction", "descending", "1"]).unwrap();
        assert_eq!(config.transform.get_direction(), Direction::Descending);
    }

    #[test]
    fn random_sources() {
        let config = parse(&["--random", "10", "--min", "-5", "--max", "5", "--seed", "3"]).unwrap();
        assert_eq!(config.input, Input::Uniform { len: 10, min: -5, max: 5 });
        assert_eq!(config.seed, Some(3));

        let config = parse(&["--gaussian", "4", "--std-dev", "2.5", "--mean", "-1.5"]).unwrap();
        assert_eq!(config.input, Input::Gaussian { len: 4, mean: -1.5, std_dev: 2.5 });
    }

    #[test]
    fn usage_errors() {
        let cases: [&[&str]; 7] = [
            &["--lookup"],
            &["--lookup", "list"],
            &["--random", "ten"],
            &["--random", "3", "1,2"],
            &["--random", "3", "--gaussian", "3"],
            &["--direction", "ascending", "--descending"],
            &["--help"],
        ];
        for args in cases {
            assert!(matches!(parse(args), Err(Error::Usage(_))), "args {:?}", args);
        }
    }

    #[test]
    fn invalid_literal() {
        assert_eq!(
            parse(&["1", "two"]).unwrap_err(),
            Error::InvalidValue { position: 1, token: "two".to_string() }
        );
    }
}
