use once_cell::sync::Lazy;
use std::fmt;
use std::path::PathBuf;

macro_rules! exit {
    ($code:expr => $($arg:tt)*) => {{
        eprintln!($($arg)*);
        std::process::exit($code);
    }};
}

const HELP: &str = "OVERVIEW: Symbol size listing with C++ name decoding

USAGE: symsize [options] [<OBJECT>...]

Without an object, names are read from stdin one per line and decoded.

OPTIONS:
  -H, --help          Print usage information
  -D, --demangle      Decode the names of listed symbols
  -C, --color         Keep colors in decoded names
  -V, --verbose       Print the log after running";

const NAMES: &[&str] = &["--help", "--demangle", "--color", "--verbose"];

pub static ARGS: Lazy<Cli> = Lazy::new(Cli::parse);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cli {
    /// Render symbol names through the demangler.
    pub demangle: bool,

    /// Emit ANSI escape sequences for colored names.
    pub color: bool,

    /// Dump the log once done.
    pub verbose: bool,

    /// Objects to list symbols from.
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// `--help` was requested.
    Help,
    Unknown {
        arg: String,
        /// Closest known argument, if any is close enough.
        guess: Option<&'static str>,
    },
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArgError::Help => f.write_str(HELP),
            ArgError::Unknown {
                arg,
                guess: Some(guess),
            } => write!(f, "Unknown cmd arg '{arg}' did you mean '{guess}'?"),
            ArgError::Unknown { arg, guess: None } => {
                write!(f, "Unknown cmd arg '{arg}' was entered.")
            }
        }
    }
}

impl std::error::Error for ArgError {}

impl Cli {
    pub fn parse() -> Self {
        match Self::parse_from(std::env::args().skip(1)) {
            Ok(cli) => cli,
            Err(ArgError::Help) => exit!(0 => "{HELP}"),
            Err(err) => exit!(1 => "{err}"),
        }
    }

    pub fn parse_from<I: IntoIterator<Item = String>>(args: I) -> Result<Self, ArgError> {
        let mut cli = Cli::default();

        for arg in args {
            match arg.as_str() {
                "-H" | "--help" => return Err(ArgError::Help),
                "-D" | "--demangle" => cli.demangle = true,
                "-C" | "--color" => cli.color = true,
                "-V" | "--verbose" => cli.verbose = true,
                unknown if unknown.starts_with('-') && unknown.len() > 1 => {
                    return Err(ArgError::Unknown {
                        arg: unknown.to_string(),
                        guess: best_guess(unknown),
                    });
                }
                path => cli.paths.push(PathBuf::from(path)),
            }
        }

        Ok(cli)
    }
}

fn best_guess(unknown: &str) -> Option<&'static str> {
    let mut distance = u32::MAX;
    let mut best_guess = "";
    for name in NAMES {
        let d = triple_accel::levenshtein_exp(unknown.as_bytes(), name.as_bytes());
        if d < distance {
            distance = d;
            best_guess = name;
        }
    }

    // A guess that's less than 3 `steps` away from a correct arg.
    (distance < 4).then_some(best_guess)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, ArgError> {
        Cli::parse_from(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn flags_and_paths() {
        let cli = parse(&["-D", "a.out", "--color", "lib.so"]).unwrap();
        assert!(cli.demangle);
        assert!(cli.color);
        assert!(!cli.verbose);
        assert_eq!(cli.paths, [PathBuf::from("a.out"), PathBuf::from("lib.so")]);
    }

    #[test]
    fn no_args_reads_stdin() {
        assert_eq!(parse(&[]).unwrap(), Cli::default());
    }

    #[test]
    fn help() {
        assert_eq!(parse(&["--verbose", "-H"]), Err(ArgError::Help));
    }

    #[test]
    fn suggestions() {
        assert_eq!(
            parse(&["--demangel"]),
            Err(ArgError::Unknown {
                arg: "--demangel".to_string(),
                guess: Some("--demangle"),
            })
        );

        let err = parse(&["--something-else-entirely"]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown cmd arg '--something-else-entirely' was entered.");
    }
}
