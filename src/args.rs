use crate::config::CONF_FILE_EXTENSION;
use std::ffi::OsString;
use std::path::PathBuf;

pub const VERBOSE_FLAG: &str = "--verbose";
pub const NO_MOVE_FLAG: &str = "--no-move";

/// Command line options. Flags match exactly and case-sensitively.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Args {
    pub verbose: bool,
    pub no_move: bool,
    /// Config file candidates in command line order; the first existing one wins.
    pub config_paths: Vec<PathBuf>,
    /// Tokens that matched nothing. Parsing runs before the logger is up.
    pub ignored: Vec<OsString>,
}

impl Args {
    pub fn from_env() -> Self {
        Self::parse(std::env::args_os().skip(1))
    }

    /// Parse the tokens following the program name.
    pub fn parse<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = Self::default();

        for token in tokens {
            if token == VERBOSE_FLAG {
                args.verbose = true;
            } else if token == NO_MOVE_FLAG {
                args.no_move = true;
            } else {
                let path = PathBuf::from(&token);
                let is_config = path
                    .extension()
                    .map_or(false, |ext| ext == CONF_FILE_EXTENSION);
                if is_config {
                    args.config_paths.push(path);
                } else {
                    args.ignored.push(token);
                }
            }
        }

        args
    }

    pub fn log_ignored(&self) {
        for token in &self.ignored {
            log::debug!("ignored argument: {:?}", token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[&str]) -> Args {
        Args::parse(tokens.iter().map(OsString::from))
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse(&[]), Args::default());
    }

    #[test]
    fn verbose_exact_match() {
        assert!(parse(&["--verbose"]).verbose);
        assert!(parse(&["foo", "--verbose", "bar"]).verbose);
    }

    #[test]
    fn verbose_is_case_sensitive() {
        assert!(!parse(&["--VERBOSE"]).verbose);
        assert!(!parse(&["--Verbose"]).verbose);
    }

    #[test]
    fn verbose_rejects_near_misses() {
        assert!(!parse(&["-verbose"]).verbose);
        assert!(!parse(&["--verbose=1"]).verbose);
        assert!(!parse(&["--verbose "]).verbose);
        assert!(!parse(&["-v"]).verbose);
    }

    #[test]
    fn no_move_flag() {
        let args = parse(&["--no-move"]);
        assert!(args.no_move);
        assert!(!args.verbose);
        assert!(!parse(&["--No-Move"]).no_move);
    }

    #[test]
    fn config_candidates_keep_order() {
        let args = parse(&["a.screenlight", "--verbose", "b.screenlight", "c.toml"]);
        assert_eq!(
            args.config_paths,
            vec![PathBuf::from("a.screenlight"), PathBuf::from("b.screenlight")]
        );
        assert!(args.verbose);
    }

    #[test]
    fn unmatched_tokens_are_kept_for_logging() {
        let args = parse(&["light.toml", "--Verbose", "--no-move"]);
        assert!(args.config_paths.is_empty());
        assert_eq!(
            args.ignored,
            vec![OsString::from("light.toml"), OsString::from("--Verbose")]
        );
    }
}
