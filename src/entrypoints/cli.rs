use clap::Parser;

/// Parses the command line arguments without exiting, so callers decide how to report errors.
pub fn parse_args<T: Parser>() -> Result<T, clap::Error> {
    T::try_parse()
}
