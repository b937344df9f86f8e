pub mod densify;
pub mod distance;
pub mod extract;

use crate::geonear::error::Error;
use clap::ArgMatches;

pub(crate) fn required<'a>(m: &'a ArgMatches, name: &'static str) -> Result<&'a str, Error> {
    m.value_of(name).ok_or(Error::MissingArgument(name))
}

pub(crate) fn number(m: &ArgMatches, name: &'static str) -> Result<Option<f64>, Error> {
    match m.value_of(name) {
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| Error::InvalidNumberFormat(format!("--{} {}", name, raw))),
        None => Ok(None),
    }
}
