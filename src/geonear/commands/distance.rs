use crate::geonear::commands::{number, required};
use crate::geonear::{
    context::{self, RunContext},
    densify::Densify,
    error::Error,
    source::Source,
    store::{ObservedFields, ReferenceFields, XYFields},
};
use clap::ArgMatches;
use std::io;
use std::path::PathBuf;

fn xy_fields(m: &ArgMatches, x: &'static str, y: &'static str) -> Option<XYFields> {
    match (m.value_of(x), m.value_of(y)) {
        (Some(x), Some(y)) => Some(XYFields::new(x, y)),
        _ => None,
    }
}

fn workers(m: &ArgMatches) -> Result<usize, Error> {
    if !m.is_present("parallel") {
        return Ok(1);
    }
    match m.value_of("workers") {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| Error::InvalidNumberFormat(format!("--workers {}", raw))),
        None => Ok(num_cpus::get()),
    }
}

pub fn run_context(m: &ArgMatches) -> Result<RunContext, Error> {
    let densify = if m.is_present("lines") {
        let spacing = number(m, "spacing")?.ok_or(Error::MissingArgument("spacing"))?;
        Some(Densify::new(spacing, m.is_present("include-end"))?)
    } else {
        None
    };

    Ok(RunContext {
        reference: Source::from_path(required(m, "reference")?),
        reference_fields: ReferenceFields {
            xy: xy_fields(m, "ref-x-field", "ref-y-field"),
            densify,
        },
        observed: Source::from_path(required(m, "observed")?),
        observed_fields: ObservedFields {
            xy: xy_fields(m, "x-field", "y-field"),
            key: required(m, "key")?.to_string(),
        },
        distance_field: required(m, "field")?.to_string(),
        output: m.value_of("output").map(PathBuf::from),
        workers: workers(m)?,
    })
}

pub fn run(m: &ArgMatches) -> Result<(), Error> {
    let ctx = run_context(m)?;
    let (destination, summary) = context::run(&ctx)?;
    match ctx.output {
        Some(ref path) => {
            destination.save(path)?;
            eprintln!(
                "Wrote {} distances for {} observed points ({} reference points) to {}",
                summary.updated,
                summary.observed_points,
                summary.reference_points,
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            destination.print(&mut out)?;
        }
    }
    Ok(())
}
