mod geonear;
use geonear::commands;
use geonear::error::Error;
use geonear::text;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::process;

fn run(matches: ArgMatches) -> Result<(), Error> {
    match matches.subcommand() {
        ("distance", Some(m)) => commands::distance::run(m),
        ("densify", Some(m)) => commands::densify::run(m),
        ("extract", Some(m)) => commands::extract::run(m),
        _ => Err(Error::UnknownCommand),
    }
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn spacing_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("spacing")
        .long("spacing")
        .short("s")
        .takes_value(true)
        .help("Distance between generated points, in the units of the coordinate system")
}

fn include_end_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("include-end")
        .long("include-end")
        .help("Also emit the last vertex of each line part")
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let distance = SubCommand::with_name("distance")
        .about(text::DISTANCE_ABOUT)
        .after_help(text::DISTANCE_AFTER_HELP)
        .arg(Arg::with_name("reference")
             .help("Reference dataset: the known locations")
             .required(true)
             .index(1))
        .arg(Arg::with_name("observed")
             .help("Observed dataset: the points to measure")
             .required(true)
             .index(2))
        .arg(Arg::with_name("lines")
             .long("lines")
             .short("l")
             .requires("spacing")
             .help("Reference dataset holds lines; densify them into points first"))
        .arg(spacing_arg().requires("lines"))
        .arg(include_end_arg().requires("lines"))
        .arg(Arg::with_name("ref-x-field")
             .long("ref-x-field")
             .takes_value(true)
             .requires("ref-y-field")
             .conflicts_with("lines")
             .help("Read reference X from this attribute instead of the geometry"))
        .arg(Arg::with_name("ref-y-field")
             .long("ref-y-field")
             .takes_value(true)
             .requires("ref-x-field")
             .help("Read reference Y from this attribute instead of the geometry"))
        .arg(Arg::with_name("x-field")
             .long("x-field")
             .takes_value(true)
             .requires("y-field")
             .help("Read observed X from this attribute instead of the geometry"))
        .arg(Arg::with_name("y-field")
             .long("y-field")
             .takes_value(true)
             .requires("x-field")
             .help("Read observed Y from this attribute instead of the geometry"))
        .arg(Arg::with_name("key")
             .long("key")
             .short("k")
             .takes_value(true)
             .default_value("Key")
             .help("Unique key attribute of the observed records"))
        .arg(Arg::with_name("field")
             .long("field")
             .short("f")
             .takes_value(true)
             .default_value("Distance")
             .help("Attribute receiving the distance"))
        .arg(Arg::with_name("output")
             .long("output")
             .short("o")
             .takes_value(true)
             .help("Write the measured records to this GeoJSON file instead of STDOUT"))
        .arg(Arg::with_name("parallel")
             .long("parallel")
             .short("p")
             .help("Scan observed points on several threads"))
        .arg(Arg::with_name("workers")
             .long("workers")
             .takes_value(true)
             .requires("parallel")
             .help("Thread count for --parallel; defaults to the number of CPUs"));

    let densify = SubCommand::with_name("densify")
        .about(text::DENSIFY_ABOUT)
        .after_help(text::DENSIFY_AFTER_HELP)
        .arg(Arg::with_name("input")
             .help("Line dataset, or - for STDIN")
             .required(true)
             .index(1))
        .arg(spacing_arg().required(true))
        .arg(include_end_arg());

    let extract = SubCommand::with_name("extract")
        .about(text::EXTRACT_ABOUT)
        .after_help(text::EXTRACT_AFTER_HELP)
        .arg(Arg::with_name("input")
             .help("GeoJSON detections")
             .required(true)
             .index(1))
        .arg(Arg::with_name("object-key")
             .long("object-key")
             .takes_value(true)
             .required(true)
             .help("Property holding the object class value"))
        .arg(Arg::with_name("key")
             .long("key")
             .takes_value(true)
             .default_value("key")
             .help("Property holding the photo key"))
        .arg(Arg::with_name("key-out")
             .long("key-out")
             .takes_value(true)
             .default_value("Key")
             .help("Output name of the key attribute"))
        .arg(Arg::with_name("field")
             .long("field")
             .takes_value(true)
             .help("Output name of the object class attribute; defaults to --object-key"));

    let matches = App::new("geonear")
        .version(VERSION)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .about("geonear - nearest reference distance for point datasets")
        .after_help(text::MAIN_AFTER_HELP)
        .subcommand(distance)
        .subcommand(densify)
        .subcommand(extract)
        .get_matches();

    if let Err(e) = run(matches) {
        eprintln!("Application error: {}", e);
        process::exit(1);
    }
}
