use crate::geonear::commands::{number, required};
use crate::geonear::{densify::Densify, entity::Record, error::Error, source::Source};
use clap::ArgMatches;
use geo_types::Geometry;
use std::io::{self, Write};

pub fn run(m: &ArgMatches) -> Result<(), Error> {
    let spacing = number(m, "spacing")?.ok_or(Error::MissingArgument("spacing"))?;
    let densify = Densify::new(spacing, m.is_present("include-end"))?;
    let source = Source::from_path(required(m, "input")?);

    log::info!("Densifying {} every {} units", source, spacing);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, record) in source.load()?.into_iter().enumerate() {
        let geom = record
            .geometry
            .ok_or_else(|| Error::field_missing("geometry", format!("record {}", index)))?;
        for p in densify.points(&geom)? {
            let point = Record::new(Some(Geometry::Point(p.point())), record.properties.clone());
            writeln!(out, "{}", serde_json::to_string(&point.geojson_feature())?)?;
        }
    }
    Ok(())
}
