use crate::geonear::commands::required;
use crate::geonear::{
    error::Error,
    extract::{self, ExtractFields},
    source::Source,
};
use clap::ArgMatches;
use std::io::{self, Write};

pub fn run(m: &ArgMatches) -> Result<(), Error> {
    let source = Source::from_path(required(m, "input")?);
    let object_key = required(m, "object-key")?;
    let fields = ExtractFields {
        key: required(m, "key")?.to_string(),
        key_out: required(m, "key-out")?.to_string(),
        object_key: object_key.to_string(),
        field: m.value_of("field").unwrap_or(object_key).to_string(),
    };

    log::info!("Extracting `{}` from {}", fields.object_key, source);
    let records = extract::extract(source.load()?, &fields)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for r in records {
        writeln!(out, "{}", serde_json::to_string(&r.geojson_feature())?)?;
    }
    Ok(())
}
