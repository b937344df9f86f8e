use crate::geonear::{
    error::Error,
    nearest,
    source::Source,
    store::{self, ObservedFields, ReferenceFields},
    writer::{self, FeatureStore},
};
use std::path::PathBuf;

/// Everything one distance run needs, built once from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunContext {
    pub reference: Source,
    pub reference_fields: ReferenceFields,
    pub observed: Source,
    pub observed_fields: ObservedFields,
    pub distance_field: String,
    pub output: Option<PathBuf>,
    pub workers: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub reference_points: usize,
    pub observed_points: usize,
    pub updated: usize,
}

impl RunContext {
    pub fn validate(&self) -> Result<(), Error> {
        if self.reference == Source::Stdin && self.observed == Source::Stdin {
            return Err(Error::InvalidArgument(
                "reference and observed inputs can't both be read from stdin".to_string(),
            ));
        }
        if self.distance_field == self.observed_fields.key {
            return Err(Error::InvalidArgument(format!(
                "distance field `{}` would overwrite the key field",
                self.distance_field
            )));
        }
        Ok(())
    }
}

/// Loads both point sets, measures every observed point and writes the
/// distances onto the observed records. The updated records are returned
/// for the caller to persist.
pub fn run(ctx: &RunContext) -> Result<(FeatureStore, Summary), Error> {
    ctx.validate()?;

    log::info!("Loading reference points from {}", ctx.reference);
    let reference_records = ctx.reference.load()?;
    if let Some(d) = ctx.reference_fields.densify {
        log::info!(
            "Densifying {} line features every {} units",
            reference_records.len(),
            d.spacing
        );
    }
    let reference = store::load_reference(&reference_records, &ctx.reference_fields)?;
    drop(reference_records);

    log::info!("Loading observed points from {}", ctx.observed);
    let observed_records = ctx.observed.load()?;
    let mut observed = store::load_observed(&observed_records, &ctx.observed_fields)?;

    log::info!(
        "Calculating the shortest distance from {} observed points to {} reference points",
        observed.len(),
        reference.len()
    );
    if ctx.workers > 1 {
        nearest::assign_distances_par(&mut observed, &reference, ctx.workers)?;
    } else {
        nearest::assign_distances(&mut observed, &reference)?;
    }

    log::info!("Writing distances into field `{}`", ctx.distance_field);
    let mut destination = FeatureStore::new(observed_records);
    let updated = writer::write(
        &mut destination,
        &observed,
        &ctx.observed_fields.key,
        &ctx.distance_field,
    )?;
    log::info!("Updated {} of {} records", updated, destination.records().len());

    Ok((
        destination,
        Summary {
            reference_points: reference.len(),
            observed_points: observed.len(),
            updated,
        },
    ))
}
