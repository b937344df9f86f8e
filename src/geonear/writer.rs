use crate::geonear::{entity::Record, error::Error, point::ObservedPoint, store::key_value};
use geojson::{FeatureCollection, GeoJson};
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// A keyed record collection that can take a numeric attribute.
pub trait RecordStore {
    /// Makes sure every record can hold `field`.
    fn add_field(&mut self, field: &str) -> Result<(), Error>;
    fn len(&self) -> usize;
    fn key(&self, index: usize, key_field: &str) -> Option<String>;
    fn update(&mut self, index: usize, field: &str, value: f64) -> Result<(), Error>;
}

/// Records loaded from a GeoJSON-compatible source, written back out as
/// GeoJSON.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStore {
    records: Vec<Record>,
}

impl FeatureStore {
    pub fn new(records: Vec<Record>) -> FeatureStore {
        FeatureStore { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn feature_collection(&self) -> GeoJson {
        GeoJson::from(FeatureCollection {
            bbox: None,
            features: self.records.iter().map(|r| r.geojson_feature()).collect(),
            foreign_members: None,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        fs::write(path, self.feature_collection().to_string()).map_err(|e| {
            Error::DestinationUnwritable(format!("{}: {}", path.display(), e))
        })
    }

    /// One GeoJSON Feature per line.
    pub fn print<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        for r in &self.records {
            writeln!(out, "{}", serde_json::to_string(&r.geojson_feature())?)?;
        }
        Ok(())
    }
}

impl RecordStore for FeatureStore {
    fn add_field(&mut self, field: &str) -> Result<(), Error> {
        for (index, r) in self.records.iter_mut().enumerate() {
            match r.properties.get(field) {
                None => {
                    r.properties.insert(field.to_string(), Value::Null);
                }
                Some(Value::Null) | Some(Value::Number(_)) => (),
                Some(other) => {
                    return Err(Error::DestinationUnwritable(format!(
                        "field `{}` of record {} holds {}, not a number",
                        field, index, other
                    )))
                }
            }
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn key(&self, index: usize, key_field: &str) -> Option<String> {
        self.records
            .get(index)
            .and_then(|r| r.properties.get(key_field))
            .and_then(key_value)
    }

    fn update(&mut self, index: usize, field: &str, value: f64) -> Result<(), Error> {
        let num = Number::from_f64(value).ok_or_else(|| {
            Error::DestinationUnwritable(format!("{} is not representable in GeoJSON", value))
        })?;
        match self.records.get_mut(index) {
            Some(r) => {
                r.properties.insert(field.to_string(), Value::Number(num));
                Ok(())
            }
            None => Err(Error::DestinationUnwritable(format!(
                "no record at index {}",
                index
            ))),
        }
    }
}

/// Copies each observed point's distance onto the destination record with
/// the same key. Records without a matching key are left as they are.
/// Returns the number of records updated.
pub fn write<S: RecordStore>(
    destination: &mut S,
    observed: &[ObservedPoint],
    key_field: &str,
    distance_field: &str,
) -> Result<usize, Error> {
    destination.add_field(distance_field)?;

    let mut by_key: HashMap<&str, f64> = HashMap::with_capacity(observed.len());
    for p in observed {
        if let Some(d) = p.distance {
            by_key.entry(p.key.as_str()).or_insert(d);
        }
    }

    let mut updated = 0;
    for index in 0..destination.len() {
        let distance = match destination.key(index, key_field) {
            Some(key) => by_key.get(key.as_str()).copied(),
            None => None,
        };
        if let Some(d) = distance {
            destination.update(index, distance_field, d)?;
            updated += 1;
        } else {
            log::debug!("No observed point for destination record {}", index);
        }
    }
    Ok(updated)
}
