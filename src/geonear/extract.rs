use crate::geonear::{
    entity::{geometry_name, Record},
    error::Error,
};
use geo_types::Geometry;
use serde_json::Map;

/// Which attributes of a detection feature to carry over, and under which
/// names.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractFields {
    pub key: String,
    pub key_out: String,
    pub object_key: String,
    pub field: String,
}

/// Trims detection features down to their point, their key and one object
/// class attribute.
pub fn extract(records: Vec<Record>, fields: &ExtractFields) -> Result<Vec<Record>, Error> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let origin = format!("feature {}", index);
            match record.geometry {
                Some(Geometry::Point(_)) => (),
                Some(ref other) => {
                    return Err(Error::UnsupportedGeometry {
                        expected: "Point",
                        found: geometry_name(other),
                    })
                }
                None => return Err(Error::field_missing("geometry", origin)),
            }
            let key = record
                .properties
                .get(&fields.key)
                .ok_or_else(|| Error::field_missing(&fields.key, &origin))?;
            let object = record
                .properties
                .get(&fields.object_key)
                .ok_or_else(|| Error::field_missing(&fields.object_key, &origin))?;

            let mut properties = Map::new();
            properties.insert(fields.key_out.clone(), key.clone());
            properties.insert(fields.field.clone(), object.clone());
            Ok(Record::new(record.geometry, properties))
        })
        .collect()
}
