//! Extraction of reference and observed point sequences from loaded records.
//!
//! Coordinates come from each record's point geometry unless an X/Y pair of
//! attribute names is declared, in which case those numeric attributes are
//! read instead.

use crate::geonear::{
    densify::Densify,
    entity::{geometry_name, Record},
    error::Error,
    point::{ObservedPoint, ReferencePoint},
};
use geo_types::Geometry;
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct XYFields {
    pub x: String,
    pub y: String,
}

impl XYFields {
    pub fn new<X: Into<String>, Y: Into<String>>(x: X, y: Y) -> XYFields {
        XYFields {
            x: x.into(),
            y: y.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceFields {
    pub xy: Option<XYFields>,
    pub densify: Option<Densify>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObservedFields {
    pub xy: Option<XYFields>,
    pub key: String,
}

fn origin(index: usize) -> String {
    format!("record {}", index)
}

fn numeric_field(record: &Record, index: usize, field: &str) -> Result<f64, Error> {
    match record.properties.get(field) {
        None => Err(Error::field_missing(field, origin(index))),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| Error::InvalidFieldValue {
            field: field.to_string(),
            reason: format!("is not a finite number in {}", origin(index)),
        }),
        Some(other) => Err(Error::InvalidFieldValue {
            field: field.to_string(),
            reason: format!("holds {} in {}, expected a number", other, origin(index)),
        }),
    }
}

fn xy_from_fields(record: &Record, index: usize, fields: &XYFields) -> Result<(f64, f64), Error> {
    Ok((
        numeric_field(record, index, &fields.x)?,
        numeric_field(record, index, &fields.y)?,
    ))
}

fn geometry(record: &Record, index: usize) -> Result<&Geometry<f64>, Error> {
    record
        .geometry
        .as_ref()
        .ok_or_else(|| Error::field_missing("geometry", origin(index)))
}

fn point_geometry(record: &Record, index: usize) -> Result<(f64, f64), Error> {
    match geometry(record, index)? {
        Geometry::Point(p) => Ok((p.x(), p.y())),
        other => Err(Error::UnsupportedGeometry {
            expected: "Point",
            found: geometry_name(other),
        }),
    }
}

/// Key values may be strings or numbers; numbers use their JSON text.
pub fn key_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn load_reference(
    records: &[Record],
    fields: &ReferenceFields,
) -> Result<Vec<ReferencePoint>, Error> {
    let mut points = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if let Some(densify) = fields.densify {
            points.extend(densify.points(geometry(record, index)?)?);
            continue;
        }
        if let Some(xy) = &fields.xy {
            let (x, y) = xy_from_fields(record, index, xy)?;
            points.push(ReferencePoint::new(x, y));
            continue;
        }
        match geometry(record, index)? {
            Geometry::Point(p) => points.push(ReferencePoint::from(*p)),
            Geometry::MultiPoint(mp) => points.extend(mp.0.iter().map(|p| ReferencePoint::from(*p))),
            other => {
                return Err(Error::UnsupportedGeometry {
                    expected: "Point or MultiPoint",
                    found: geometry_name(other),
                })
            }
        }
    }
    Ok(points)
}

pub fn load_observed(
    records: &[Record],
    fields: &ObservedFields,
) -> Result<Vec<ObservedPoint>, Error> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut points = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let key = match record.properties.get(&fields.key) {
            None => return Err(Error::field_missing(&fields.key, origin(index))),
            Some(v) => key_value(v).ok_or_else(|| Error::InvalidFieldValue {
                field: fields.key.clone(),
                reason: format!("holds {} in {}, expected a string", v, origin(index)),
            })?,
        };
        if !seen.insert(key.clone()) {
            return Err(Error::DuplicateKey(key));
        }
        let (x, y) = match &fields.xy {
            Some(xy) => xy_from_fields(record, index, xy)?,
            None => point_geometry(record, index)?,
        };
        points.push(ObservedPoint::new(x, y, key));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use crate::geonear::densify::Densify;
    use crate::geonear::entity::Record;
    use crate::geonear::error::Error;
    use crate::geonear::point::{ObservedPoint, ReferencePoint};
    use crate::geonear::store::{
        load_observed, load_reference, ObservedFields, ReferenceFields, XYFields,
    };
    use geo_types::{Geometry, LineString, MultiPoint, Point};
    use serde_json::json;

    fn record(geom: Option<Geometry<f64>>, props: serde_json::Value) -> Record {
        match props {
            serde_json::Value::Object(map) => Record::new(geom, map),
            _ => panic!("properties must be an object"),
        }
    }

    fn pt(x: f64, y: f64) -> Option<Geometry<f64>> {
        Some(Geometry::Point(Point::new(x, y)))
    }

    fn by_key() -> ObservedFields {
        ObservedFields {
            xy: None,
            key: "Key".to_string(),
        }
    }

    #[test]
    fn reference_from_geometry() {
        let records = vec![
            record(pt(1.0, 2.0), json!({})),
            record(
                Some(Geometry::MultiPoint(MultiPoint(vec![Point::new(3.0, 4.0), Point::new(5.0, 6.0)]))),
                json!({}),
            ),
        ];
        let fields = ReferenceFields { xy: None, densify: None };
        assert_eq!(
            vec![
                ReferencePoint::new(1.0, 2.0),
                ReferencePoint::new(3.0, 4.0),
                ReferencePoint::new(5.0, 6.0),
            ],
            load_reference(&records, &fields).unwrap()
        );
    }

    #[test]
    fn reference_from_xy_fields() {
        let records = vec![record(None, json!({"POINT_X": 10.5, "POINT_Y": -2}))];
        let fields = ReferenceFields {
            xy: Some(XYFields::new("POINT_X", "POINT_Y")),
            densify: None,
        };
        assert_eq!(
            vec![ReferencePoint::new(10.5, -2.0)],
            load_reference(&records, &fields).unwrap()
        );
    }

    #[test]
    fn reference_missing_xy_field() {
        let records = vec![record(None, json!({"POINT_X": 1.0}))];
        let fields = ReferenceFields {
            xy: Some(XYFields::new("POINT_X", "POINT_Y")),
            densify: None,
        };
        match load_reference(&records, &fields) {
            Err(Error::FieldMissing { field, .. }) => assert_eq!("POINT_Y", field),
            other => panic!("expected FieldMissing, got {:?}", other),
        }
    }

    #[test]
    fn reference_non_numeric_field() {
        let records = vec![record(None, json!({"POINT_X": "1", "POINT_Y": 2}))];
        let fields = ReferenceFields {
            xy: Some(XYFields::new("POINT_X", "POINT_Y")),
            densify: None,
        };
        match load_reference(&records, &fields) {
            Err(Error::InvalidFieldValue { field, .. }) => assert_eq!("POINT_X", field),
            other => panic!("expected InvalidFieldValue, got {:?}", other),
        }
    }

    #[test]
    fn reference_densified_lines() {
        let line: LineString<f64> = vec![(0.0, 0.0), (0.0, 4.0)].into();
        let records = vec![record(Some(Geometry::LineString(line)), json!({}))];
        let fields = ReferenceFields {
            xy: None,
            densify: Some(Densify::new(2.0, false).unwrap()),
        };
        assert_eq!(
            vec![
                ReferencePoint::new(0.0, 0.0),
                ReferencePoint::new(0.0, 2.0),
                ReferencePoint::new(0.0, 4.0),
            ],
            load_reference(&records, &fields).unwrap()
        );
    }

    #[test]
    fn reference_rejects_lines_without_densify() {
        let line: LineString<f64> = vec![(0.0, 0.0), (0.0, 4.0)].into();
        let records = vec![record(Some(Geometry::LineString(line)), json!({}))];
        let fields = ReferenceFields { xy: None, densify: None };
        match load_reference(&records, &fields) {
            Err(Error::UnsupportedGeometry { found, .. }) => assert_eq!("LineString", found),
            other => panic!("expected UnsupportedGeometry, got {:?}", other),
        }
    }

    #[test]
    fn observed_keys() {
        let records = vec![
            record(pt(1.0, 2.0), json!({"Key": "A"})),
            record(pt(3.0, 4.0), json!({"Key": 17})),
        ];
        assert_eq!(
            vec![ObservedPoint::new(1.0, 2.0, "A"), ObservedPoint::new(3.0, 4.0, "17")],
            load_observed(&records, &by_key()).unwrap()
        );
    }

    #[test]
    fn observed_missing_key() {
        let records = vec![record(pt(1.0, 2.0), json!({"key": "A"}))];
        match load_observed(&records, &by_key()) {
            Err(Error::FieldMissing { field, origin }) => {
                assert_eq!("Key", field);
                assert_eq!("record 0", origin);
            }
            other => panic!("expected FieldMissing, got {:?}", other),
        }
    }

    #[test]
    fn observed_without_geometry() {
        let records = vec![record(None, json!({"Key": "A"}))];
        match load_observed(&records, &by_key()) {
            Err(Error::FieldMissing { field, .. }) => assert_eq!("geometry", field),
            other => panic!("expected FieldMissing, got {:?}", other),
        }
    }

    #[test]
    fn observed_duplicate_key() {
        let records = vec![
            record(pt(1.0, 2.0), json!({"Key": "A"})),
            record(pt(3.0, 4.0), json!({"Key": "A"})),
        ];
        match load_observed(&records, &by_key()) {
            Err(Error::DuplicateKey(k)) => assert_eq!("A", k),
            other => panic!("expected DuplicateKey, got {:?}", other),
        }
    }

    #[test]
    fn observed_from_xy_fields() {
        let records = vec![record(pt(0.0, 0.0), json!({"Key": "A", "X": 5, "Y": 6}))];
        let fields = ObservedFields {
            xy: Some(XYFields::new("X", "Y")),
            key: "Key".to_string(),
        };
        assert_eq!(
            vec![ObservedPoint::new(5.0, 6.0, "A")],
            load_observed(&records, &fields).unwrap()
        );
    }
}
