use crate::geonear::{error::Error, input::Input};
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::convert::TryInto;

static LATLON_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*|\t").unwrap());

/// One feature read from a source: an optional geometry plus its attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub geometry: Option<Geometry<f64>>,
    pub properties: Map<String, Value>,
}

impl Record {
    pub fn new(geometry: Option<Geometry<f64>>, properties: Map<String, Value>) -> Record {
        Record {
            geometry,
            properties,
        }
    }

    pub fn from_geometry(geometry: Geometry<f64>) -> Record {
        Record::new(Some(geometry), Map::new())
    }

    pub fn from_feature(feature: geojson::Feature) -> Result<Record, Error> {
        let geometry = match feature.geometry {
            Some(g) => Some(gj_to_geom(g)?),
            None => None,
        };
        Ok(Record::new(geometry, feature.properties.unwrap_or_default()))
    }

    pub fn geojson_feature(&self) -> geojson::Feature {
        geojson::Feature {
            bbox: None,
            geometry: self
                .geometry
                .as_ref()
                .map(|g| geojson::Geometry::new(geojson::Value::from(g))),
            id: None,
            properties: Some(self.properties.clone()),
            foreign_members: None,
        }
    }
}

pub fn geometry_name(geom: &Geometry<f64>) -> &'static str {
    match *geom {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
        #[allow(unreachable_patterns)]
        _ => "Geometry",
    }
}

fn gj_to_geom(gj: geojson::Geometry) -> Result<Geometry<f64>, Error> {
    let geom: Result<Geometry<f64>, _> = gj.value.try_into();
    geom.map_err(|e| Error::InvalidGeoJSON(e.to_string()))
}

fn parse_coord(raw: &str) -> Result<f64, Error> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumberFormat(raw.to_string()))
}

fn latlon_records(raw: &str) -> Result<Vec<Record>, Error> {
    let pieces = LATLON_SPLIT.split(raw).collect::<Vec<&str>>();
    if pieces.len() != 2 {
        return Err(Error::InvalidNumberFormat(raw.to_string()));
    }
    let lat = parse_coord(pieces[0])?;
    let lon = parse_coord(pieces[1])?;
    Ok(vec![Record::from_geometry(Geometry::Point(Point::new(lon, lat)))])
}

fn wkt_records(raw: &str) -> Result<Vec<Record>, Error> {
    let wkts: wkt::Wkt<f64> =
        wkt::Wkt::from_str(raw).map_err(|e| Error::InvalidWkt(e.to_string()))?;
    let mut records = Vec::new();
    for wkt_geom in wkts.items {
        let geom = wkt::conversion::try_into_geometry(&wkt_geom)
            .map_err(|_| Error::InvalidWkt(raw.to_string()))?;
        records.push(Record::from_geometry(geom));
    }
    Ok(records)
}

pub fn geojson_records(gj: GeoJson) -> Result<Vec<Record>, Error> {
    match gj {
        GeoJson::Geometry(gj_geom) => Ok(vec![Record::from_geometry(gj_to_geom(gj_geom)?)]),
        GeoJson::Feature(gj_feature) => Ok(vec![Record::from_feature(gj_feature)?]),
        GeoJson::FeatureCollection(gj_fc) => gj_fc
            .features
            .into_iter()
            .map(Record::from_feature)
            .collect(),
    }
}

pub fn parse_geojson(raw: &str) -> Result<GeoJson, Error> {
    raw.parse::<GeoJson>()
        .map_err(|e| Error::InvalidGeoJSON(e.to_string()))
}

pub fn from_input(i: &Input) -> Result<Vec<Record>, Error> {
    match i {
        Input::LatLon(raw) => latlon_records(raw),
        Input::WKT(raw) => wkt_records(raw),
        Input::GeoJSON(raw) => geojson_records(parse_geojson(raw)?),
        Input::Unknown(raw) => Err(Error::UnknownEntityFormat(raw.clone())),
    }
}
