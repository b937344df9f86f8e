use crate::geonear::{
    entity::{self, Record},
    error::Error,
    reader::Reader,
};
use dbase::FieldValue;
use geo_types::{Coordinate, Geometry, LineString, MultiLineString, MultiPoint, Point};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where a point collection is read from. The variant is picked from the
/// path: `.shp` files are shapefiles, `.geojson`/`.json` files hold a single
/// GeoJSON document, `-` is stdin and anything else is read line by line.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Shapefile(PathBuf),
    GeoJson(PathBuf),
    Lines(PathBuf),
    Stdin,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Source::Shapefile(ref p) => write!(f, "shapefile {}", p.display()),
            Source::GeoJson(ref p) => write!(f, "GeoJSON {}", p.display()),
            Source::Lines(ref p) => write!(f, "{}", p.display()),
            Source::Stdin => write!(f, "stdin"),
        }
    }
}

impl Source {
    pub fn from_path(path: &str) -> Source {
        if path == "-" {
            return Source::Stdin;
        }
        let buf = PathBuf::from(path);
        let ext = buf
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("shp") => Source::Shapefile(buf),
            Some("geojson") | Some("json") => Source::GeoJson(buf),
            _ => Source::Lines(buf),
        }
    }

    pub fn load(&self) -> Result<Vec<Record>, Error> {
        match *self {
            Source::Shapefile(ref path) => load_shapefile(path),
            Source::GeoJson(ref path) => {
                let raw = fs::read_to_string(path).map_err(|e| Error::unavailable(self, e))?;
                entity::geojson_records(entity::parse_geojson(&raw)?)
            }
            Source::Lines(ref path) => {
                let file = File::open(path).map_err(|e| Error::unavailable(self, e))?;
                let mut buf = BufReader::new(file);
                load_lines(&mut buf, self)
            }
            Source::Stdin => {
                let stdin = io::stdin();
                let mut stdin_reader = stdin.lock();
                load_lines(&mut stdin_reader, self)
            }
        }
    }
}

pub fn load_lines(buf_read: &mut dyn BufRead, source: &Source) -> Result<Vec<Record>, Error> {
    let mut records = Vec::new();
    for input in Reader::new(buf_read) {
        let input = input.map_err(|e| Error::unavailable(source, e))?;
        records.extend(entity::from_input(&input)?);
    }
    Ok(records)
}

fn record_to_json(record: dbase::Record) -> Map<String, Value> {
    let mut json = Map::new();
    for (name, value) in record.into_iter() {
        let value = match value {
            FieldValue::Character(Some(string)) => Value::String(string),
            FieldValue::Numeric(Some(num)) => number(num),
            FieldValue::Float(Some(num)) => number(f64::from(num)),
            FieldValue::Double(num) => number(num),
            FieldValue::Currency(num) => number(num),
            FieldValue::Integer(num) => Value::from(num),
            FieldValue::Logical(Some(b)) => Value::Bool(b),
            _ => continue,
        };
        json.insert(name, value);
    }
    json
}

fn number(num: f64) -> Value {
    Number::from_f64(num).map(Value::Number).unwrap_or(Value::Null)
}

trait Planar {
    fn coord(&self) -> Coordinate<f64>;
}

impl Planar for shapefile::Point {
    fn coord(&self) -> Coordinate<f64> {
        Coordinate::from((self.x, self.y))
    }
}
impl Planar for shapefile::PointM {
    fn coord(&self) -> Coordinate<f64> {
        Coordinate::from((self.x, self.y))
    }
}
impl Planar for shapefile::PointZ {
    fn coord(&self) -> Coordinate<f64> {
        Coordinate::from((self.x, self.y))
    }
}

fn point<P: Planar>(p: &P) -> Geometry<f64> {
    Geometry::Point(Point(p.coord()))
}

fn multipoint<P: Planar>(points: &[P]) -> Geometry<f64> {
    Geometry::MultiPoint(MultiPoint(points.iter().map(|p| Point(p.coord())).collect()))
}

fn polyline<P: Planar>(parts: &[Vec<P>]) -> Geometry<f64> {
    let lines = parts
        .iter()
        .map(|part| LineString(part.iter().map(|p| p.coord()).collect()))
        .collect();
    Geometry::MultiLineString(MultiLineString(lines))
}

fn shp_to_geom(shape: shapefile::Shape) -> Result<Option<Geometry<f64>>, Error> {
    let geom = match shape {
        shapefile::Shape::NullShape => return Ok(None),
        shapefile::Shape::Point(g) => point(&g),
        shapefile::Shape::PointM(g) => point(&g),
        shapefile::Shape::PointZ(g) => point(&g),
        shapefile::Shape::Multipoint(g) => multipoint(g.points()),
        shapefile::Shape::MultipointM(g) => multipoint(g.points()),
        shapefile::Shape::MultipointZ(g) => multipoint(g.points()),
        shapefile::Shape::Polyline(g) => polyline(g.parts()),
        shapefile::Shape::PolylineM(g) => polyline(g.parts()),
        shapefile::Shape::PolylineZ(g) => polyline(g.parts()),
        _ => {
            return Err(Error::UnsupportedGeometry {
                expected: "point or polyline shapes",
                found: "polygon shape",
            })
        }
    };
    Ok(Some(geom))
}

fn load_shapefile(path: &Path) -> Result<Vec<Record>, Error> {
    let origin = path.display().to_string();
    let mut reader =
        shapefile::Reader::from_path(path).map_err(|e| Error::unavailable(&origin, e))?;
    let mut records = Vec::new();
    for shape_record in reader.iter_shapes_and_records() {
        let (shape, record) = shape_record.map_err(|e| Error::unavailable(&origin, e))?;
        records.push(Record::new(shp_to_geom(shape)?, record_to_json(record)));
    }
    Ok(records)
}
