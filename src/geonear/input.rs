use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static LATLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+\.?\d*[,\t]\s*-?\d+\.?\d*$").unwrap());
static JSON: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{").unwrap());
static WKT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(point|linestring|polygon|multipoint|multilinestring|multipolygon)").unwrap()
});

/// A single line of a line-delimited source, classified by its shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    LatLon(String),
    WKT(String),
    GeoJSON(String),
    Unknown(String),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Input::LatLon(ref raw) => write!(f, "LatLon({})", raw),
            Input::WKT(ref raw) => write!(f, "WKT({})", raw),
            Input::GeoJSON(ref raw) => write!(f, "GeoJSON({})", raw),
            Input::Unknown(ref raw) => write!(f, "Unknown({})", raw),
        }
    }
}

pub fn read_line(line: &str) -> Input {
    let line = line.trim().to_string();
    if LATLON.is_match(&line) {
        Input::LatLon(line)
    } else if JSON.is_match(&line) {
        Input::GeoJSON(line)
    } else if WKT.is_match(&line) {
        Input::WKT(line)
    } else {
        Input::Unknown(line)
    }
}
