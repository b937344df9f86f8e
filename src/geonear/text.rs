pub const MAIN_AFTER_HELP: &str = r#"
Sources are picked by file extension:

  .shp              ESRI shapefile (attributes from the matching .dbf)
  .geojson, .json   a single GeoJSON document
  -                 line-delimited entities on STDIN
  anything else     line-delimited entities: Lat,Lon / WKT / GeoJSON

Set RUST_LOG=info to follow progress.
"#;

pub const DISTANCE_ABOUT: &str =
    "Measure the distance from each observed point to its nearest reference point";

pub const DISTANCE_AFTER_HELP: &str = r#"
Every observed point gets the euclidean distance to the closest point of the
reference dataset, written into the distance field of the observed record
with the same key. Both datasets must already share a planar coordinate
system; distances are in its units.

Observed keys must be unique. Records are printed to STDOUT as GeoJSON
Features, one per line, unless --output is given.

Examples:

$ geonear distance hydrants.shp photos.geojson --output photos_measured.geojson
$ geonear distance mains.geojson photos.ndjson --lines --spacing 10 --key Key
"#;

pub const DENSIFY_ABOUT: &str = "Generate points at a fixed spacing along line features";

pub const DENSIFY_AFTER_HELP: &str = r#"
Points start at the first vertex of every line part and continue every
--spacing units. Each point keeps the attributes of its line.

Example:

$ echo 'LINESTRING (0 0, 8 0)' | geonear densify - --spacing 3
  {"geometry":{"coordinates":[0.0,0.0],"type":"Point"},"properties":{},"type":"Feature"}
  {"geometry":{"coordinates":[3.0,0.0],"type":"Point"},"properties":{},"type":"Feature"}
  {"geometry":{"coordinates":[6.0,0.0],"type":"Point"},"properties":{},"type":"Feature"}
"#;

pub const EXTRACT_ABOUT: &str =
    "Trim photo detection features to their key and one object class";

pub const EXTRACT_AFTER_HELP: &str = r#"
Reads a GeoJSON FeatureCollection of photo detections and prints one point
Feature per detection, keeping only the photo key and the value of the
requested object class.

Example:

$ geonear extract detections.geojson --object-key object--fire-hydrant --field Hydrant
  {"geometry":{"coordinates":[-122.3,47.6],"type":"Point"},"properties":{"Hydrant":0.031,"Key":"abc"},"type":"Feature"}
"#;
