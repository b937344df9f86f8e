use crate::geonear::{entity::geometry_name, error::Error, point::ReferencePoint};
use geo::algorithm::euclidean_length::EuclideanLength;
use geo_types::{Geometry, LineString};

/// Upper bound on the points generated for one feature.
const MAX_POINTS: f64 = 10_000_000.0;

/// Spacing for turning line geometries into reference points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Densify {
    pub spacing: f64,
    pub include_end: bool,
}

impl Densify {
    pub fn new(spacing: f64, include_end: bool) -> Result<Densify, Error> {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(Error::InvalidSpacing {
                spacing,
                reason: "spacing must be a positive number",
            });
        }
        Ok(Densify {
            spacing,
            include_end,
        })
    }

    /// Points every `spacing` units along each part of a linear geometry,
    /// starting at the first vertex of the part.
    pub fn points(&self, geom: &Geometry<f64>) -> Result<Vec<ReferencePoint>, Error> {
        let parts = match *geom {
            Geometry::Line(ref l) => vec![LineString::from(vec![l.start, l.end])],
            Geometry::LineString(ref ls) => vec![ls.clone()],
            Geometry::MultiLineString(ref mls) => mls.0.clone(),
            ref other => {
                return Err(Error::UnsupportedGeometry {
                    expected: "Line, LineString or MultiLineString",
                    found: geometry_name(other),
                })
            }
        };

        let length: f64 = parts.iter().map(|ls| ls.euclidean_length()).sum();
        if length / self.spacing > MAX_POINTS {
            return Err(Error::InvalidSpacing {
                spacing: self.spacing,
                reason: "spacing is too small for a feature this long",
            });
        }

        let mut out = Vec::new();
        for ls in parts.iter() {
            self.along(ls, &mut out);
        }
        Ok(out)
    }

    fn along(&self, ls: &LineString<f64>, out: &mut Vec<ReferencePoint>) {
        let first = match ls.0.first() {
            Some(c) => c,
            None => return,
        };
        out.push(ReferencePoint::new(first.x, first.y));

        // Distances are k * spacing rather than a running sum so long lines
        // don't accumulate drift.
        let mut k: u64 = 1;
        let mut walked = 0.0;
        for line in ls.lines() {
            let len = line.euclidean_length();
            if len == 0.0 {
                continue;
            }
            loop {
                let target = k as f64 * self.spacing;
                if target > walked + len {
                    break;
                }
                let t = (target - walked) / len;
                out.push(ReferencePoint::new(
                    line.start.x + t * line.dx(),
                    line.start.y + t * line.dy(),
                ));
                k += 1;
            }
            walked += len;
        }

        if self.include_end {
            if let Some(last) = ls.0.last() {
                let end = ReferencePoint::new(last.x, last.y);
                if out.last() != Some(&end) {
                    out.push(end);
                }
            }
        }
    }
}
