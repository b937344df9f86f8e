use geo::algorithm::euclidean_distance::EuclideanDistance;
use geo_types::Point;

/// One location of the known dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub x: f64,
    pub y: f64,
}

impl ReferencePoint {
    pub fn new(x: f64, y: f64) -> ReferencePoint {
        ReferencePoint { x, y }
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

impl From<Point<f64>> for ReferencePoint {
    fn from(p: Point<f64>) -> Self {
        ReferencePoint::new(p.x(), p.y())
    }
}

/// One location whose nearest reference distance gets measured.
/// `distance` stays `None` until the engine has scanned the reference set.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedPoint {
    pub x: f64,
    pub y: f64,
    pub key: String,
    pub distance: Option<f64>,
}

impl ObservedPoint {
    pub fn new<K: Into<String>>(x: f64, y: f64, key: K) -> ObservedPoint {
        ObservedPoint {
            x,
            y,
            key: key.into(),
            distance: None,
        }
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }

    pub fn distance_to(&self, r: &ReferencePoint) -> f64 {
        self.point().euclidean_distance(&r.point())
    }
}

#[cfg(test)]
mod tests {
    use crate::geonear::point::{ObservedPoint, ReferencePoint};

    #[test]
    fn test_distance_to() {
        let p = ObservedPoint::new(0.0, 3.0, "a");
        assert_eq!(3.0, p.distance_to(&ReferencePoint::new(0.0, 0.0)));
        assert_eq!(5.0, p.distance_to(&ReferencePoint::new(4.0, 0.0)));
    }

    #[test]
    fn test_new_observed_has_no_distance() {
        let p = ObservedPoint::new(1.0, 2.0, String::from("k"));
        assert_eq!(None, p.distance);
        assert_eq!("k", p.key);
    }
}
