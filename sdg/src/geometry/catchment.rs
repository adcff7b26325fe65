use crate::model::{Stop, StopCapacity};
use geo::{Coord, LineString, Point, Polygon};
use std::f64::consts::PI;

/// walking catchment of a stop: the closed disc of `radius` around `centre`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catchment {
    pub centre: Point<f64>,
    pub radius: f64,
}

impl Catchment {
    pub fn new(centre: Point<f64>, radius: f64) -> Catchment {
        Catchment { centre, radius }
    }

    /// true when the point is inside the disc or on its boundary
    pub fn contains(&self, point: &Point<f64>) -> bool {
        let dx = point.x() - self.centre.x();
        let dy = point.y() - self.centre.y();
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// regular polygon with `n_vertices` vertices on the circle, for export.
    /// containment tests use the exact disc.
    pub fn to_polygon(&self, n_vertices: usize) -> Polygon<f64> {
        let n = n_vertices.max(3);
        let ring = (0..=n)
            .map(|i| {
                let theta = 2.0 * PI * (i % n) as f64 / n as f64;
                Coord {
                    x: self.centre.x() + self.radius * theta.cos(),
                    y: self.centre.y() + self.radius * theta.sin(),
                }
            })
            .collect::<Vec<_>>();
        Polygon::new(LineString::from(ring), vec![])
    }
}

/// catchment radii in metres by stop capacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchmentRadii {
    pub default: f64,
    pub high_capacity: Option<f64>,
}

impl CatchmentRadii {
    pub fn new(default: f64, high_capacity: Option<f64>) -> CatchmentRadii {
        CatchmentRadii {
            default,
            high_capacity,
        }
    }

    pub fn for_stop(&self, stop: &Stop) -> f64 {
        match (stop.capacity, self.high_capacity) {
            (StopCapacity::High, Some(r)) => r,
            _ => self.default,
        }
    }

    pub fn catchment(&self, stop: &Stop) -> Catchment {
        Catchment::new(stop.point, self.for_stop(stop))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, Contains};

    #[test]
    fn test_boundary_is_inside() {
        let catchment = Catchment::new(Point::new(100.0, 100.0), 500.0);
        assert!(catchment.contains(&Point::new(600.0, 100.0)));
        assert!(catchment.contains(&Point::new(100.0, -400.0)));
        assert!(!catchment.contains(&Point::new(600.001, 100.0)));
        // 300-400-500 triangle lands exactly on the circle
        assert!(catchment.contains(&Point::new(400.0, 500.0)));
    }

    #[test]
    fn test_to_polygon_approximates_disc() {
        let catchment = Catchment::new(Point::new(0.0, 0.0), 500.0);
        let polygon = catchment.to_polygon(256);
        assert_eq!(polygon.exterior().0.len(), 257);
        assert!(polygon.exterior().is_closed());
        let disc_area = PI * 500.0 * 500.0;
        assert!((polygon.unsigned_area() - disc_area).abs() / disc_area < 0.001);
        assert!(polygon.contains(&Point::new(450.0, 0.0)));
    }

    #[test]
    fn test_high_capacity_radius() {
        let radii = CatchmentRadii::new(500.0, Some(800.0));
        let bus = Stop::new("bus".into(), 0.0, 0.0, true, StopCapacity::Low);
        let rail = Stop::new("rail".into(), 0.0, 0.0, true, StopCapacity::High);
        assert_eq!(radii.for_stop(&bus), 500.0);
        assert_eq!(radii.for_stop(&rail), 800.0);
        assert_eq!(CatchmentRadii::new(500.0, None).for_stop(&rail), 500.0);
    }
}
