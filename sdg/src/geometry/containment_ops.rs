use super::ServiceArea;
use crate::model::{LocalAuthority, OutputArea, Stop};
use geo::{Intersects, MultiPolygon, Point};

/// a record with an optional point location
pub trait Located {
    fn location(&self) -> Option<Point<f64>>;
}

impl Located for Stop {
    fn location(&self) -> Option<Point<f64>> {
        Some(self.point)
    }
}

impl Located for OutputArea {
    fn location(&self) -> Option<Point<f64>> {
        self.centroid
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> Option<Point<f64>> {
        (**self).location()
    }
}

/// an area points can be tested against
pub trait ReferenceArea {
    /// true when the point intersects the area, boundary included
    fn covers(&self, point: &Point<f64>) -> bool;
}

impl ReferenceArea for MultiPolygon<f64> {
    fn covers(&self, point: &Point<f64>) -> bool {
        self.intersects(point)
    }
}

impl ReferenceArea for LocalAuthority {
    fn covers(&self, point: &Point<f64>) -> bool {
        self.area.intersects(point)
    }
}

impl ReferenceArea for ServiceArea {
    fn covers(&self, point: &Point<f64>) -> bool {
        ServiceArea::covers(self, point)
    }
}

/// keeps the records whose point intersects the reference area. records
/// are returned whole and in input order; records without a location never
/// match.
pub fn find_points_in_poly<T, A>(records: impl IntoIterator<Item = T>, area: &A) -> Vec<T>
where
    T: Located,
    A: ReferenceArea + ?Sized,
{
    records
        .into_iter()
        .filter(|r| r.location().is_some_and(|p| area.covers(&p)))
        .collect()
}
