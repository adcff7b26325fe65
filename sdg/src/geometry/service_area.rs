use super::Catchment;
use geo::Point;
use rstar::primitives::GeomWithData;
use rstar::RTree;

type IndexedCatchment = GeomWithData<[f64; 2], f64>;

/// the union of a set of stop catchments. a point is covered when it lies in
/// at least one catchment, whichever stop that is.
pub struct ServiceArea {
    rtree: RTree<IndexedCatchment>,
    max_radius: f64,
}

impl ServiceArea {
    pub fn new(catchments: &[Catchment]) -> ServiceArea {
        let entries = catchments
            .iter()
            .map(|c| GeomWithData::new([c.centre.x(), c.centre.y()], c.radius))
            .collect::<Vec<_>>();
        let max_radius = catchments.iter().map(|c| c.radius).fold(0.0, f64::max);
        ServiceArea {
            rtree: RTree::bulk_load(entries),
            max_radius,
        }
    }

    /// candidate stops within the largest radius are found in the rtree and
    /// then tested against their own radius. the boundary is inclusive.
    pub fn covers(&self, point: &Point<f64>) -> bool {
        let query = [point.x(), point.y()];
        self.rtree
            .locate_within_distance(query, self.max_radius * self.max_radius)
            .any(|entry| {
                let centre = entry.geom();
                let dx = query[0] - centre[0];
                let dy = query[1] - centre[1];
                dx * dx + dy * dy <= entry.data * entry.data
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(catchments: &[(f64, f64, f64)]) -> ServiceArea {
        let catchments = catchments
            .iter()
            .map(|(x, y, r)| Catchment::new(Point::new(*x, *y), *r))
            .collect::<Vec<_>>();
        ServiceArea::new(&catchments)
    }

    #[test]
    fn test_union_of_catchments() {
        let service_area = area(&[(0.0, 0.0, 500.0), (2000.0, 0.0, 500.0)]);
        assert!(service_area.covers(&Point::new(100.0, 0.0)));
        assert!(service_area.covers(&Point::new(2400.0, 0.0)));
        assert!(!service_area.covers(&Point::new(1000.0, 0.0)));
    }

    #[test]
    fn test_mixed_radii_use_own_radius() {
        // the large catchment sets the search radius, the small one must
        // still be tested against its own
        let service_area = area(&[(0.0, 0.0, 100.0), (5000.0, 0.0, 1000.0)]);
        assert!(service_area.covers(&Point::new(100.0, 0.0)));
        assert!(!service_area.covers(&Point::new(150.0, 0.0)));
        assert!(service_area.covers(&Point::new(4000.0, 0.0)));
    }

    #[test]
    fn test_empty_covers_nothing() {
        let service_area = area(&[]);
        assert!(!service_area.covers(&Point::new(0.0, 0.0)));
    }
}
