use geo::{coord, MultiPolygon, Rect};
use indexmap::IndexMap;
use sdg::aggregation::{aggregate_authorities, AggregationSettings, AuthorityResult};
use sdg::config::{
    AgeInput, DisabilityInput, EmptyAuthorityPolicy, LookupInput, PopulationInput, StopsInput,
    UrbanRuralInput,
};
use sdg::geometry::{find_points_in_poly, CatchmentRadii, ServiceArea};
use sdg::join::{build_output_areas, dedup_by_code, JoinTables};
use sdg::loader;
use sdg::model::{filter_active, AgeBands, Category, LocalAuthority};
use sdg::output::{reshape_long, Series};
use std::collections::HashMap;

const STOPS: &str = "\
ATCOCode,Easting,Northing,StopType,Status
F1,1000,1000,BCT,active
F2,3000,1000,BCT,active
F3,9000,9000,BCT,inactive
S1,21000,1000,RLY,active
";

// output areas on a 1 km grid; FA05 sits exactly 500 m from F1
const POPULATION: &str = "\
,All people,Males,Females
FA01,100,48,52
FA02,50,25,25
FA03,80,40,40
FA04,35,17,18
FA05,12,6,6
ST01,60,30,30
ST02,40,20,20
ST03,75,37,38
";

const LOOKUP: &str = "\
pcds,oa11cd,ladnm
FK1 1AA,FA01,Falkirk
FK1 1AB,FA01,Falkirk
FK1 1AC,FA02,Falkirk
FK1 1AD,FA03,Falkirk
FK1 1AE,FA04,Falkirk
FK1 1AF,FA05,Falkirk
FK8 1AA,ST01,Stirling
FK8 1AB,ST02,Stirling
FK8 1AC,ST03,Stirling
";

const URBAN_RURAL: &str = "\
OA2011,UR2FOLD
FA01,1
FA02,2
FA03,1
FA04,2
FA05,1
ST01,1
ST02,2
ST03,2
";

const DISABILITY: &str = "\
,All people,Day-to-day activities limited a lot,Day-to-day activities limited a little
FA01,100,10,10
FA02,50,5,0
FA03,80,3,4
FA04,35,10,5
FA05,12,0,1
ST01,60,6,6
ST02,40,20,0
ST03,75,0,0
";

const AGE: &str = "\
,All people,Under 1,1,2,3 and over
FA01,100,10,20,30,40
FA02,50,0,0,25,25
FA03,80,20,20,20,20
FA04,35,35,0,0,0
FA05,12,3,3,3,3
ST01,60,10,10,10,30
ST02,40,0,0,0,40
ST03,75,15,15,15,30
";

fn centroids() -> HashMap<String, geo::Point<f64>> {
    [
        ("FA01", 1200.0, 1000.0),
        ("FA02", 6000.0, 6000.0),
        ("FA03", 3100.0, 1100.0),
        ("FA04", 7000.0, 2000.0),
        ("FA05", 1000.0, 1500.0),
        ("ST01", 21300.0, 1000.0),
        ("ST02", 28000.0, 8000.0),
        ("ST03", 21000.0, 1400.0),
    ]
    .into_iter()
    .map(|(code, x, y)| (code.to_string(), geo::Point::new(x, y)))
    .collect()
}

fn authorities() -> Vec<LocalAuthority> {
    [("Falkirk", 0.0), ("Stirling", 20_000.0)]
        .into_iter()
        .map(|(name, min_x)| {
            let rect = Rect::new(coord! { x: min_x, y: 0.0 }, coord! { x: min_x + 10_000.0, y: 10_000.0 });
            LocalAuthority::new(name.to_string(), String::from("S12"), MultiPolygon::new(vec![rect.to_polygon()]))
        })
        .collect()
}

fn age_bands() -> AgeBands {
    AgeBands::new(&[0, 2]).expect("valid bands")
}

fn tables() -> JoinTables {
    JoinTables {
        population: loader::parse_population(POPULATION.as_bytes(), "population", &PopulationInput::default())
            .expect("population"),
        centroids: centroids(),
        oa_lookup: loader::parse_oa_lookup(LOOKUP.as_bytes(), "lookup", &LookupInput::default()).expect("lookup"),
        urban_rural: Some(
            loader::parse_urban_rural(URBAN_RURAL.as_bytes(), "ur", &UrbanRuralInput::default())
                .expect("urban rural"),
        ),
        disability: Some(
            loader::parse_disability(DISABILITY.as_bytes(), "disability", &DisabilityInput::default())
                .expect("disability"),
        ),
        age: Some(loader::parse_age(AGE.as_bytes(), "age", &AgeInput::default(), &age_bands()).expect("age")),
    }
}

fn settings() -> AggregationSettings {
    AggregationSettings::new(
        CatchmentRadii::new(500.0, None),
        age_bands(),
        true,
        true,
        true,
        EmptyAuthorityPolicy::Skip,
    )
}

fn run(stops_csv: &str) -> IndexMap<String, AuthorityResult> {
    let stops = filter_active(loader::parse_stops(stops_csv.as_bytes(), "stops", &StopsInput::default()).expect("stops"));
    let (output_areas, _) = build_output_areas(&tables());
    aggregate_authorities(&authorities(), &stops, &output_areas, &settings(), false).expect("aggregation")
}

#[test]
fn test_served_plus_unserved_is_total() {
    for result in run(STOPS).values() {
        for rows in result.blocks.values() {
            for row in rows {
                assert_eq!(row.served + row.unserved, row.total, "{row:?}");
            }
        }
    }
}

#[test]
fn test_categories_cover_authority_population() {
    for result in run(STOPS).values() {
        let total = result.total().expect("total row");
        for category in Category::OUTPUT_ORDER {
            let rows = result.block(category).expect("every category produced");
            assert_eq!(rows.iter().map(|r| r.total).sum::<u64>(), total.total, "{category}");
            assert_eq!(rows.iter().map(|r| r.served).sum::<u64>(), total.served, "{category}");
        }
    }
}

#[test]
fn test_sex_breakdown_matches_total_when_columns_disagree() {
    let population = POPULATION.replace("FA01,100,48,52", "FA01,100,40,50");
    let tables = JoinTables {
        population: loader::parse_population(population.as_bytes(), "population", &PopulationInput::default())
            .expect("population"),
        centroids: centroids(),
        oa_lookup: loader::parse_oa_lookup(LOOKUP.as_bytes(), "lookup", &LookupInput::default()).expect("lookup"),
        ..Default::default()
    };
    let stops = filter_active(loader::parse_stops(STOPS.as_bytes(), "stops", &StopsInput::default()).expect("stops"));
    let (output_areas, _) = build_output_areas(&tables);
    let settings = AggregationSettings::new(
        CatchmentRadii::new(500.0, None),
        age_bands(),
        false,
        false,
        false,
        EmptyAuthorityPolicy::Skip,
    );
    let results = aggregate_authorities(&authorities(), &stops, &output_areas, &settings, false).expect("aggregation");
    let falkirk = &results["Falkirk"];
    let total = falkirk.total().expect("total row");
    let sex = falkirk.block(Category::Sex).expect("sex block");
    assert_eq!(sex.iter().map(|r| r.total).sum::<u64>(), total.total);
    assert_eq!(sex.iter().map(|r| r.served).sum::<u64>(), total.served);
}

#[test]
fn test_percentages_sum_to_one_hundred() {
    for result in run(STOPS).values() {
        for row in result.blocks.values().flatten().filter(|r| r.total > 0) {
            let served: f64 = row.pct_served.as_deref().expect("pct served").parse().expect("number");
            let unserved: f64 = row.pct_unserved.as_deref().expect("pct unserved").parse().expect("number");
            assert!((served + unserved - 100.0).abs() <= 0.01, "{row:?}");
        }
    }
}

#[test]
fn test_expected_served_population() {
    let results = run(STOPS);
    // FA01 near F1, FA03 near F2, FA05 on the edge of F1's catchment
    let falkirk = results["Falkirk"].total().expect("total row");
    assert_eq!((falkirk.total, falkirk.served, falkirk.unserved), (277, 192, 85));
    // ST01 and ST03 are near the station
    let stirling = results["Stirling"].total().expect("total row");
    assert_eq!((stirling.total, stirling.served), (175, 135));

    let urban_rural = results["Falkirk"].block(Category::UrbanRural).expect("urban rural");
    assert_eq!(urban_rural[0].value, "urban");
    assert_eq!((urban_rural[0].total, urban_rural[0].served), (192, 192));
    assert_eq!((urban_rural[1].total, urban_rural[1].served), (85, 0));
    assert_eq!(urban_rural[1].pct_served.as_deref(), Some("0.00"));
}

#[test]
fn test_stop_order_does_not_change_results() {
    let mut lines = STOPS.lines().collect::<Vec<_>>();
    let header = lines.remove(0);
    lines.reverse();
    let reversed = std::iter::once(header).chain(lines).collect::<Vec<_>>().join("\n");
    assert_eq!(run(STOPS), run(&reversed));
}

#[test]
fn test_dedup_is_idempotent_after_containment() {
    let (output_areas, _) = build_output_areas(&tables());
    let stops = filter_active(loader::parse_stops(STOPS.as_bytes(), "stops", &StopsInput::default()).expect("stops"));
    let radii = CatchmentRadii::new(500.0, None);
    let catchments = stops.iter().map(|s| radii.catchment(s)).collect::<Vec<_>>();
    let service_area = ServiceArea::new(&catchments);
    let doubled = output_areas.iter().chain(output_areas.iter()).collect::<Vec<_>>();
    let served = dedup_by_code(find_points_in_poly(doubled.iter().copied(), &service_area));
    let again = dedup_by_code(find_points_in_poly(served.iter().copied(), &service_area));
    assert_eq!(served, again);
    assert_eq!(served.len(), 5);
}

#[test]
fn test_long_output_has_five_series_per_row() {
    let results = run(STOPS);
    let rows = reshape_long(&results, "2011");
    let n_result_rows = results.values().flat_map(|r| r.blocks.values().flatten()).count();
    assert_eq!(rows.len(), n_result_rows * Series::ALL.len());
    let first = &rows[0];
    assert_eq!(first.local_authority, "Falkirk");
    assert_eq!(first.series, "Total population");
    assert!(first.sex.is_none() && first.age.is_none() && first.disability_status.is_none());
}
