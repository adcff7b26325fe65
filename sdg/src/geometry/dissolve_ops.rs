use crate::model::{BoundaryRecord, LocalAuthority};
use geo::{BooleanOps, MultiPolygon};
use indexmap::IndexMap;

/// merges all boundary records that share an authority name into one
/// multipolygon per authority. authorities keep the order in which their
/// name first appears, and the code of that first record.
pub fn dissolve_by_name(records: Vec<BoundaryRecord>) -> Vec<LocalAuthority> {
    let n_records = records.len();
    let mut grouped: IndexMap<String, (String, Vec<MultiPolygon<f64>>)> = IndexMap::new();
    for record in records {
        grouped
            .entry(record.name)
            .or_insert_with(|| (record.code, vec![]))
            .1
            .push(record.area);
    }
    let authorities = grouped
        .into_iter()
        .map(|(name, (code, parts))| LocalAuthority::new(name, code, union_all(parts)))
        .collect::<Vec<_>>();
    log::info!(
        "dissolved {} boundary records into {} local authorities",
        n_records,
        authorities.len()
    );
    authorities
}

fn union_all(parts: Vec<MultiPolygon<f64>>) -> MultiPolygon<f64> {
    let mut iter = parts.into_iter();
    match iter.next() {
        None => MultiPolygon::new(vec![]),
        Some(first) => iter.fold(first, |acc, next| acc.union(&next)),
    }
}
