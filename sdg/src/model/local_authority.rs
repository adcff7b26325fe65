use geo::MultiPolygon;

/// a local authority with its boundary dissolved into one multipolygon
#[derive(Debug, Clone)]
pub struct LocalAuthority {
    pub name: String,
    pub code: String,
    pub area: MultiPolygon<f64>,
}

impl LocalAuthority {
    pub fn new(name: String, code: String, area: MultiPolygon<f64>) -> LocalAuthority {
        LocalAuthority { name, code, area }
    }

    /// the first character of the code identifies the country
    pub fn has_country_prefix(code: &str, prefix: &str) -> bool {
        code.starts_with(prefix)
    }
}

/// one polygon record of the boundary file, before dissolving by name
#[derive(Debug, Clone)]
pub struct BoundaryRecord {
    pub code: String,
    pub name: String,
    pub area: MultiPolygon<f64>,
}
