use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// coordinate reference system tag carried by each geometry set. no
/// reprojection happens anywhere, the tag only exists so that mismatched
/// inputs are caught before containment tests run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Crs {
    Epsg(u32),
    Unknown,
}

pub const BRITISH_NATIONAL_GRID: Crs = Crs::Epsg(27700);
pub const WGS84: Crs = Crs::Epsg(4326);

impl Crs {
    /// guesses the crs from the WKT found in a shapefile's .prj sidecar.
    /// only the systems this pipeline reads are recognized.
    pub fn from_prj(wkt: &str) -> Crs {
        let upper = wkt.to_uppercase();
        if upper.contains("BRITISH_NATIONAL_GRID")
            || upper.contains("OSGB_1936")
            || upper.contains("OSGB36")
            || upper.contains("OSGB 1936")
        {
            BRITISH_NATIONAL_GRID
        } else if upper.starts_with("GEOGCS") && upper.contains("WGS_1984") {
            WGS84
        } else {
            Crs::Unknown
        }
    }

    /// two tags conflict only when both are known and different
    pub fn conflicts_with(&self, other: &Crs) -> bool {
        match (self, other) {
            (Crs::Epsg(a), Crs::Epsg(b)) => a != b,
            _ => false,
        }
    }
}

impl FromStr for Crs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("unknown") {
            return Ok(Crs::Unknown);
        }
        let code = match trimmed.split_once(':') {
            Some((authority, code)) if authority.eq_ignore_ascii_case("epsg") => code,
            Some((authority, _)) => {
                return Err(format!("unsupported crs authority '{authority}' in '{s}'"))
            }
            None => trimmed,
        };
        code.trim()
            .parse::<u32>()
            .map(Crs::Epsg)
            .map_err(|e| format!("invalid EPSG code in '{s}': {e}"))
    }
}

impl TryFrom<String> for Crs {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Crs::from_str(&value)
    }
}

impl From<Crs> for String {
    fn from(value: Crs) -> Self {
        value.to_string()
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Crs::Epsg(code) => write!(f, "EPSG:{code}"),
            Crs::Unknown => write!(f, "unknown"),
        }
    }
}
