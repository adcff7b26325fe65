mod inputs_config;
mod policy;
mod sdg_config;

pub use inputs_config::{
    resolve, AgeInput, BoundaryInput, CentroidInput, DisabilityInput, InputsConfig, LookupInput,
    PopulationInput, StopsInput, UrbanRuralInput,
};
pub use policy::{EmptyAuthorityPolicy, OutputLayout};
pub use sdg_config::SdgConfig;
