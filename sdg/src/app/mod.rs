mod scotland_app;

pub use scotland_app::{run, select_authorities, ScotlandApp};
