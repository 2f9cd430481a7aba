// Domain layer: core models, unit profiles and ports (interfaces).

pub mod model;
pub mod ports;
pub mod profile;
