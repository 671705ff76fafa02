// Domain layer: core models and ports (interfaces). No external dependencies beyond std/serde/image.

pub mod model;
pub mod ports;
