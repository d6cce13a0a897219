// Domain layer: the bundle model and the ports the handler depends on.

pub mod model;
pub mod ports;
