// Domain layer: models handed to callers and the ports the service depends on.

pub mod model;
pub mod ports;
