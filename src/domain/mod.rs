// Domain layer: statistics models, salary arithmetic and the source ports.

pub mod model;
pub mod ports;
pub mod salary;
