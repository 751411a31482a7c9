// Domain layer: service models, reference catalogs and ports (interfaces).

pub mod catalog;
pub mod model;
pub mod ports;
