// Domain layer: entity, transport structure and the capability traits each role talks through.

pub mod model;
pub mod ports;
