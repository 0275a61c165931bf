// Domain layer: topic document model and ports (interfaces) for sources and configuration.

pub mod model;
pub mod ports;
