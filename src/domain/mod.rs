// Domain layer: request/response models and ports (interfaces). No transport or
// provider SDK types leak in here.

pub mod model;
pub mod ports;
