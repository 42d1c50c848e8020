// Domain layer: board, agent and the ports the simulation talks through.

pub mod model;
pub mod ports;
