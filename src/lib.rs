#[allow(non_snake_case)]
pub mod BoundaryLayer;
#[allow(non_snake_case)]
pub mod Utils;
