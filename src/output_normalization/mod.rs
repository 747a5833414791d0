/// Output normalization domain
///
/// Pure business logic that rewrites stack level and resource level
/// `Outputs` declarations into the canonical CloudFormation shape.
/// Nothing in this module performs I/O.
pub mod domain;
pub mod services;
