/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe what the application core needs from
/// the outside world: reading templates, (de)serializing them, presenting
/// the result and reporting progress.
pub mod outbound;
