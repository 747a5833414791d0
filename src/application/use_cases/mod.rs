/// Use cases module containing application business logic orchestration
mod normalize_outputs;

pub use normalize_outputs::NormalizeOutputsUseCase;
