mod output_normalizer;

pub use output_normalizer::OutputNormalizer;
