pub mod aggregator;
pub mod build;
pub mod extractor;
pub mod frequency;
