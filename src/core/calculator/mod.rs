pub mod aggregator;
pub mod gaps;
pub mod segmenter;
