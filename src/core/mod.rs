pub mod calculator;
pub mod grid;
pub mod ingest;
pub mod logic;
