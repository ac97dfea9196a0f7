mod envelope;
mod error;
mod extractors;
