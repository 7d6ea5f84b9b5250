pub mod classifier;
pub mod normalizer;
pub mod precheck;

pub use classifier::classify;
pub use normalizer::normalize;
pub use precheck::validate_upload;
