mod demo;
mod error;
mod features;
mod scaling;
mod table;

#[cfg(test)]
mod tests;

pub use demo::{demo_customers, DEMO_SEGMENT_SIZE};
pub use error::DatasetError;
pub use features::{build_feature_matrix, FeatureMatrix};
pub use scaling::{standardize, ScaleMode, Standardization};
pub use table::{Dataset, MAX_UPLOAD_ROWS};
