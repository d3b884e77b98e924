mod export;
mod profile;
mod summary;


pub use export::{clustered_csv, write_clustered_csv, ExportError};
pub use profile::{cluster_profiles, member_means, ClusterProfile};
pub use summary::{Separation, Summary};
