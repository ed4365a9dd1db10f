pub mod dataset_merger;
pub mod dataset_writer;
pub mod example_finder;

pub use dataset_merger::{merge, DatasetMerger};
pub use dataset_writer::{read_dataset, DatasetWriter};
pub use example_finder::{find_examples, topic_catalog, SubjectSummary};
