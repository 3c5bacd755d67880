pub mod dataset_parser;
pub mod highlight;

pub use dataset_parser::parse_dataset;
pub use highlight::{Segment, highlight_segments, strip_markers};
