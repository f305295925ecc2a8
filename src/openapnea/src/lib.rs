#[macro_use]
extern crate log;

mod cache;
pub use cache::{content_hash, SummaryCache};

mod openapnea;
pub use openapnea::{Analysis, OpenApnea, PipelineConfig, RunReport};

pub use openapnea_algos as algo;
pub use openapnea_codec as codec;
pub use openapnea_store as store;
pub use openapnea_types as types;
