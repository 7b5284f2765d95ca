pub mod stage0_load;
pub mod stage1_aggregate;
pub mod stage2_summarize;
pub mod stage3_persist;

pub use stage0_load::*;
pub use stage1_aggregate::*;
pub use stage2_summarize::*;
pub use stage3_persist::*;
