pub mod batch;
pub mod stylize;

pub use batch::{collect_inputs, plan_outputs, run_batch, BatchItem, BatchReport};
pub use stylize::{RenderOutput, StylizeService};
