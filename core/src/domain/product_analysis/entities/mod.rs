pub mod history;
pub mod product_analysis;

pub use history::*;
pub use product_analysis::*;
