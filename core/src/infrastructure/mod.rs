pub mod llm;
pub mod product_source;
pub mod storage;
