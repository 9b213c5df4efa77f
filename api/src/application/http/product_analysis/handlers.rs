pub mod analyze_image;
pub mod clear_history;
pub mod get_history;
pub mod lookup_barcode;
