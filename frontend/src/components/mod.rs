pub mod analysis;
pub mod evaluation;
pub mod header;
pub mod manufacturing;
pub mod utils;
pub mod widgets;
pub mod workers;
