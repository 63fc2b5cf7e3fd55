pub mod load;
pub mod paging;
pub mod parse;
pub mod processing;
pub mod rows;
