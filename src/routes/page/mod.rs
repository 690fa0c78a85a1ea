mod get_page;
mod render;
mod submit_add;
mod submit_search;

pub use get_page::*;
pub use render::*;
pub use submit_add::*;
pub use submit_search::*;
