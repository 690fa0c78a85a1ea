mod get_movie_list;
mod util;

pub use get_movie_list::*;
pub use util::*;
