mod finder;
mod movie;
mod movie_list;

pub use finder::*;
pub use movie::*;
pub use movie_list::*;
