mod add_movie;
mod get_finder;
mod search_movie;
mod update_query;
mod util;

pub use add_movie::*;
pub use get_finder::*;
pub use search_movie::*;
pub use update_query::*;
pub use util::*;
