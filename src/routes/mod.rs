pub mod finder;
pub mod health_check;
pub mod movies;
pub mod page;

pub use finder::*;
pub use health_check::*;
pub use movies::*;
pub use page::*;
