mod detail;
mod index;
mod results;

pub use self::detail::*;
pub use self::index::*;
pub use self::results::*;
