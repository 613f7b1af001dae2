pub mod either;
pub mod util;

pub use either::convert::{as_left, as_right, EitherExt};
pub use either::Either;
