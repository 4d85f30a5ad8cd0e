mod museum;
mod product;
mod purchase;
mod review;
mod tag;

pub use museum::*;
pub use product::*;
pub use purchase::*;
pub use review::*;
pub use tag::*;
