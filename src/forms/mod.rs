pub mod cart;
pub mod museum;
pub mod payment;
pub mod product;
pub mod review;
pub mod tag;

pub use cart::*;
pub use museum::*;
pub use payment::*;
pub use product::*;
pub use review::*;
pub use tag::*;
