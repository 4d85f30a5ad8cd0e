pub mod museum;
pub mod preference;
