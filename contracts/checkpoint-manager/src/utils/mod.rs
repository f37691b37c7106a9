pub mod bitmap;
pub mod bls;
pub mod digest;
