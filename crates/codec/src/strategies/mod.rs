mod gray;
mod natural;

pub use gray::{gray_decode, gray_encode, GrayBinary};
pub use natural::NaturalBinary;
