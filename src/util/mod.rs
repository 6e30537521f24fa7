pub mod ext;
pub mod hex;
