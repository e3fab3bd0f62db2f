pub mod matrix;
pub mod qr_code;

pub use matrix::ByteMatrix;
pub use qr_code::{ECLevel, Mode, QRCode};
