pub mod decode;
pub mod encode;

pub use decode::{decode_rgb, detect_format, DecodedImage, InputFormat};
pub use encode::{encode_gray_png, from_data_url, to_data_url};
