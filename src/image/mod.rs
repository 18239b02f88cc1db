pub mod io;
pub mod ppm;
pub mod rgb;
pub mod traits;
pub mod u8;

pub use self::rgb::{Channel, RgbPlanes};
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::{GrayImageU8, ImageU8};
