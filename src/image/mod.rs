pub mod io;
pub mod roi;
pub mod traits;
pub mod u8;

pub use self::io::GrayImageU8;
pub use self::roi::default_roi_mask;
pub use self::traits::{RegionMask, UnmaskedRegion};
pub use self::u8::ImageU8;
