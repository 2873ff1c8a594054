pub mod error;
pub mod hostcolor;
pub mod intervaltimer;
pub mod pixelmap;
pub mod preview;
pub mod property;
pub mod scripts;
pub mod tooloptions;

pub use error::StrobeError;
pub use hostcolor::HostColor;
pub use pixelmap::{Cell, PixelMap};
pub use property::{PropertyDescriptor, PropertyValues, WidgetKind};
pub use scripts::strobe::{Frequency, Strobe};
pub use scripts::RgbScript;
