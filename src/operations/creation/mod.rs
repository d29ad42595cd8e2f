mod make_box;
mod make_hemisphere;
mod make_prism;

pub use make_box::{BoxMeasure, MakeBox};
pub use make_hemisphere::{HemisphereMeasure, MakeHemisphere};
pub use make_prism::{MakePrism, PrismMeasure};
