pub mod calculator;
pub mod types;

pub use calculator::{aspect_strength, AspectCalculator};
pub use types::{
    AspectCore, AspectDefinition, AspectKind, AspectNature, AspectObjectRef, ChartSide,
    SynastryAspect, ASPECT_CATALOG,
};
