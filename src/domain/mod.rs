// Domain layer: the nullable value type and the data-access ports it implements.

pub mod int32;
pub mod ports;
