mod capabilities;
mod engine_faults;

pub(crate) mod support;
