pub(crate) mod fill;
pub(crate) mod soft;
pub(crate) mod solid;
pub(crate) mod spec;
mod window;
