pub mod device;
pub mod form;
pub mod preload;
