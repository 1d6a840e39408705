pub mod model;
pub mod payu;
