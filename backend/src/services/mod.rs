pub mod payment;
pub mod payu;
