mod billing_controller;

pub use billing_controller::configure;
