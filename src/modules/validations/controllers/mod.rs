mod validation_controller;

pub use validation_controller::configure;
