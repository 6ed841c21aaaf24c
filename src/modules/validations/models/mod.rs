mod validation_record;

pub use validation_record::ValidationRecord;
