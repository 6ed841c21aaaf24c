mod billing_profile;

pub use billing_profile::{BillingDetailsPayload, BillingProfile};
