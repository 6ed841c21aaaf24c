use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Bank and tax details used to pay one advertiser.
///
/// Every field is optional so that an advertiser without a stored profile can
/// still be answered with the same shape (see [`BillingProfile::placeholder`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BillingProfile {
    pub id: Option<String>,
    pub advertiser_id: Option<String>,
    pub beneficiary_name: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub pan: Option<String>,
    pub gstin: Option<String>,
    pub bank_name: Option<String>,
    pub swift_code: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl BillingProfile {
    /// All-null record returned when nothing is stored yet
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_none()
    }

    /// Overwrite only the fields the payload provides
    pub fn apply(&mut self, payload: &BillingDetailsPayload) {
        let payload = payload.normalized();
        let fields = [
            (&mut self.beneficiary_name, payload.beneficiary_name),
            (&mut self.account_number, payload.account_number),
            (&mut self.ifsc_code, payload.ifsc_code),
            (&mut self.pan, payload.pan),
            (&mut self.gstin, payload.gstin),
            (&mut self.bank_name, payload.bank_name),
            (&mut self.swift_code, payload.swift_code),
        ];
        for (slot, value) in fields {
            if value.is_some() {
                *slot = value;
            }
        }
    }
}

/// Upsert body; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingDetailsPayload {
    #[serde(default)]
    pub beneficiary_name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub ifsc_code: Option<String>,
    #[serde(default)]
    pub pan: Option<String>,
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub swift_code: Option<String>,
}

fn clean(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl BillingDetailsPayload {
    /// Trimmed copy; blank strings become `None`
    pub fn normalized(&self) -> Self {
        Self {
            beneficiary_name: clean(&self.beneficiary_name),
            account_number: clean(&self.account_number),
            ifsc_code: clean(&self.ifsc_code),
            pan: clean(&self.pan),
            gstin: clean(&self.gstin),
            bank_name: clean(&self.bank_name),
            swift_code: clean(&self.swift_code),
        }
    }
}
