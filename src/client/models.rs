//! Request bodies and response helpers for the CRM API

use serde::Serialize;
use serde_json::Value;

use crate::seed::dataset::{CURRENCY, ContactSeed, DealSeed, PIPELINE_ID};

/// Body for `POST contacts`.
///
/// `company_id` is always serialized; an absent reference becomes `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub position: &'a str,
    pub company_id: Option<&'a str>,
}

impl<'a> NewContact<'a> {
    pub fn from_seed(seed: &'a ContactSeed, company_id: Option<&'a str>) -> Self {
        Self {
            first_name: seed.first_name,
            last_name: seed.last_name,
            email: seed.email,
            phone: seed.phone,
            position: seed.position,
            company_id,
        }
    }
}

/// Body for `POST deals`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeal<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub value: u64,
    pub currency: &'a str,
    pub pipeline_id: &'a str,
    pub stage_id: &'a str,
    pub probability: u8,
    pub company_id: Option<&'a str>,
    pub contact_id: Option<&'a str>,
}

impl<'a> NewDeal<'a> {
    pub fn from_seed(
        seed: &'a DealSeed,
        company_id: Option<&'a str>,
        contact_id: Option<&'a str>,
    ) -> Self {
        Self {
            title: seed.title,
            description: seed.description,
            value: seed.value,
            currency: CURRENCY,
            pipeline_id: PIPELINE_ID,
            stage_id: seed.stage.id(),
            probability: seed.probability,
            company_id,
            contact_id,
        }
    }
}

/// Pull `body[key].id` out of a creation response.
///
/// String ids are returned as-is (even when empty) and numeric ids are
/// stringified. Anything else is treated as absent.
pub fn extract_id(body: &Value, key: &str) -> Option<String> {
    match body.get(key)?.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
