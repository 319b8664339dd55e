//! Three-phase seeding sequence
//!
//! Creates the demo company, then the contact linked to it, then every deal
//! of the dataset linked to both. Identifiers flow from one phase to the next
//! as plain values.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::models::{NewContact, NewDeal, extract_id};
use crate::client::{CrmApi, Endpoint};
use crate::error::{ApiError, Result};
use crate::output::ProgressReporter;

pub mod dataset;

use dataset::{CompanySeed, ContactSeed, DealSeed};

/// How the runner reacts to a failed request or a missing identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Replace the failed response with an empty object and keep going.
    /// Missing identifiers are forwarded as `null`.
    #[default]
    ContinueOnError,
    /// Abort on the first failed request or missing identifier.
    Strict,
}

impl ErrorPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ErrorPolicy::Strict
        } else {
            ErrorPolicy::ContinueOnError
        }
    }
}

/// Client-side pacing between deal requests
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Pacer that sleeps for a fixed interval
pub struct SleepPacer {
    delay: Duration,
}

impl SleepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Pacer for SleepPacer {
    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Progress milestones reported while seeding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedEvent {
    Started,
    CreatingCompany,
    CompanyCreated(Option<String>),
    CreatingContact,
    ContactCreated(Option<String>),
    CreatingDeals,
    /// `number` is 1-based
    DealCreated { number: usize, title: String },
    Finished { created: usize },
}

/// Outcome of a seeding run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub company_id: Option<String>,
    pub contact_id: Option<String>,
    /// Deal requests issued, whether or not the API accepted them
    pub deals_created: usize,
    pub currency: &'static str,
    /// Sum of all deal values in the dataset
    pub pipeline_value: u64,
    pub pipeline_total_label: &'static str,
    pub policy: ErrorPolicy,
}

/// Drives the seeding sequence against a [`CrmApi`]
pub struct SeedRunner<'a> {
    client: &'a dyn CrmApi,
    pacer: &'a dyn Pacer,
    reporter: &'a dyn ProgressReporter,
    policy: ErrorPolicy,
}

impl<'a> SeedRunner<'a> {
    pub fn new(
        client: &'a dyn CrmApi,
        pacer: &'a dyn Pacer,
        reporter: &'a dyn ProgressReporter,
        policy: ErrorPolicy,
    ) -> Self {
        Self {
            client,
            pacer,
            reporter,
            policy,
        }
    }

    /// Seed the built-in dataset
    pub async fn run(&self) -> Result<SeedReport> {
        debug!("Seeding with policy {:?}", self.policy);
        self.reporter.report(&SeedEvent::Started);

        let company_id = self.create_company(&dataset::COMPANY).await?;
        let contact_id = self
            .create_contact(&dataset::CONTACT, company_id.as_deref())
            .await?;
        let created = self
            .create_deals(&dataset::DEALS, company_id.as_deref(), contact_id.as_deref())
            .await?;

        self.reporter.report(&SeedEvent::Finished { created });

        Ok(SeedReport {
            company_id,
            contact_id,
            deals_created: created,
            currency: dataset::CURRENCY,
            pipeline_value: dataset::pipeline_value(),
            pipeline_total_label: dataset::PIPELINE_TOTAL_LABEL,
            policy: self.policy,
        })
    }

    /// Create the company and return its identifier, if the API gave one
    pub async fn create_company(&self, company: &CompanySeed) -> Result<Option<String>> {
        self.reporter.report(&SeedEvent::CreatingCompany);

        let response = self
            .post(Endpoint::Companies, serde_json::to_value(company)?)
            .await?;
        let id = self.require_id(&response, "company")?;

        self.reporter.report(&SeedEvent::CompanyCreated(id.clone()));
        Ok(id)
    }

    /// Create the contact linked to `company_id` and return its identifier
    pub async fn create_contact(
        &self,
        contact: &ContactSeed,
        company_id: Option<&str>,
    ) -> Result<Option<String>> {
        self.reporter.report(&SeedEvent::CreatingContact);

        let body = serde_json::to_value(NewContact::from_seed(contact, company_id))?;
        let response = self.post(Endpoint::Contacts, body).await?;
        let id = self.require_id(&response, "contact")?;

        self.reporter.report(&SeedEvent::ContactCreated(id.clone()));
        Ok(id)
    }

    /// Create every deal in order, pausing after each request.
    ///
    /// Returns the number of deal requests issued.
    pub async fn create_deals(
        &self,
        deals: &[DealSeed],
        company_id: Option<&str>,
        contact_id: Option<&str>,
    ) -> Result<usize> {
        self.reporter.report(&SeedEvent::CreatingDeals);

        let mut created = 0;
        for deal in deals {
            let body = serde_json::to_value(NewDeal::from_seed(deal, company_id, contact_id))?;
            self.post(Endpoint::Deals, body).await?;

            created += 1;
            self.reporter.report(&SeedEvent::DealCreated {
                number: created,
                title: deal.title.to_string(),
            });
            self.pacer.pause().await;
        }

        Ok(created)
    }

    /// Post a record and parse the response body.
    ///
    /// Lenient runs parse the body whatever the status and fall back to an
    /// empty object; strict runs fail on transport errors, non-2xx statuses
    /// and unparseable bodies.
    async fn post(&self, endpoint: Endpoint, body: Value) -> Result<Value> {
        let response = match self.client.post(endpoint, &body).await {
            Ok(response) => response,
            Err(err) if self.policy == ErrorPolicy::ContinueOnError => {
                warn!("POST {} failed, continuing with an empty response: {}", endpoint, err);
                return Ok(Value::Object(Map::new()));
            }
            Err(err) => return Err(err),
        };

        if self.policy == ErrorPolicy::Strict {
            return response.error_for_status()?.json();
        }

        if !response.status.is_success() {
            warn!("POST {} returned {}", endpoint, response.status);
        }
        Ok(response.json().unwrap_or_else(|err| {
            warn!("POST {} body ignored: {}", endpoint, err);
            Value::Object(Map::new())
        }))
    }

    fn require_id(&self, response: &Value, key: &str) -> Result<Option<String>> {
        let id = extract_id(response, key);
        if id.is_none() {
            if self.policy == ErrorPolicy::Strict {
                return Err(ApiError::MissingId(format!("{}.id", key)).into());
            }
            warn!("No {}.id in response, later records will reference null", key);
        }
        Ok(id)
    }
}
