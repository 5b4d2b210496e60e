//! # Custom Trip Inquiry
//!
//! The contact page form. Destinations are pre-filled from the custom plan
//! built on the map explorer, and a successful submission empties that plan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;
use voyage_core::validation::validate_required_text;
use voyage_core::Locale;

use crate::error::InquiryResult;
use crate::state::{CustomPlan, SessionStore};

/// Contact form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InquiryForm {
    pub name: String,
    /// Phone, e-mail or messenger handle.
    pub contact: String,
    /// Free text, comma separated.
    pub destinations: String,
    pub description: String,
}

impl InquiryForm {
    /// A blank form with destinations taken from `plan`.
    pub fn prefilled(plan: &CustomPlan, locale: Locale) -> Self {
        InquiryForm {
            destinations: plan.destination_names(locale),
            ..InquiryForm::default()
        }
    }
}

/// Acknowledgement shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InquiryReceipt {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub destinations: String,
    pub description: String,
    pub submitted_at: DateTime<Utc>,
}

/// Validates the form and clears the visitor's custom plan.
///
/// ## Rules
/// - `name` and `contact` must not be blank
/// - destinations and description are optional
pub fn submit_inquiry<S>(store: &S, form: InquiryForm) -> InquiryResult<InquiryReceipt>
where
    S: SessionStore + ?Sized,
{
    let name = validate_required_text("name", &form.name)?;
    let contact = validate_required_text("contact", &form.contact)?;

    let receipt = InquiryReceipt {
        id: Uuid::new_v4().to_string(),
        name,
        contact,
        destinations: form.destinations.trim().to_string(),
        description: form.description.trim().to_string(),
        submitted_at: Utc::now(),
    };

    store.clear_plan();

    info!(inquiry_id = %receipt.id, destinations = %receipt.destinations, "Inquiry submitted");
    Ok(receipt)
}
