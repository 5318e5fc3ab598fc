//! Sample payloads for pre-populating the input form.
//!
//! Each sample is fetched from the backend's static `/samples/*` files. Any
//! failure (network error or non-2xx) substitutes a built-in literal, so
//! loading a sample never fails.

use serde::Deserialize;
use tracing::warn;

use crate::api::BackendClient;
use crate::types::DocumentType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SampleKind {
    Email,
    Invoice,
    Policy,
}

impl SampleKind {
    /// Path segments under the backend base URL.
    #[must_use]
    pub fn path(self) -> [&'static str; 2] {
        match self {
            Self::Email => ["samples", "sample_email.txt"],
            Self::Invoice => ["samples", "sample_invoice.json"],
            Self::Policy => ["samples", "sample_policy.txt"],
        }
    }

    /// Type the input selector is set to when this sample loads.
    #[must_use]
    pub fn document_type(self) -> DocumentType {
        match self {
            Self::Email => DocumentType::Email,
            Self::Invoice => DocumentType::Json,
            Self::Policy => DocumentType::Pdf,
        }
    }

    #[must_use]
    pub fn fallback(self) -> &'static str {
        match self {
            Self::Email => FALLBACK_EMAIL,
            Self::Invoice => FALLBACK_INVOICE,
            Self::Policy => FALLBACK_POLICY,
        }
    }
}

/// A loaded sample, ready for `InputForm::load_sample`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub kind: SampleKind,
    pub text: String,
    /// Whether the built-in literal was used.
    pub fallback: bool,
}

impl Sample {
    #[must_use]
    pub fn document_type(&self) -> DocumentType {
        self.kind.document_type()
    }
}

#[derive(Clone, Debug)]
pub struct Samples {
    client: BackendClient,
}

impl Samples {
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Fetch a sample, falling back to the built-in text on any failure.
    pub async fn load(&self, kind: SampleKind) -> Sample {
        match self.client.fetch_text(&kind.path()).await {
            Ok(text) => Sample { kind, text, fallback: false },
            Err(err) => {
                warn!(?kind, error = %err, "sample fetch failed; using built-in text");
                Sample { kind, text: kind.fallback().to_owned(), fallback: true }
            }
        }
    }
}

// =============================================================================
// BUILT-IN TEXT
// =============================================================================

const FALLBACK_EMAIL: &str = "From: customer@company.com
To: support@business.com
Subject: Urgent Issue with Recent Order

Dear Support Team,

I am extremely disappointed with the quality of service I received with my recent order #12345. The product arrived damaged and I need immediate assistance to resolve this issue.

This is unacceptable and I expect a prompt response.

Regards,
John Smith";

const FALLBACK_INVOICE: &str = r#"{
  "invoice_id": "INV-2024-001",
  "customer_id": "CUST-12345",
  "amount": 15000.00,
  "currency": "USD",
  "line_items": [
    {"description": "Professional Services", "amount": 12000.00, "quantity": 1},
    {"description": "Additional Consulting", "amount": 3000.00, "quantity": 1}
  ],
  "invoice_date": "2024-01-15",
  "due_date": "2024-02-15"
}"#;

const FALLBACK_POLICY: &str = "COMPANY PRIVACY POLICY

Effective Date: January 1, 2024

This policy describes how we handle personal data in compliance with GDPR requirements.

1. DATA COLLECTION
We collect personal information necessary for business operations.

2. GDPR COMPLIANCE
All data processing follows General Data Protection Regulation guidelines.

3. USER RIGHTS
Individuals have the right to access, rectify, and delete their personal data.

4. VIOLATIONS
Any violation of this policy may result in disciplinary action and legal consequences.

For questions, contact: privacy@company.com";

#[cfg(test)]
#[path = "samples_test.rs"]
mod tests;
