//! Contact inquiry model.
//!
//! An [`InquiryDraft`] is what the visitor typed into the estimate form. Once
//! the desk accepts it, the draft is stamped with an id and a timestamp and
//! becomes an [`Inquiry`], the record kept in durable storage.
//!
//! Stored layout (one element of the JSON array):
//!
//! ```json
//! {
//!   "name": "Jane Doe",
//!   "phone": "8325551234",
//!   "email": "jane@example.com",
//!   "service": "Roofing",
//!   "message": "Leak",
//!   "id": 1760693400123,
//!   "timestamp": "2026-10-17T09:30:00.123Z"
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Acknowledgement text returned for every accepted submission.
pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully";

/// Services offered in the estimate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    NewConstruction,
    Roofing,
    Remodeling,
    Other,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::NewConstruction,
        ServiceKind::Roofing,
        ServiceKind::Remodeling,
        ServiceKind::Other,
    ];

    /// Value carried by the `<option>` and written to storage.
    pub fn as_form_value(&self) -> &'static str {
        match self {
            ServiceKind::NewConstruction => "New Construction",
            ServiceKind::Roofing => "Roofing",
            ServiceKind::Remodeling => "Remodeling",
            ServiceKind::Other => "Other",
        }
    }

    /// Label shown to the visitor in the service dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceKind::NewConstruction => "New Construction",
            ServiceKind::Roofing => "Roofing Services",
            ServiceKind::Remodeling => "Remodeling & Additions",
            ServiceKind::Other => "Other",
        }
    }

    /// Parse a `<select>` value; the empty placeholder means "no service".
    pub fn from_form_value(value: &str) -> Result<Option<Self>, UnknownService> {
        if value.trim().is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_form_value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service '{0}'")]
pub struct UnknownService(pub String);

impl FromStr for ServiceKind {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.as_form_value() == s.trim())
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

/// Required form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Phone,
    Email,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "Full Name",
            RequiredField::Phone => "Phone Number",
            RequiredField::Email => "Email",
        }
    }
}

/// Visitor input prior to persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryDraft {
    #[serde(default, deserialize_with = "nullable_text")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub email: String,
    #[serde(default, with = "service_field")]
    pub service: Option<ServiceKind>,
    #[serde(default, deserialize_with = "nullable_text")]
    pub message: String,
}

impl InquiryDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_service(mut self, service: ServiceKind) -> Self {
        self.service = Some(service);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Required fields that are blank once whitespace is trimmed.
    ///
    /// The desk does not call this; the form uses it before submitting.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Name, &self.name),
            (RequiredField::Phone, &self.phone),
            (RequiredField::Email, &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// A finalized, stored inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    #[serde(default, deserialize_with = "nullable_text")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub email: String,
    #[serde(default, with = "service_field")]
    pub service: Option<ServiceKind>,
    #[serde(default, deserialize_with = "nullable_text")]
    pub message: String,
    pub id: u64,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl Inquiry {
    pub fn finalize(draft: InquiryDraft, id: u64, timestamp: DateTime<Utc>) -> Self {
        let InquiryDraft {
            name,
            phone,
            email,
            service,
            message,
        } = draft;

        Self {
            name,
            phone,
            email,
            service,
            message,
            id,
            timestamp,
        }
    }

    /// The visitor-supplied part of the record.
    pub fn draft(&self) -> InquiryDraft {
        InquiryDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            service: self.service,
            message: self.message.clone(),
        }
    }
}

/// Result of a submission. The mock desk only ever produces the success shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

impl Acknowledgement {
    pub fn received() -> Self {
        Self {
            success: true,
            message: SUBMITTED_MESSAGE.to_string(),
        }
    }
}

/// `Option<ServiceKind>` stored as its form value, `""` when unset.
mod service_field {
    use super::ServiceKind;
    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::warn;

    pub fn serialize<S: Serializer>(
        value: &Option<ServiceKind>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(|kind| kind.as_form_value()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ServiceKind>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(value) = raw else {
            return Ok(None);
        };
        match ServiceKind::from_form_value(&value) {
            Ok(kind) => Ok(kind),
            Err(err) => {
                warn!(%err, "stored inquiry has an unrecognised service, reading as unset");
                Ok(None)
            }
        }
    }
}

/// Text field where `null` reads as empty.
fn nullable_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// ISO-8601 UTC with millisecond precision, e.g. `2026-10-17T09:30:00.123Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
