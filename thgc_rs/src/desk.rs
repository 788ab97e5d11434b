//! Contact desk: the mock submission endpoint behind the estimate form.
//!
//! A submission waits out the configured latency, reads the stored array,
//! appends a finalized [`Inquiry`] and writes the whole array back. The desk
//! has no rejection path of its own; only storage faults come back as errors.

use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::DeskConfig;
use crate::error::{DeskError, DeskResult};
use crate::inquiry::{Acknowledgement, Inquiry, InquiryDraft};
use crate::store::KeyValueStore;

/// Source of the simulated network delay.
pub trait Latency {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<T: Latency> Latency for &T {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).pause(duration)
    }
}

/// Latency that resolves immediately. Used for previews and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Latency for Immediate {
    fn pause(&self, _duration: Duration) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}

/// Mock submission endpoint over an injected store.
#[derive(Debug, Clone)]
pub struct ContactDesk<S, L = Immediate> {
    store: S,
    latency: L,
    config: DeskConfig,
}

impl<S: KeyValueStore, L: Latency> ContactDesk<S, L> {
    pub fn new(store: S, latency: L) -> Self {
        Self::with_config(store, latency, DeskConfig::default())
    }

    pub fn with_config(store: S, latency: L, config: DeskConfig) -> Self {
        Self {
            store,
            latency,
            config,
        }
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Accept a draft, store it and acknowledge.
    ///
    /// Always answers with [`Acknowledgement::received`] once the write lands.
    /// If the stored value is not a JSON array it is left untouched
    /// and [`DeskError::Corrupt`] is returned.
    pub async fn submit(&self, draft: InquiryDraft) -> DeskResult<Acknowledgement> {
        self.latency.pause(self.config.latency()).await;
        self.append(draft, Utc::now())?;
        Ok(Acknowledgement::received())
    }

    /// All stored inquiries in submission order; empty if nothing was stored.
    pub fn inquiries(&self) -> DeskResult<Vec<Inquiry>> {
        self.load()
    }

    fn load<T: DeserializeOwned>(&self) -> DeskResult<Vec<T>> {
        let key = &self.config.storage_key;
        let Some(raw) = self.store.get_item(key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(|source| DeskError::Corrupt {
            key: key.clone(),
            source,
        })
    }

    /// Earlier elements are written back exactly as they were read.
    fn append(&self, draft: InquiryDraft, now: DateTime<Utc>) -> DeskResult<Inquiry> {
        let mut stored: Vec<Value> = self.load()?;
        let ids: Vec<u64> = stored
            .iter()
            .filter_map(|entry| entry.get("id").and_then(Value::as_u64))
            .collect();
        let record = Inquiry::finalize(draft, next_id(&ids, now), now);
        stored.push(serde_json::to_value(&record).map_err(DeskError::Encode)?);

        let encoded = serde_json::to_string(&stored).map_err(DeskError::Encode)?;
        self.store.set_item(&self.config.storage_key, &encoded)?;

        info!(
            id = record.id,
            service = record.service.map(|s| s.as_form_value()).unwrap_or(""),
            timestamp = %record.timestamp,
            stored = stored.len(),
            "contact form submitted (mock)"
        );
        debug!(
            name = %record.name,
            phone = %record.phone,
            email = %record.email,
            message = %record.message,
            "inquiry details"
        );

        Ok(record)
    }
}

/// Epoch milliseconds of `now`, bumped past the largest stored id.
///
/// When the largest id is `u64::MAX` there is nothing above it; the lowest
/// unused id from `now` onwards is taken instead.
fn next_id(existing: &[u64], now: DateTime<Utc>) -> u64 {
    let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let bumped = match existing.iter().max() {
        Some(&last) if last >= now_ms => last.checked_add(1),
        _ => Some(now_ms),
    };
    bumped.unwrap_or_else(|| lowest_free_id(existing, now_ms))
}

fn lowest_free_id(existing: &[u64], from: u64) -> u64 {
    let taken: HashSet<u64> = existing.iter().copied().collect();
    (from..=u64::MAX)
        .chain(0..from)
        .find(|id| !taken.contains(id))
        .unwrap_or(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::inquiry::ServiceKind;
    use crate::store::MemoryStore;
    use chrono::TimeZone;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLatency {
        pauses: Mutex<Vec<Duration>>,
    }

    impl Latency for RecordingLatency {
        fn pause(&self, duration: Duration) -> impl Future<Output = ()> {
            self.pauses.lock().unwrap().push(duration);
            std::future::ready(())
        }
    }

    fn draft() -> InquiryDraft {
        InquiryDraft::new("Jane Doe", "8325551234", "jane@example.com")
            .with_service(ServiceKind::Roofing)
            .with_message("Leak")
    }

    #[tokio::test]
    async fn submit_pauses_for_configured_latency_once() {
        let latency = RecordingLatency::default();
        let desk = ContactDesk::new(MemoryStore::new(), &latency);
        desk.submit(draft()).await.unwrap();

        assert_eq!(*latency.pauses.lock().unwrap(), vec![Duration::from_millis(1500)]);
    }

    #[tokio::test]
    async fn submit_uses_configured_storage_key() {
        let config = DeskConfig::default().with_storage_key("inquiries");
        let desk = ContactDesk::with_config(MemoryStore::new(), Immediate, config);
        desk.submit(draft()).await.unwrap();

        assert!(desk.store().get_item("inquiries").unwrap().is_some());
        assert!(desk.store().get_item("contactSubmissions").unwrap().is_none());
    }

    #[test]
    fn next_id_uses_clock_when_ahead() {
        let now = Utc.timestamp_millis_opt(5_000).unwrap();
        assert_eq!(next_id(&[], now), 5_000);
    }

    #[test]
    fn next_id_stays_monotonic_within_a_millisecond() {
        let now = Utc.timestamp_millis_opt(5_000).unwrap();
        let desk = ContactDesk::new(MemoryStore::new(), Immediate);
        let first = desk.append(draft(), now).unwrap();
        let second = desk.append(draft(), now).unwrap();
        let third = desk.append(draft(), now).unwrap();

        assert_eq!(
            [first.id, second.id, third.id],
            [5_000, 5_001, 5_002]
        );
    }

    #[test]
    fn next_id_survives_clock_going_backwards() {
        let desk = ContactDesk::new(MemoryStore::new(), Immediate);
        desk.append(draft(), Utc.timestamp_millis_opt(9_000).unwrap()).unwrap();
        let earlier = desk.append(draft(), Utc.timestamp_millis_opt(1_000).unwrap()).unwrap();
        assert_eq!(earlier.id, 9_001);
    }

    #[test]
    fn next_id_falls_back_when_largest_id_is_saturated() {
        let now = Utc.timestamp_millis_opt(5_000).unwrap();
        assert_eq!(next_id(&[u64::MAX], now), 5_000);
        assert_eq!(next_id(&[u64::MAX, 5_000, 5_001], now), 5_002);
    }

    #[tokio::test]
    async fn saturated_stored_id_does_not_break_submit() {
        let seeded = format!(
            r#"[{{"name":"Max","phone":"1","email":"m@x.com","id":{},"timestamp":"2023-11-14T22:13:20Z"}}]"#,
            u64::MAX
        );
        let desk = ContactDesk::new(MemoryStore::new().seeded("contactSubmissions", &seeded), Immediate);

        desk.submit(draft()).await.unwrap();
        desk.submit(draft()).await.unwrap();

        let ids: Vec<u64> = desk.inquiries().unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0], u64::MAX);
        assert!(ids[1] != ids[2] && !ids[1..].contains(&u64::MAX));
    }

    #[tokio::test]
    async fn blank_stored_value_reads_as_empty() {
        let desk = ContactDesk::new(MemoryStore::new().seeded("contactSubmissions", ""), Immediate);
        assert!(desk.inquiries().unwrap().is_empty());
        desk.submit(draft()).await.unwrap();
        assert_eq!(desk.inquiries().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn quota_failure_propagates_and_keeps_prior_value() {
        let desk = ContactDesk::new(MemoryStore::with_quota(8).seeded("contactSubmissions", "[]"), Immediate);
        let err = desk.submit(draft()).await.unwrap_err();

        assert!(matches!(err, DeskError::Store(StoreError::QuotaExceeded { .. })));
        assert_eq!(
            desk.store().get_item("contactSubmissions").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn corrupt_value_is_reported_and_left_alone() {
        let desk = ContactDesk::new(
            MemoryStore::new().seeded("contactSubmissions", "{not json"),
            Immediate,
        );

        assert!(matches!(desk.inquiries(), Err(DeskError::Corrupt { .. })));
        assert!(matches!(desk.submit(draft()).await, Err(DeskError::Corrupt { .. })));
        assert_eq!(
            desk.store().get_item("contactSubmissions").unwrap().as_deref(),
            Some("{not json")
        );
    }
}
