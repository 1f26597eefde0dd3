//! In-memory store used by unit tests

use async_trait::async_trait;
use breed_inquiry_core::{BreedInquiryError, SearchStatement};
use breed_inquiry_types::{Breed, Connector};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::connectors::BreedStore;

pub fn sample_breeds() -> Vec<Breed> {
    vec![
        Breed::new("B1", "Golden Retriever", "โกลเด้น รีทรีฟเวอร์", "GR"),
        Breed::new("B2", "Beagle", "บีเกิ้ล", "BG").with_remark("hound group"),
    ]
}

/// Store returning canned rows and recording every statement it receives
pub struct FakeStore {
    rows: Vec<Breed>,
    delay: Option<Duration>,
    failure: Option<fn() -> BreedInquiryError>,
    healthy: bool,
    calls: AtomicUsize,
    last_statement: Mutex<Option<SearchStatement>>,
}

impl FakeStore {
    pub fn with_rows(rows: Vec<Breed>) -> Self {
        Self {
            rows,
            delay: None,
            failure: None,
            healthy: true,
            calls: AtomicUsize::new(0),
            last_statement: Mutex::new(None),
        }
    }

    pub fn failing(failure: fn() -> BreedInquiryError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::with_rows(vec![])
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            healthy: false,
            ..Self::with_rows(vec![])
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_statement(&self) -> Option<SearchStatement> {
        self.last_statement.lock().unwrap().clone()
    }
}

#[async_trait]
impl BreedStore for FakeStore {
    async fn fetch_breeds(
        &self,
        statement: &SearchStatement,
    ) -> Result<Vec<Breed>, BreedInquiryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_statement.lock().unwrap() = Some(statement.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        Ok(self.rows.clone())
    }

    async fn health_check(&self) -> Result<(), BreedInquiryError> {
        if self.healthy {
            Ok(())
        } else {
            Err(BreedInquiryError::Database("connection refused".into()))
        }
    }

    async fn close(&self) -> Result<(), BreedInquiryError> {
        Ok(())
    }

    fn connector_type(&self) -> Connector {
        Connector::Mysql
    }
}
