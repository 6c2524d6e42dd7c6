//! Student Directory Service access
//!
//! `StudentDirectory` is the seam between the roster and the network. The
//! HTTP implementation talks to the REST service; tests plug in fakes.
//!
//! | Operation | Request                 | Success      |
//! |-----------|-------------------------|--------------|
//! | list      | `GET /students`         | 200 + array  |
//! | create    | `POST /students`        | 200/201 + record |
//! | update    | `PUT /students/{id}`    | 200 + record |
//! | delete    | `DELETE /students/{id}` | 200/204      |

use super::error::{FailureKind, Operation, ServiceError};
use super::model::{NewStudent, Student, StudentFields, StudentId};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Remote collection of student records
pub trait StudentDirectory: Send + Sync {
    /// Fetch the whole collection, in service order
    fn list(&self) -> impl Future<Output = Result<Vec<Student>, ServiceError>> + Send;

    /// Create a record; returns the record as the service stored it
    fn create(
        &self,
        student: &NewStudent,
    ) -> impl Future<Output = Result<Student, ServiceError>> + Send;

    /// Replace a record's fields; returns the record as the service stored it
    fn update(
        &self,
        id: StudentId,
        fields: &StudentFields,
    ) -> impl Future<Output = Result<Student, ServiceError>> + Send;

    /// Remove a record
    fn delete(&self, id: StudentId) -> impl Future<Output = Result<(), ServiceError>> + Send;
}

/// REST client for the Student Directory Service
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDirectory {
    /// Create a client for the service at `base_url` (e.g. `http://localhost:8000`)
    ///
    /// # Errors
    /// Returns a `FailureKind::Client` error if the HTTP client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                ServiceError::new(
                    Operation::List,
                    FailureKind::Client(format!("Failed to create HTTP client: {}", e)),
                )
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn students_url(&self) -> String {
        format!("{}/students", self.base_url)
    }

    fn student_url(&self, id: StudentId) -> String {
        format!("{}/students/{}", self.base_url, id)
    }

    /// Send a request and reject non-success statuses
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        operation: Operation,
    ) -> Result<reqwest::Response, ServiceError> {
        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::network(operation, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Body is only for diagnostics
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::status(operation, status.as_u16(), body));
        }

        Ok(response)
    }

    /// Decode a success body, separating transport errors from shape errors
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        operation: Operation,
    ) -> Result<T, ServiceError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ServiceError::network(operation, e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| ServiceError::schema(operation, e.to_string()))
    }
}

impl StudentDirectory for HttpDirectory {
    async fn list(&self) -> Result<Vec<Student>, ServiceError> {
        let response = self
            .send(self.client.get(self.students_url()), Operation::List)
            .await?;
        Self::decode(response, Operation::List).await
    }

    async fn create(&self, student: &NewStudent) -> Result<Student, ServiceError> {
        let request = self.client.post(self.students_url()).json(student);
        let response = self.send(request, Operation::Create).await?;
        Self::decode(response, Operation::Create).await
    }

    async fn update(&self, id: StudentId, fields: &StudentFields) -> Result<Student, ServiceError> {
        let request = self.client.put(self.student_url(id)).json(fields);
        let response = self.send(request, Operation::Update).await?;
        Self::decode(response, Operation::Update).await
    }

    async fn delete(&self, id: StudentId) -> Result<(), ServiceError> {
        self.send(self.client.delete(self.student_url(id)), Operation::Delete)
            .await?;
        Ok(())
    }
}
