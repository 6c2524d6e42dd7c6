// Demo mode: an in-memory Student Directory Service
//
// Serves the same REST surface as the real service so the TUI and CLI can be
// tried without a backend. Records live in a Vec behind a mutex and are lost
// on exit. The HTTP client tests also run against this server.
//
// Run with: ROSTER_DEMO=1 cargo run --release
//       or: cargo run -- serve-demo --bind 127.0.0.1:8000

use crate::roster::{Grade, Major, NewStudent, Student, StudentFields, StudentId};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Shared record store
pub type Store = Arc<Mutex<Vec<Student>>>;

/// Error responses from the demo directory
#[derive(Debug)]
enum DemoError {
    NotFound(StudentId),
    Conflict(StudentId),
    Poisoned,
}

impl IntoResponse for DemoError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            DemoError::NotFound(id) => (StatusCode::NOT_FOUND, format!("student {} not found", id)),
            DemoError::Conflict(id) => (StatusCode::CONFLICT, format!("student {} already exists", id)),
            DemoError::Poisoned => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store unavailable".to_string(),
            ),
        };

        tracing::warn!("Demo directory: {} - {}", status, message);
        (status, message).into_response()
    }
}

fn lock(store: &Store) -> Result<std::sync::MutexGuard<'_, Vec<Student>>, DemoError> {
    store.lock().map_err(|_| DemoError::Poisoned)
}

/// A few records so the table is not empty on first launch
pub fn seed() -> Vec<Student> {
    let rows = [
        ("Ann Lee", Grade::B, Major::Biotechnology),
        ("Ravi Kumar", Grade::A, Major::ComputerScience),
        ("Mei Chen", Grade::C, Major::ElectronicsAndCommunication),
        ("Jonas Berg", Grade::B, Major::MechanicalEngineering),
        ("Sara Okafor", Grade::A, Major::CivilEngineering),
    ];

    rows.into_iter()
        .zip(1..)
        .map(|((name, grade, major), id)| Student {
            id,
            name: name.to_string(),
            grade,
            major,
        })
        .collect()
}

/// Build the REST router over `store`
pub fn router(store: Store) -> Router {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route("/students/:id", put(update_student).delete(delete_student))
        .with_state(store)
}

/// GET /students
async fn list_students(State(store): State<Store>) -> Result<Json<Vec<Student>>, DemoError> {
    Ok(Json(lock(&store)?.clone()))
}

/// POST /students - stores the record under the id the client chose
async fn create_student(
    State(store): State<Store>,
    Json(new): Json<NewStudent>,
) -> Result<(StatusCode, Json<Student>), DemoError> {
    let mut students = lock(&store)?;
    if students.iter().any(|s| s.id == new.id) {
        return Err(DemoError::Conflict(new.id));
    }

    let student = Student::from(new);
    students.push(student.clone());
    tracing::debug!(id = student.id, "Demo directory: created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /students/:id
async fn update_student(
    State(store): State<Store>,
    Path(id): Path<StudentId>,
    Json(fields): Json<StudentFields>,
) -> Result<Json<Student>, DemoError> {
    let mut students = lock(&store)?;
    let slot = students
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(DemoError::NotFound(id))?;

    slot.name = fields.name;
    slot.grade = fields.grade;
    slot.major = fields.major;
    tracing::debug!(id, "Demo directory: updated");
    Ok(Json(slot.clone()))
}

/// DELETE /students/:id
async fn delete_student(
    State(store): State<Store>,
    Path(id): Path<StudentId>,
) -> Result<StatusCode, DemoError> {
    let mut students = lock(&store)?;
    let before = students.len();
    students.retain(|s| s.id != id);
    if students.len() == before {
        return Err(DemoError::NotFound(id));
    }

    tracing::debug!(id, "Demo directory: deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handle to a demo directory running on a background task
pub struct DemoServer {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl DemoServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop accepting connections and wait for the server task
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.handle.await;
    }
}

/// Bind `addr` and serve `students` in the background. Binding port 0 picks
/// a free port; `DemoServer::base_url` reports the bound address.
pub async fn spawn(addr: SocketAddr, students: Vec<Student>) -> Result<DemoServer> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind demo directory to {}", addr))?;
    let addr = listener
        .local_addr()
        .context("Failed to read demo directory address")?;

    let app = router(Arc::new(Mutex::new(students)));
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let handle = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_rx.await.ok();
            })
            .await;
        if let Err(e) = result {
            tracing::error!("Demo directory error: {}", e);
        }
    });

    tracing::info!("Demo directory listening on {}", addr);
    Ok(DemoServer {
        addr,
        shutdown_tx,
        handle,
    })
}

/// Run the demo directory in the foreground until Ctrl+C
pub async fn serve(addr: SocketAddr, seed_data: bool) -> Result<()> {
    let students = if seed_data { seed() } else { Vec::new() };
    let count = students.len();
    let server = spawn(addr, students).await?;

    println!("Demo directory serving {} students at {}", count, server.base_url());
    println!("Press Ctrl+C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")?;

    server.shutdown().await;
    tracing::info!("Demo directory shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_sequential() {
        let students = seed();
        let ids: Vec<_> = students.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(students[0].name, "Ann Lee");
        assert_eq!(students[0].grade, Grade::B);
        assert_eq!(students[0].major, Major::Biotechnology);
    }

    #[tokio::test]
    async fn test_create_conflict_and_missing_delete() {
        let server = spawn("127.0.0.1:0".parse().unwrap(), seed()).await.unwrap();
        let client = reqwest::Client::new();
        let url = format!("{}/students", server.base_url());

        let body = serde_json::json!({
            "id": 1, "name": "Ann Lee", "grade": "B", "major": "Biotechnology"
        });
        let response = client.post(&url).json(&body).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 409);

        let response = client
            .delete(format!("{}/99", url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);

        let response = client.delete(format!("{}/1", url)).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 204);

        let remaining: Vec<Student> = client.get(&url).send().await.unwrap().json().await.unwrap();
        assert_eq!(remaining.len(), 4);

        server.shutdown().await;
    }
}
