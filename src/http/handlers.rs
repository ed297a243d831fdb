//! Axum HTTP handlers for the demo routes.

use axum::{extract::State, http::StatusCode, response::Html, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::{errors::AppError, facts, AppState};

#[derive(Debug, Serialize)]
pub struct MemoryUsage {
    pub rss: u64,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime: u64,
    pub memory: MemoryUsage,
    pub version: &'static str,
    pub platform: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MemoryInfo {
    pub total: u64,
    pub free: u64,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub hostname: String,
    pub platform: &'static str,
    pub architecture: &'static str,
    pub cpus: usize,
    pub memory: MemoryInfo,
    pub uptime: u64,
    pub version: &'static str,
    pub environment: String,
}

#[derive(Debug, Serialize)]
pub struct FactResponse {
    pub fact: &'static str,
    pub timestamp: String,
    pub container: String,
}

const NOT_FOUND_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>404 - Not Found</title></head>\n<body>\n<h1>404 - Not Found</h1>\n<p>The requested path does not exist on this server.</p>\n</body>\n</html>\n";

fn timestamp_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let snapshot = state.probe.snapshot().await?;

    Ok(Html(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta http-equiv=\"refresh\" content=\"30\">\n\
         <title>Container Demo</title>\n\
         </head>\n\
         <body>\n\
         <h1>Hello from Rust in a container!</h1>\n\
         <p>Served by <code>{hostname}</code>, up for {uptime} seconds.</p>\n\
         <p>This page refreshes every 30 seconds.</p>\n\
         </body>\n\
         </html>\n",
        hostname = snapshot.hostname,
        uptime = state.uptime_seconds(),
    )))
}

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let snapshot = state.probe.snapshot().await?;

    Ok(Json(HealthResponse {
        status: "healthy",
        timestamp: timestamp_utc(),
        uptime: state.uptime_seconds(),
        memory: MemoryUsage {
            rss: snapshot.process_rss,
            total: snapshot.memory_total,
        },
        version: env!("CARGO_PKG_VERSION"),
        platform: snapshot.platform,
    }))
}

pub async fn info(State(state): State<AppState>) -> Result<Json<InfoResponse>, AppError> {
    let snapshot = state.probe.snapshot().await?;

    Ok(Json(InfoResponse {
        hostname: snapshot.hostname,
        platform: snapshot.platform,
        architecture: snapshot.architecture,
        cpus: snapshot.cpus,
        memory: MemoryInfo {
            total: snapshot.memory_total,
            free: snapshot.memory_free,
        },
        uptime: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.environment.to_string(),
    }))
}

pub async fn random_fact(State(state): State<AppState>) -> Result<Json<FactResponse>, AppError> {
    let snapshot = state.probe.snapshot().await?;

    Ok(Json(FactResponse {
        fact: facts::random_fact(),
        timestamp: timestamp_utc(),
        container: snapshot.hostname,
    }))
}

pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}
