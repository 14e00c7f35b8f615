use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::{redis, Pool};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - `SELECT 1` against Postgres
/// - `PING` against the session store
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis_pool: web::Data<Arc<Pool>>,
) -> impl Responder {
    let db_status = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!("Readiness: database check failed: {}", e);
            "unhealthy"
        }
    };

    let redis_status = match redis_pool.get().await {
        Ok(mut conn) => match redis::cmd("PING").query_async::<String>(&mut conn).await {
            Ok(_) => "ok",
            Err(e) => {
                tracing::warn!("Readiness: redis PING failed: {}", e);
                "unhealthy"
            }
        },
        Err(e) => {
            tracing::warn!("Readiness: redis pool unavailable: {}", e);
            "unhealthy"
        }
    };

    if db_status == "ok" && redis_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database: db_status,
            redis: redis_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database: db_status,
            redis: redis_status,
        })
    }
}
