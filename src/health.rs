use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::{redis, Pool};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

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

const OK: &str = "ok";
const DOWN: &str = "unhealthy";

/// Process is up. Touches nothing else.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: OK })
}

async fn database_status(db: &DatabaseConnection) -> &'static str {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1");
    match db.execute(ping).await {
        Ok(_) => OK,
        Err(e) => {
            warn!("Readiness: database check failed: {}", e);
            DOWN
        }
    }
}

async fn redis_status(pool: &Pool) -> &'static str {
    let mut conn = match pool.get().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!("Readiness: redis pool unavailable: {}", e);
            return DOWN;
        }
    };
    match redis::cmd("PING").query_async::<String>(&mut conn).await {
        Ok(_) => OK,
        Err(e) => {
            warn!("Readiness: redis PING failed: {}", e);
            DOWN
        }
    }
}

/// Ready to serve traffic: Postgres answers `SELECT 1` and Redis answers `PING`.
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis_pool: web::Data<Arc<Pool>>,
) -> impl Responder {
    let database = database_status(&db).await;
    let redis = redis_status(&redis_pool).await;
    let healthy = database == OK && redis == OK;

    let body = ReadinessResponse {
        status: if healthy { OK } else { DOWN },
        database,
        redis,
    };
    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
