use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use serde::Deserialize;
use serde_json::json;
use std::time::Instant;
use tracing::{info, warn};

use crate::algorithm::{ScheduleOutcome, generate_schedules};
use crate::models::CourseRequest;
use crate::{analytics, db};

/// Optional per-column filters for GET /api/search. Field names mirror the
/// `Classes` columns so the query string reads like the table.
#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(rename = "Subj")]
    subj: Option<String>,
    #[serde(rename = "Crse")]
    crse: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Creds")]
    creds: Option<String>,
    #[serde(rename = "CRN")]
    crn: Option<String>,
    #[serde(rename = "Avail")]
    avail: Option<String>,
    #[serde(rename = "Max")]
    max: Option<String>,
    #[serde(rename = "Time")]
    time: Option<String>,
    #[serde(rename = "Day")]
    day: Option<String>,
    #[serde(rename = "Location")]
    location: Option<String>,
    #[serde(rename = "Instructor")]
    instructor: Option<String>,
    #[serde(rename = "Notes")]
    notes: Option<String>,
}

impl SearchQuery {
    fn filters(&self) -> Vec<(String, String)> {
        let fields = [
            ("Subj", &self.subj),
            ("Crse", &self.crse),
            ("Title", &self.title),
            ("Creds", &self.creds),
            ("CRN", &self.crn),
            ("Avail", &self.avail),
            ("Max", &self.max),
            ("Time", &self.time),
            ("Day", &self.day),
            ("Location", &self.location),
            ("Instructor", &self.instructor),
            ("Notes", &self.notes),
        ];
        fields
            .iter()
            .filter_map(|(col, v)| v.as_ref().map(|v| (col.to_string(), v.clone())))
            .collect()
    }
}

/// GET /api/search
/// Catalog passthrough: match sections by field equality/substring filters.
async fn search_handler(query: web::Query<SearchQuery>) -> impl Responder {
    let filters = query.into_inner().filters();
    if filters.is_empty() {
        return HttpResponse::BadRequest()
            .json(json!({"error": "At least one search parameter is required"}));
    }

    let conn = match db::open_connection() {
        Ok(c) => c,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .json(json!({"error": format!("failed to open classes db: {}", e)}));
        }
    };

    match db::search_sections(&conn, &filters) {
        Ok(results) => {
            HttpResponse::Ok().json(json!({"count": results.len(), "results": results}))
        }
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("search failed: {}", e)})),
    }
}

/// POST /api/generate_schedules
/// Body: JSON list of {"Subj": ..., "Code": ...}. Returns every
/// conflict-free schedule, or an empty result annotated with the requested
/// courses whose removal would unblock scheduling.
async fn generate_schedules_handler(body: web::Json<Vec<CourseRequest>>) -> impl Responder {
    let requests = body.into_inner();
    let started = Instant::now();

    // Zero requests short-circuits to the single empty schedule; no db work.
    let sections = if requests.is_empty() {
        Vec::new()
    } else {
        let conn = match db::open_connection() {
            Ok(c) => c,
            Err(e) => {
                return HttpResponse::InternalServerError()
                    .json(json!({"error": format!("failed to open classes db: {}", e)}));
            }
        };
        match db::fetch_sections_for_requests(&conn, &requests) {
            Ok(s) => s,
            Err(e) => {
                return HttpResponse::InternalServerError()
                    .json(json!({"error": format!("failed to fetch sections: {}", e)}));
            }
        }
    };

    let outcome = generate_schedules(&requests, &sections);
    let duration_ms = started.elapsed().as_millis() as i64;

    let schedule_count = match &outcome {
        ScheduleOutcome::Feasible(schedules) => schedules.len() as i64,
        ScheduleOutcome::Infeasible(_) => 0,
    };
    info!(
        courses = requests.len(),
        rows = sections.len(),
        schedules = schedule_count,
        duration_ms,
        "generate_schedules"
    );
    log_generation(&requests, duration_ms, schedule_count);

    match outcome {
        ScheduleOutcome::Feasible(schedules) => {
            let count = schedules.len();
            HttpResponse::Ok().json(json!({
                "schedules": schedules,
                "count": count,
            }))
        }
        ScheduleOutcome::Infeasible(conflicts) => HttpResponse::Ok().json(json!({
            "schedules": [],
            "count": 0,
            "conflicts": conflicts,
            "message": "No valid schedules found. The following classes have conflicts:",
        })),
    }
}

/// Record the call in the analytics log. Best effort only.
fn log_generation(requests: &[CourseRequest], duration_ms: i64, schedule_count: i64) {
    let request_json = serde_json::to_string(requests).unwrap_or_default();
    let result = analytics::open_analytics_connection()
        .and_then(|conn| analytics::record_query(&conn, duration_ms, &request_json, schedule_count));
    if let Err(e) = result {
        warn!("failed to record analytics entry: {}", e);
    }
}

/// GET /api/all_classes
/// Distinct (Subj, Crse) pairs, for populating course pickers.
async fn all_classes_handler() -> impl Responder {
    let conn = match db::open_connection() {
        Ok(c) => c,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .json(json!({"error": format!("failed to open classes db: {}", e)}));
        }
    };
    match db::list_courses(&conn) {
        Ok(courses) => {
            let out: Vec<serde_json::Value> = courses
                .into_iter()
                .map(|(subj, crse)| json!({"Subj": subj, "Crse": crse}))
                .collect();
            HttpResponse::Ok().json(out)
        }
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to list courses: {}", e)})),
    }
}

/// GET /help
async fn help_handler() -> impl Responder {
    let example = vec![
        CourseRequest {
            subj: "CS".to_string(),
            code: "1210".to_string(),
        },
        CourseRequest {
            subj: "MATH".to_string(),
            code: "1234".to_string(),
        },
    ];

    HttpResponse::Ok().json(json!({
        "description": "Course schedule search and combination API. GET /api/search filters the catalog (at least one column filter required, LIKE semantics). POST /api/generate_schedules takes a JSON list of desired courses and returns every non-conflicting combination of their sections, including linked lab/recitation sections. GET /api/all_classes lists the distinct courses on offer.",
        "generate_schedules_example": example,
        "search_example_query": "/api/search?Subj=CS&Crse=1210",
    }))
}

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    HttpServer::new(|| {
        App::new()
            .wrap(Cors::permissive())
            .route("/api/search", web::get().to(search_handler))
            .route(
                "/api/generate_schedules",
                web::post().to(generate_schedules_handler),
            )
            .route("/api/all_classes", web::get().to(all_classes_handler))
            .route("/help", web::get().to(help_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}
