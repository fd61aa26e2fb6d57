use actix_web::{web, App, HttpServer, HttpResponse, Result, middleware};
use chrono::Local;
use serde::Serialize;
use std::sync::Mutex;
use crate::display::render_schedule;
use crate::error::StoreError;
use crate::form::{build_report, InputStore, ScheduleInput};
use crate::schedule::{schedule_groups, slot_to_label, slot_to_notation, GroupSchedule, PlayCount};

/// Last generated schedule together with the form it came from
pub struct GeneratedSchedule {
    pub input: ScheduleInput,
    pub schedule: GroupSchedule,
}

pub struct AppState {
    pub store: InputStore,
    pub last_generated: Mutex<Option<GeneratedSchedule>>,
}

impl AppState {
    pub fn new(store: InputStore) -> Self {
        AppState {
            store,
            last_generated: Mutex::new(None),
        }
    }
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    success: bool,
    groups: Vec<GroupView>,
    play_counts: PlayCount,
    text: String,
}

#[derive(Serialize)]
pub struct GroupView {
    slot: String,
    notation: String,
    reserved: Option<String>,
    players: Vec<String>,
}

fn error_json(message: String) -> serde_json::Value {
    serde_json::json!({"success": false, "error": message})
}

fn store_failure(e: StoreError) -> HttpResponse {
    log::error!("Input store failure: {}", e);
    HttpResponse::InternalServerError().json(error_json(e.to_string()))
}

fn lock_failure<T>(_: T) -> actix_web::Error {
    actix_web::error::ErrorInternalServerError("Schedule state unavailable")
}

// Generate schedule endpoint
async fn create_schedule(
    req: web::Json<ScheduleInput>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let input = req.into_inner();
    let validated = match input.validate() {
        Ok(validated) => validated,
        Err(e) => {
            log::warn!("Rejected schedule input: {}", e);
            return Ok(HttpResponse::BadRequest().json(error_json(e.to_string())));
        }
    };

    let schedule = schedule_groups(&validated.roster, &validated.slots, validated.group_size);
    log::debug!("Generated schedule: {:?}", schedule);

    let groups = schedule
        .groups
        .iter()
        .map(|g| GroupView {
            slot: slot_to_label(&g.slot),
            notation: slot_to_notation(&g.slot),
            reserved: g.reserved.clone(),
            players: g.players.clone(),
        })
        .collect();
    let response = ScheduleResponse {
        success: true,
        groups,
        play_counts: schedule.play_counts.clone(),
        text: render_schedule(&schedule),
    };

    *state.last_generated.lock().map_err(lock_failure)? = Some(GeneratedSchedule { input, schedule });

    Ok(HttpResponse::Ok().json(response))
}

// Saved input endpoints
async fn load_input(state: web::Data<AppState>) -> Result<HttpResponse> {
    match state.store.load() {
        Ok(saved) => Ok(HttpResponse::Ok().json(saved.unwrap_or_default())),
        Err(e) => Ok(store_failure(e)),
    }
}

async fn save_input(
    req: web::Json<ScheduleInput>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    match state.store.save(&req) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({"success": true}))),
        Err(e) => Ok(store_failure(e)),
    }
}

// Text report of the last generated schedule
async fn export_report(state: web::Data<AppState>) -> Result<HttpResponse> {
    let last = state.last_generated.lock().map_err(lock_failure)?;

    if let Some(ref generated) = *last {
        let report = build_report(&generated.input, &generated.schedule, Local::now());
        Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"golf_schedule.txt\""))
            .body(report))
    } else {
        Ok(HttpResponse::NotFound().json(error_json("No schedule generated yet".to_string())))
    }
}

// HTML page handler
async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/api/schedule", web::post().to(create_schedule))
        .route("/api/input", web::get().to(load_input))
        .route("/api/input", web::post().to(save_input))
        .route("/api/export", web::get().to(export_report));
}

pub async fn start_server(port: u16, store: InputStore) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(store));

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
