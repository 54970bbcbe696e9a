use crate::errors::AppError;
use crate::models::{
    CreateTaskRequest, ModeResponse, SelectDayRequest, SelectedDayResponse, SetModeRequest,
    StatsResponse, Task,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_stats(&data)))
}

pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    let data = state.data.lock().await;
    Json(data.tasks.clone())
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<Json<Task>, AppError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }

    let mut data = state.data.lock().await;
    let task = data.add_task(title.to_string(), payload.weekday);
    info!("created task {} on {:?}", task.id, task.weekday);
    Ok(Json(task))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, AppError> {
    let mut data = state.data.lock().await;
    let task = data
        .tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or_else(|| AppError::not_found(format!("no task with id {id}")))?;
    task.completed = !task.completed;
    Ok(Json(task.clone()))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<(), AppError> {
    let mut data = state.data.lock().await;
    let before = data.tasks.len();
    data.tasks.retain(|task| task.id != id);
    if data.tasks.len() == before {
        return Err(AppError::not_found(format!("no task with id {id}")));
    }
    Ok(())
}

pub async fn set_mode(
    State(state): State<AppState>,
    Json(payload): Json<SetModeRequest>,
) -> Json<ModeResponse> {
    let mut data = state.data.lock().await;
    data.weekend_mode = payload.weekend;
    Json(ModeResponse {
        weekend_mode: data.weekend_mode,
    })
}

pub async fn select_day(
    State(state): State<AppState>,
    Json(payload): Json<SelectDayRequest>,
) -> Json<SelectedDayResponse> {
    let mut data = state.data.lock().await;
    data.selected_weekday = payload.weekday;
    Json(SelectedDayResponse {
        selected_weekday: data.selected_weekday,
    })
}
