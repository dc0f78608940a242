use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use casework_core::health::healthz;
use casework_core::middleware::{propagate_request_id_layer, request_id_layer};
use casework_domain::family::Family;
use casework_domain::intervention::{
    FamilyIntervention, IndividualIntervention, InstitutionalIntervention,
};
use casework_domain::student::Student;

use crate::domain::types::Document;
use crate::handlers::{
    health::readyz,
    record::{create_record, delete_record, get_record, list_records, update_record},
    reset::reset_database,
    student::{list_students, set_student_status},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Admin
        .route("/admin/reset", post(reset_database))
        // Students
        .route(
            "/students",
            get(list_students).post(create_record::<Student>),
        )
        .route("/students/{id}", record_item::<Student>())
        .route("/students/{id}/status", put(set_student_status))
        // Families
        .route("/families", record_collection::<Family>())
        .route("/families/{id}", record_item::<Family>())
        // Interventions
        .route(
            "/interventions/individual",
            record_collection::<IndividualIntervention>(),
        )
        .route(
            "/interventions/individual/{id}",
            record_item::<IndividualIntervention>(),
        )
        .route(
            "/interventions/family",
            record_collection::<FamilyIntervention>(),
        )
        .route(
            "/interventions/family/{id}",
            record_item::<FamilyIntervention>(),
        )
        .route(
            "/interventions/institutional",
            record_collection::<InstitutionalIntervention>(),
        )
        .route(
            "/interventions/institutional/{id}",
            record_item::<InstitutionalIntervention>(),
        )
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}

fn record_collection<T: Document>() -> axum::routing::MethodRouter<AppState> {
    get(list_records::<T>).post(create_record::<T>)
}

fn record_item<T: Document>() -> axum::routing::MethodRouter<AppState> {
    get(get_record::<T>)
        .patch(update_record::<T>)
        .delete(delete_record::<T>)
}
