pub mod session_handler;
pub mod status_handler;

use actix_web::web;

use crate::errors::AppError;

pub use session_handler::{
    create_session, download_summary, download_tips, end_session, get_session, grade_quiz,
    navigate, record_answer, reset_quiz, submit_quiz, submit_summary, submit_tips,
};
pub use status_handler::{health_check, index, missing_credential, status};

/// Routes served when the app is configured with an API key.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(index)
        .service(health_check)
        .service(status)
        .service(create_session)
        .service(get_session)
        .service(end_session)
        .service(navigate)
        .service(submit_summary)
        .service(download_summary)
        .service(submit_quiz)
        .service(record_answer)
        .service(grade_quiz)
        .service(reset_quiz)
        .service(submit_tips)
        .service(download_tips);
}

/// Routes served without an API key: the page loads, every view is refused.
pub fn configure_locked(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(health_check)
        .route("/{tail:.*}", web::route().to(missing_credential));
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}
