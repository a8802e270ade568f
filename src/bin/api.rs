use exam_relay::api::{SubmissionHandler, function_handler};
use exam_relay::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    exam_relay::setup_logging();

    let handler = SubmissionHandler::from_config(AppConfig::from_env());
    let handler = &handler;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
        function_handler(handler, event).await
    }))
    .await
}
