/*
Description : Fetches completed appointments from the scheduling service and renders
              per-barber, per-service and per-client bar charts into the assets directory.

History     : 2024-11-02       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod errors;

mod repository;
use repository::scheduling_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod dto;

mod enums;
use enums::pipeline_outcome::*;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    aggregation_service_impl::*, appointment_service_impl::*, chart_service_impl::*,
    viewer_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    /* global logger and initial setup */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Appointment report start!");

    let total_config: TotalConfig = TotalConfig::load().unwrap_or_else(|e| {
        error!("[main] Failed to load configuration. {:?}", e);
        std::process::exit(1)
    });

    let scheduling_repository: SchedulingRepositoryImpl =
        SchedulingRepositoryImpl::new(total_config.scheduler()).unwrap_or_else(|e| {
            error!(
                "[main] An issue occurred while initializing scheduling_repository. {:?}",
                e
            );
            std::process::exit(1)
        });

    let output_dir: PathBuf = total_config
        .report()
        .output_dir_under(&pipeline_root(&env_lookup));
    info!("Charts will be written to {}", output_dir.display());

    /* dependency injection */
    let appointment_service: AppointmentServiceImpl<SchedulingRepositoryImpl> =
        AppointmentServiceImpl::new(scheduling_repository);
    let aggregation_service: AggregationServiceImpl = AggregationServiceImpl::new();
    let viewer_service: SystemViewerServiceImpl =
        SystemViewerServiceImpl::new(*total_config.report().open_viewer());
    let chart_service: ChartServiceImpl<SystemViewerServiceImpl> =
        ChartServiceImpl::new(output_dir, viewer_service);

    let main_controller: MainController<
        AppointmentServiceImpl<SchedulingRepositoryImpl>,
        AggregationServiceImpl,
        ChartServiceImpl<SystemViewerServiceImpl>,
    > = MainController::new(appointment_service, aggregation_service, chart_service);

    match main_controller.main_task().await {
        PipelineOutcome::NoData => {
            info!("Appointment report finished without data.");
        }
        PipelineOutcome::Completed(summary) => {
            info!(
                "Appointment report finished: {} chart(s) written.",
                summary.artifacts.len()
            );

            if summary.has_failures() {
                error!(
                    "[main] {} chart(s) failed:\n{}",
                    summary.failures.len(),
                    summary.failure_report()
                );
                std::process::exit(1);
            }
        }
    }
}
