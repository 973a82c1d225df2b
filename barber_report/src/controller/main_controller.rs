use crate::common::*;

use crate::utils_modules::time_utils::*;

use crate::model::appointment::appointment_table::*;

use crate::dto::{aggregation_result::*, chart_artifact::*, report_summary::*};

use crate::enums::{pipeline_outcome::*, report_kind::*};

use crate::errors::report_error::*;

use crate::traits::service_traits::{
    aggregation_service::*, appointment_service::*, chart_service::*,
};

pub const NO_DATA_MESSAGE: &str = "Nenhum agendamento encontrado.";
const PREVIEW_ROWS: usize = 5;

#[derive(Debug, new)]
pub struct MainController<A: AppointmentService, G: AggregationService, C: ChartService> {
    appointment_service: A,
    aggregation_service: G,
    chart_service: C,
}

impl<A: AppointmentService, G: AggregationService, C: ChartService> MainController<A, G, C> {
    #[doc = r#"
        Runs the report pipeline once.

        1. Fetches the appointments. A fetch failure has already been downgraded to an
           empty table by the appointment service.
        2. With no rows, prints the "no data" line once and stops without writing charts
        3. Otherwise builds every `ReportKind` in turn (aggregate, then render). A kind that
           fails is recorded and the next kind still runs.

        # Returns
        * `PipelineOutcome::NoData` or `PipelineOutcome::Completed` with the artifacts and failures
    "#]
    pub async fn main_task(&self) -> PipelineOutcome {
        info!("Report run started at {}", get_current_local_str());

        let table: AppointmentTable = self.appointment_service.fetch_appointments().await;

        if table.is_empty() {
            println!("{}", NO_DATA_MESSAGE);
            info!("[MainController->main_task] no appointments, no chart produced");
            return PipelineOutcome::NoData;
        }

        info!(
            "Fetched appointments preview ({} rows):\n{}",
            table.len(),
            table.head(PREVIEW_ROWS)
        );

        let mut summary: ReportSummary = ReportSummary::default();

        for kind in ReportKind::ALL {
            match self.generate_report(&table, kind).await {
                Ok(artifact) => {
                    info!("[{}] chart saved: {}", kind, artifact.path().display());
                    summary.artifacts.push(artifact);
                }
                Err(e) => {
                    error!("[MainController->main_task] [{}] {}", kind, e);
                    summary.failures.push(ReportFailure::new(kind, e));
                }
            }
        }

        PipelineOutcome::Completed(summary)
    }

    #[doc = "Aggregates and renders a single report kind"]
    async fn generate_report(
        &self,
        table: &AppointmentTable,
        kind: ReportKind,
    ) -> Result<ChartArtifact, ReportError> {
        let result: AggregationResult =
            self.aggregation_service
                .aggregate(table, kind.key_field(), kind.order())?;

        info!(
            "[{}] {} groups over {} records",
            kind,
            result.len(),
            result.total()
        );

        let artifact: ChartArtifact = self
            .chart_service
            .render_bar_chart(
                &result,
                kind.title(),
                kind.x_label(),
                kind.y_label(),
                kind.palette(),
                kind.file_name(),
            )
            .await?;

        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::appointment_record::*;
    use crate::enums::chart_palette::*;
    use crate::service::aggregation_service_impl::*;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    struct FixedAppointments {
        table: AppointmentTable,
    }

    #[async_trait]
    impl AppointmentService for FixedAppointments {
        async fn fetch_appointments(&self) -> AppointmentTable {
            self.table.clone()
        }
    }

    /// Writes the pairs as text so tests can inspect what would be drawn.
    #[derive(Clone)]
    struct TextChartService {
        output_dir: PathBuf,
        calls: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl ChartService for TextChartService {
        async fn render_bar_chart(
            &self,
            result: &AggregationResult,
            title: &str,
            _x_label: &str,
            _y_label: &str,
            _palette: ChartPalette,
            output_filename: &str,
        ) -> Result<ChartArtifact, RenderError> {
            self.calls.lock().unwrap().push(output_filename.to_string());

            std::fs::create_dir_all(&self.output_dir).map_err(|source| RenderError::CreateDir {
                path: self.output_dir.clone(),
                source,
            })?;

            let path = self.output_dir.join(output_filename);
            let body: String = result
                .pairs()
                .iter()
                .map(|p| format!("{}={}", p.key(), p.count()))
                .collect::<Vec<String>>()
                .join(",");
            std::fs::write(&path, body).map_err(|e| RenderError::Draw {
                chart: title.to_string(),
                path: path.clone(),
                message: e.to_string(),
            })?;

            Ok(ChartArtifact::new(title.to_string(), path))
        }
    }

    fn table(rows: Vec<Value>) -> AppointmentTable {
        AppointmentTable::from_records(
            rows.into_iter()
                .map(|v| serde_json::from_value::<AppointmentRecord>(v).unwrap())
                .collect(),
        )
    }

    fn controller(
        table: AppointmentTable,
        output_dir: &Path,
    ) -> (
        MainController<FixedAppointments, AggregationServiceImpl, TextChartService>,
        Arc<Mutex<Vec<String>>>,
    ) {
        let calls: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let chart_service = TextChartService {
            output_dir: output_dir.to_path_buf(),
            calls: Arc::clone(&calls),
        };

        (
            MainController::new(
                FixedAppointments { table },
                AggregationServiceImpl::new(),
                chart_service,
            ),
            calls,
        )
    }

    fn full_rows() -> Vec<Value> {
        vec![
            json!({"barbeiro_nome": "Carlos", "corte_nome": "Degradê", "cliente_nome": "João"}),
            json!({"barbeiro_nome": "Carlos", "corte_nome": "Social", "cliente_nome": "Ana"}),
            json!({"barbeiro_nome": "Bruno", "corte_nome": "Degradê", "cliente_nome": "João"}),
        ]
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn empty_table_produces_no_charts() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("assets");
        let (controller, calls) = controller(AppointmentTable::empty(), &output_dir);

        let outcome = controller.main_task().await;

        assert!(matches!(outcome, PipelineOutcome::NoData));
        assert!(calls.lock().unwrap().is_empty());
        assert!(!output_dir.exists());
    }

    #[tokio::test]
    async fn writes_all_three_charts() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("assets");
        let (controller, calls) = controller(table(full_rows()), &output_dir);

        let summary = match controller.main_task().await {
            PipelineOutcome::Completed(summary) => summary,
            other => panic!("expected completed run, got {other:?}"),
        };

        assert!(!summary.has_failures());
        assert_eq!(summary.artifacts.len(), 3);
        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                "agendamentos_por_barbeiro.jpg",
                "agendamentos_por_corte.jpg",
                "media_cortes_por_cliente.jpg"
            ]
        );

        let barber = std::fs::read_to_string(output_dir.join("agendamentos_por_barbeiro.jpg")).unwrap();
        assert_eq!(barber, "Carlos=2,Bruno=1");

        let client = std::fs::read_to_string(output_dir.join("media_cortes_por_cliente.jpg")).unwrap();
        assert_eq!(client, "Ana=1,João=2");
    }

    #[tokio::test]
    async fn schema_error_does_not_stop_other_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("assets");

        let mut rows = full_rows();
        rows.push(json!({"barbeiro_nome": "Bruno", "cliente_nome": "Ana"}));
        let (controller, _) = controller(table(rows), &output_dir);

        let summary = match controller.main_task().await {
            PipelineOutcome::Completed(summary) => summary,
            other => panic!("expected completed run, got {other:?}"),
        };

        assert_eq!(summary.artifacts.len(), 2);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].kind, ReportKind::ServiceCount);
        assert!(matches!(
            &summary.failures[0].error,
            ReportError::Schema(SchemaError::MissingField { rows, .. }) if rows == &vec![3]
        ));
        assert!(summary.failure_report().contains("corte_nome"));

        /* the client chart counts every row of a client, with or without a service */
        let client = std::fs::read_to_string(output_dir.join("media_cortes_por_cliente.jpg")).unwrap();
        assert_eq!(client, "Ana=2,João=2");

        assert_eq!(
            file_names(&output_dir),
            vec!["agendamentos_por_barbeiro.jpg", "media_cortes_por_cliente.jpg"]
        );
    }

    #[tokio::test]
    async fn rerun_overwrites_the_same_files() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("assets");

        let (first, _) = controller(table(full_rows()), &output_dir);
        first.main_task().await;
        first.main_task().await;

        assert_eq!(file_names(&output_dir).len(), 3);

        let (second, _) = controller(
            table(vec![json!({"barbeiro_nome": "Rui", "corte_nome": "Social", "cliente_nome": "Leo"})]),
            &output_dir,
        );
        second.main_task().await;

        assert_eq!(file_names(&output_dir).len(), 3);
        let barber = std::fs::read_to_string(output_dir.join("agendamentos_por_barbeiro.jpg")).unwrap();
        assert_eq!(barber, "Rui=1");
    }

    #[tokio::test]
    async fn render_failures_are_collected_per_kind() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("assets");
        std::fs::write(&output_dir, b"blocking file").unwrap();

        let (controller, calls) = controller(table(full_rows()), &output_dir);

        let summary = match controller.main_task().await {
            PipelineOutcome::Completed(summary) => summary,
            other => panic!("expected completed run, got {other:?}"),
        };

        assert_eq!(calls.lock().unwrap().len(), 3);
        assert!(summary.artifacts.is_empty());
        assert_eq!(summary.failures.len(), 3);
        assert!(summary
            .failures
            .iter()
            .all(|f| matches!(f.error, ReportError::Render(RenderError::CreateDir { .. }))));
        assert_eq!(summary.failure_report().lines().count(), 3);
    }
}
