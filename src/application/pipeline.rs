use crate::application::activity_log::ActivityLog;
use crate::application::collector::Collector;
use crate::application::composer::ReportComposer;
use crate::application::insights::InsightGenerator;
use crate::application::sentiment::SentimentEstimator;
use crate::domain::entities::activity::StageStatus;
use crate::domain::entities::analysis::Analysis;
use crate::domain::entities::collected_data::CollectedData;
use crate::domain::entities::query::Query;
use crate::domain::entities::report::Report;
use crate::domain::error::DomainError;
use crate::domain::ports::report_repository::ReportRepository;
use crate::domain::ports::stage::Stage;
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PipelineState {
    #[default]
    Idle,
    Collecting,
    Analyzing,
    Composing,
    Done,
}

impl PipelineState {
    /// Label used in the activity log for the component doing the work.
    pub fn agent(&self) -> &'static str {
        match self {
            PipelineState::Idle | PipelineState::Done => "Pipeline",
            PipelineState::Collecting => "Scraper Agent",
            PipelineState::Analyzing => "Analyzer Agent",
            PipelineState::Composing => "Reporter Agent",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::Collecting => write!(f, "collecting"),
            PipelineState::Analyzing => write!(f, "analyzing"),
            PipelineState::Composing => write!(f, "composing"),
            PipelineState::Done => write!(f, "done"),
        }
    }
}

/// Shared state threaded through every run: report history and activity log.
pub struct PipelineContext {
    history: Arc<dyn ReportRepository>,
    activity: ActivityLog,
}

impl PipelineContext {
    pub fn new(history: Arc<dyn ReportRepository>) -> Self {
        Self {
            history,
            activity: ActivityLog::new(),
        }
    }

    pub fn history(&self) -> &Arc<dyn ReportRepository> {
        &self.history
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Wraps one phase with a start entry and a completion entry.
    /// `stages` names the stages that run inside the phase.
    pub async fn traced<T, F>(
        &self,
        state: PipelineState,
        stages: &[&'static str],
        started: String,
        work: F,
        finished: impl FnOnce(&T) -> String,
    ) -> T
    where
        F: Future<Output = T>,
    {
        tracing::debug!(phase = %state, ?stages, "phase started");
        self.activity.record(state.agent(), started, StageStatus::Active);
        let out = work.await;
        self.activity
            .record(state.agent(), finished(&out), StageStatus::Completed);
        out
    }
}

pub struct PipelineStages {
    pub collector: Collector,
    pub sentiment: SentimentEstimator,
    pub insights: InsightGenerator,
    pub composer: ReportComposer,
}

/// Runs collection → analysis → composition for one query at a time per
/// call. Cheap to clone; clones share stages and context.
#[derive(Clone)]
pub struct ReportPipeline {
    stages: Arc<PipelineStages>,
    context: Arc<PipelineContext>,
}

#[derive(Clone, Default)]
struct RunState(Arc<Mutex<PipelineState>>);

impl RunState {
    fn set(&self, state: PipelineState) {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = state;
    }

    fn get(&self) -> PipelineState {
        *self.0.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ReportPipeline {
    pub fn new(stages: PipelineStages, context: Arc<PipelineContext>) -> Self {
        Self {
            stages: Arc::new(stages),
            context,
        }
    }

    pub fn context(&self) -> &Arc<PipelineContext> {
        &self.context
    }

    /// Generates a report and appends it to history.
    ///
    /// Stages never fail, so the only errors are a history write failure or
    /// a stage defect (panic). A defect aborts only this run: nothing is
    /// added to history and the failure is logged.
    pub async fn run(&self, query: Query) -> Result<Report, DomainError> {
        let state = RunState::default();
        let this = self.clone();
        let task_state = state.clone();
        let handle = tokio::spawn(async move { this.execute(query, &task_state).await });

        match handle.await {
            Ok(result) => result,
            Err(join_err) => {
                let stage = state.get();
                let reason = if join_err.is_panic() {
                    panic_message(join_err.into_panic())
                } else {
                    join_err.to_string()
                };
                tracing::error!(stage = %stage, %reason, "pipeline run aborted by stage defect");
                self.context.activity.record(
                    stage.agent(),
                    format!("Run aborted while {stage}: {reason}"),
                    StageStatus::Failed,
                );
                Err(DomainError::StageDefect {
                    stage: stage.to_string(),
                    reason,
                })
            }
        }
    }

    async fn execute(&self, query: Query, state: &RunState) -> Result<Report, DomainError> {
        let ctx = &self.context;
        let stages = &self.stages;

        state.set(PipelineState::Collecting);
        let data = ctx
            .traced(
                PipelineState::Collecting,
                &[stages.collector.name()],
                format!("Scraping data for: {}", query.text()),
                stages.collector.run(&query),
                |d: &CollectedData| {
                    format!(
                        "Completed scraping for: {} (Found {} articles)",
                        d.query.text(),
                        d.articles.len()
                    )
                },
            )
            .await;

        state.set(PipelineState::Analyzing);
        let analysis = ctx
            .traced(
                PipelineState::Analyzing,
                &[stages.insights.name(), stages.sentiment.name()],
                "Analyzing market data...".to_string(),
                async {
                    let insights = stages.insights.run(&data).await;
                    let assessment = stages.sentiment.run(&data.query).await;
                    Analysis::new(assessment, insights)
                },
                |a: &Analysis| format!("Analysis completed ({} sentiment)", a.sentiment_trend),
            )
            .await;

        state.set(PipelineState::Composing);
        let input = (data, analysis);
        let report = ctx
            .traced(
                PipelineState::Composing,
                &[stages.composer.name()],
                "Generating comprehensive report...".to_string(),
                stages.composer.run(&input),
                |r: &Report| format!("Report generated successfully: {}", r.title),
            )
            .await;

        ctx.history.append(&report)?;
        state.set(PipelineState::Done);
        tracing::info!(report_id = %report.id, "report added to history");
        Ok(report)
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
