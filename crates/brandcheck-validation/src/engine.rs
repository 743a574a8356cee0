//! ComplianceEngine: runs the four criterion evaluators with fault isolation
//! and aggregates their results into a ComplianceReport.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use brandcheck_core::config::{BrandcheckConfig, EngineConfig};
use brandcheck_core::constants::MAX_TOTAL_SCORE;
use brandcheck_core::errors::ComplianceError;
use brandcheck_core::models::{AssessmentRequest, ComplianceReport, Criterion, CriterionResult};
use brandcheck_core::traits::{
    ICriterionEvaluator, IDocumentRasterizer, IDocumentTextExtractor, IFontNameExtractor,
    IImageDecoder, ITextJudge, IVisionJudge,
};
use brandcheck_observability::tracing_setup::events;
use brandcheck_observability::{assessment_span, criterion_span, AssessmentMetrics, Outcome};
use rayon::prelude::*;
use tracing::{warn, Span};

use crate::criteria::{FontEvaluator, LogoColorEvaluator, LogoPositionEvaluator, PaletteEvaluator};

/// The external capabilities the standard evaluators are built from.
///
/// Groups the collaborators so the engine constructor stays small.
#[derive(Clone)]
pub struct Collaborators {
    pub documents: Arc<dyn IDocumentTextExtractor>,
    pub rasterizer: Arc<dyn IDocumentRasterizer>,
    pub images: Arc<dyn IImageDecoder>,
    pub fonts: Arc<dyn IFontNameExtractor>,
    pub vision: Arc<dyn IVisionJudge>,
    pub text: Arc<dyn ITextJudge>,
}

/// The 4-criterion compliance engine.
///
/// Stateless between assessments apart from optional metrics, so one engine
/// can serve many requests, including concurrently.
pub struct ComplianceEngine {
    evaluators: Vec<Box<dyn ICriterionEvaluator>>,
    config: EngineConfig,
    metrics: Option<Mutex<AssessmentMetrics>>,
}

impl ComplianceEngine {
    /// Build the standard Font, LogoPosition, LogoColor, ColorPalette evaluators.
    pub fn new(collaborators: Collaborators, config: &BrandcheckConfig) -> Self {
        let Collaborators {
            documents,
            rasterizer,
            images,
            fonts,
            vision,
            text,
        } = collaborators;

        let evaluators: Vec<Box<dyn ICriterionEvaluator>> = vec![
            Box::new(FontEvaluator::new(rasterizer.clone(), images.clone(), fonts)),
            Box::new(LogoPositionEvaluator::new(documents.clone(), vision.clone())),
            Box::new(LogoColorEvaluator::new(documents, vision)),
            Box::new(
                PaletteEvaluator::new(rasterizer, images, text)
                    .with_preview_len(config.palette.preview_len),
            ),
        ];
        Self::with_evaluators(evaluators, config.engine.clone())
    }

    /// Build an engine over a custom evaluator set.
    ///
    /// Evaluators are stably ordered by criterion and only the first one
    /// supplied for a criterion is kept. A criterion with no evaluator is
    /// still reported, as a failure scoring 0.
    pub fn with_evaluators(
        mut evaluators: Vec<Box<dyn ICriterionEvaluator>>,
        config: EngineConfig,
    ) -> Self {
        evaluators.sort_by_key(|e| e.criterion().index());
        let supplied = evaluators.len();
        evaluators.dedup_by_key(|e| e.criterion());
        if evaluators.len() < supplied {
            warn!(
                dropped = supplied - evaluators.len(),
                "duplicate criterion evaluators ignored"
            );
        }
        for criterion in Criterion::ALL {
            if !evaluators.iter().any(|e| e.criterion() == criterion) {
                warn!(criterion = criterion.as_str(), "no evaluator configured");
            }
        }

        let metrics = config
            .record_metrics
            .then(|| Mutex::new(AssessmentMetrics::new()));
        Self {
            evaluators,
            config,
            metrics,
        }
    }

    /// Assess one request. Never fails: every criterion in `Criterion::ALL`
    /// yields exactly one result, in that order.
    pub fn assess(&self, request: &AssessmentRequest) -> ComplianceReport {
        let span = assessment_span!(
            request.slide().display(),
            request.brand_kit().display()
        );
        let _guard = span.enter();

        let results: Vec<CriterionResult> = if self.config.parallel {
            let parent = Span::current();
            Criterion::ALL[..]
                .par_iter()
                .map(|&criterion| parent.in_scope(|| self.run_criterion(criterion, request)))
                .collect()
        } else {
            Criterion::ALL
                .iter()
                .map(|&criterion| self.run_criterion(criterion, request))
                .collect()
        };

        let report = ComplianceReport::from_results(results);
        events::assessment_completed(report.total_score(), MAX_TOTAL_SCORE);
        self.record(|m| m.record_report(&report));
        report
    }

    /// Snapshot of the recorded metrics. `None` when metrics are disabled.
    pub fn metrics(&self) -> Option<AssessmentMetrics> {
        let metrics = self.metrics.as_ref()?;
        match metrics.lock() {
            Ok(guard) => Some(guard.clone()),
            Err(poisoned) => Some(poisoned.into_inner().clone()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn run_criterion(&self, criterion: Criterion, request: &AssessmentRequest) -> CriterionResult {
        match self.evaluators.iter().find(|e| e.criterion() == criterion) {
            Some(evaluator) => self.run_isolated(evaluator.as_ref(), request),
            None => {
                let reason = "no evaluator configured";
                events::criterion_failed(criterion.as_str(), "not_configured", reason);
                self.record(|m| m.record_outcome(criterion, Outcome::Failed));
                CriterionResult::non_compliant(criterion, format!("{criterion} check failed: {reason}"))
            }
        }
    }

    fn run_isolated(
        &self,
        evaluator: &dyn ICriterionEvaluator,
        request: &AssessmentRequest,
    ) -> CriterionResult {
        let criterion = evaluator.criterion();
        let span = criterion_span!(criterion.as_str());
        let _guard = span.enter();

        let outcome = catch_unwind(AssertUnwindSafe(|| evaluator.evaluate(request)));
        let (result, recorded) = match outcome {
            Ok(Ok(result)) => {
                events::criterion_scored(criterion.as_str(), result.verdict.score());
                let verdict = result.verdict;
                (result, Outcome::Scored(verdict))
            }
            Ok(Err(error)) => {
                let result = CriterionResult::from_error(criterion, &error);
                match error {
                    ComplianceError::AmbiguousJudgment { .. } => {
                        let verdict = result.verdict;
                        events::criterion_scored(criterion.as_str(), verdict.score());
                        (result, Outcome::Scored(verdict))
                    }
                    other => {
                        events::criterion_failed(
                            criterion.as_str(),
                            other.kind(),
                            &other.to_string(),
                        );
                        (result, Outcome::Failed)
                    }
                }
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                events::criterion_panicked(criterion.as_str(), &message);
                (CriterionResult::from_panic(criterion, &message), Outcome::Panicked)
            }
        };

        self.record(|m| m.record_outcome(criterion, recorded));
        result
    }

    fn record(&self, f: impl FnOnce(&mut AssessmentMetrics)) {
        let Some(metrics) = &self.metrics else {
            return;
        };
        match metrics.lock() {
            Ok(mut guard) => f(&mut *guard),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
