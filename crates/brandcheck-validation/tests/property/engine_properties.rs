use brandcheck_core::config::EngineConfig;
use brandcheck_core::models::{AssessmentRequest, Criterion, CriterionResult, Verdict};
use brandcheck_core::traits::ICriterionEvaluator;
use brandcheck_core::{ComplianceError, ComplianceResult};
use brandcheck_validation::ComplianceEngine;
use proptest::prelude::*;

/// 0..=2 are verdicts, 3 is an error, 4 is a panic.
struct ScriptedEvaluator {
    criterion: Criterion,
    mode: u8,
}

impl ICriterionEvaluator for ScriptedEvaluator {
    fn criterion(&self) -> Criterion {
        self.criterion
    }

    fn evaluate(&self, _request: &AssessmentRequest) -> ComplianceResult<CriterionResult> {
        let verdict = match self.mode {
            0 => Verdict::Compliant,
            1 => Verdict::NonCompliant,
            2 => Verdict::Unclear,
            3 => return Err(ComplianceError::model_unavailable("m", "down")),
            _ => panic!("scripted panic"),
        };
        Ok(CriterionResult::new(self.criterion, verdict, "scripted"))
    }
}

fn engine(modes: &[u8], parallel: bool) -> ComplianceEngine {
    let evaluators: Vec<Box<dyn ICriterionEvaluator>> = Criterion::ALL
        .iter()
        .zip(modes)
        .map(|(criterion, mode)| {
            Box::new(ScriptedEvaluator {
                criterion: *criterion,
                mode: *mode,
            }) as Box<dyn ICriterionEvaluator>
        })
        .collect();
    ComplianceEngine::with_evaluators(
        evaluators,
        EngineConfig {
            parallel,
            record_metrics: false,
        },
    )
}

proptest! {
    #[test]
    fn total_is_sum_of_positive_verdicts(modes in prop::collection::vec(0u8..5, 4), parallel in any::<bool>()) {
        let report = engine(&modes, parallel).assess(&AssessmentRequest::new("s.png", "k.pdf"));
        let expected: u8 = modes.iter().filter(|m| **m == 0).count() as u8;
        prop_assert_eq!(report.total_score(), expected);
        prop_assert!(report.total_score() <= 4);
        prop_assert_eq!(report.results().len(), 4);
    }

    #[test]
    fn every_result_scores_in_range(modes in prop::collection::vec(0u8..5, 4)) {
        let report = engine(&modes, false).assess(&AssessmentRequest::new("s.png", "k.pdf"));
        for (result, criterion) in report.results().iter().zip(Criterion::ALL) {
            prop_assert_eq!(result.criterion, criterion);
            prop_assert!((-1..=1).contains(&result.verdict.score()));
            prop_assert!(!result.explanation.is_empty());
        }
    }

    #[test]
    fn sequential_and_parallel_agree(modes in prop::collection::vec(0u8..4, 4)) {
        let request = AssessmentRequest::new("s.png", "k.pdf");
        let sequential = engine(&modes, false).assess(&request);
        let parallel = engine(&modes, true).assess(&request);
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn arbitrary_evaluator_sets_report_each_criterion_once(
        picks in prop::collection::vec((0usize..4, 0u8..5), 0..10),
        parallel in any::<bool>(),
    ) {
        let evaluators: Vec<Box<dyn ICriterionEvaluator>> = picks
            .iter()
            .map(|(index, mode)| {
                Box::new(ScriptedEvaluator {
                    criterion: Criterion::ALL[*index],
                    mode: *mode,
                }) as Box<dyn ICriterionEvaluator>
            })
            .collect();
        let engine = ComplianceEngine::with_evaluators(
            evaluators,
            EngineConfig { parallel, record_metrics: false },
        );
        let report = engine.assess(&AssessmentRequest::new("s.png", "k.pdf"));

        let order: Vec<Criterion> = report.results().iter().map(|r| r.criterion).collect();
        prop_assert_eq!(order, Criterion::ALL.to_vec());
        prop_assert!(report.total_score() <= 4);
        prop_assert_eq!(report.to_transport().reasoning.len(), 4);
    }
}
