use shared::{PredictionResponse, RecommendationResponse};

/// Which view the app is showing. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    Upload,
    Loading(LoadingStage),
    Results,
}

/// Sub-stage of the loading screen. `Analyzing` is user feedback only;
/// no request is in flight while it is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingStage {
    Predicting,
    Analyzing,
    Recommending,
}

/// Analyze was invoked with no image selected.
#[derive(Debug, PartialEq, Eq)]
pub struct NoImageSelected;

/// The analysis flow: selected image, view state, and the result pair.
///
/// Prediction and recommendation live in one slot so they are either
/// both absent (Upload/Loading) or both present (Results). Generic over
/// the image handle type; dropping a handle releases its preview
/// resource, so replacement and reset just drop the old value.
pub struct Flow<I> {
    state: FlowState,
    selected: Option<I>,
    analysis: Option<(PredictionResponse, RecommendationResponse)>,
}

impl<I> Flow<I> {
    pub fn new() -> Self {
        Self {
            state: FlowState::Upload,
            selected: None,
            analysis: None,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FlowState::Loading(_))
    }

    pub fn selected(&self) -> Option<&I> {
        self.selected.as_ref()
    }

    pub fn results(&self) -> Option<(&PredictionResponse, &RecommendationResponse)> {
        self.analysis.as_ref().map(|(p, r)| (p, r))
    }

    /// Stores a new selection, dropping (and thereby releasing) any
    /// prior one. Only honored in the Upload state; a selection cannot
    /// change out from under a running analysis or a rendered result.
    pub fn select(&mut self, image: I) -> bool {
        if self.state != FlowState::Upload {
            return false;
        }
        self.selected = Some(image);
        true
    }

    /// Clears the current selection, releasing its preview handle.
    pub fn remove_selection(&mut self) -> bool {
        if self.state != FlowState::Upload {
            return false;
        }
        self.selected.take().is_some()
    }

    /// Starts an analysis: Upload -> Loading(Predicting).
    pub fn begin(&mut self) -> Result<&I, NoImageSelected> {
        match self.selected.as_ref() {
            Some(image) if self.state == FlowState::Upload => {
                self.state = FlowState::Loading(LoadingStage::Predicting);
                Ok(image)
            }
            _ => Err(NoImageSelected),
        }
    }

    /// Advances the loading sub-stage. Ignored outside Loading.
    pub fn stage(&mut self, stage: LoadingStage) -> bool {
        if self.is_loading() {
            self.state = FlowState::Loading(stage);
            true
        } else {
            false
        }
    }

    /// Finishes an analysis: Loading(_) -> Results, storing both
    /// payloads at once.
    pub fn complete(
        &mut self,
        prediction: PredictionResponse,
        recommendation: RecommendationResponse,
    ) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.analysis = Some((prediction, recommendation));
        self.state = FlowState::Results;
        true
    }

    /// Aborts a failed analysis: Loading(_) -> Upload. The selection is
    /// preserved so the user need not re-upload before retrying.
    pub fn fail(&mut self) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.analysis = None;
        self.state = FlowState::Upload;
        true
    }

    /// Returns to Upload, dropping the selection and both payloads.
    pub fn reset(&mut self) {
        self.state = FlowState::Upload;
        self.selected = None;
        self.analysis = None;
    }
}

impl<I> Default for Flow<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Badge bucket for the top prediction's confidence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceLevel::High
        } else if confidence >= 0.6 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High Confidence",
            ConfidenceLevel::Medium => "Medium Confidence",
            ConfidenceLevel::Low => "Low Confidence",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "badge-high",
            ConfidenceLevel::Medium => "badge-medium",
            ConfidenceLevel::Low => "badge-low",
        }
    }
}

/// Confidence on a 0-1 scale, displayed as a whole percent.
pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Prediction;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts drops so tests can assert that preview handles are
    /// released exactly once per selection.
    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn prediction(confidence: f64) -> PredictionResponse {
        PredictionResponse {
            filename: "aphid.jpg".to_string(),
            predictions: vec![Prediction {
                class_name: "aphid".to_string(),
                confidence,
            }],
        }
    }

    fn recommendation() -> RecommendationResponse {
        RecommendationResponse {
            pest_name: "Aphid".to_string(),
            pest_info: "Small sap-sucking insects.".to_string(),
            ipm_solutions: vec!["Introduce ladybugs.".to_string()],
            chemical_solutions: vec![],
            prevention_tips: vec!["Inspect new plants.".to_string()],
        }
    }

    #[test]
    fn select_then_remove_releases_exactly_one_handle() {
        let drops = Rc::new(Cell::new(0));
        let mut flow = Flow::new();

        assert!(flow.select(Handle(drops.clone())));
        assert_eq!(drops.get(), 0);

        assert!(flow.remove_selection());
        assert!(flow.selected().is_none());
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn replacing_a_selection_releases_the_prior_handle() {
        let drops = Rc::new(Cell::new(0));
        let mut flow = Flow::new();

        flow.select(Handle(drops.clone()));
        flow.select(Handle(drops.clone()));
        assert_eq!(drops.get(), 1);

        flow.reset();
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn begin_without_selection_is_a_validation_error() {
        let mut flow: Flow<Handle> = Flow::new();
        assert_eq!(flow.begin().err(), Some(NoImageSelected));
        assert_eq!(flow.state(), FlowState::Upload);
    }

    #[test]
    fn happy_path_reaches_results_with_both_payloads() {
        let mut flow = Flow::new();
        flow.select(Handle(Rc::new(Cell::new(0))));

        assert!(flow.begin().is_ok());
        assert_eq!(flow.state(), FlowState::Loading(LoadingStage::Predicting));

        assert!(flow.stage(LoadingStage::Analyzing));
        assert!(flow.stage(LoadingStage::Recommending));
        assert!(flow.complete(prediction(0.92), recommendation()));

        assert_eq!(flow.state(), FlowState::Results);
        let (p, r) = flow.results().unwrap();
        assert_eq!(p.top().unwrap().class_name, "aphid");
        assert_eq!(r.pest_name, "Aphid");
    }

    #[test]
    fn failure_reverts_to_upload_and_keeps_the_selection() {
        let drops = Rc::new(Cell::new(0));
        let mut flow = Flow::new();
        flow.select(Handle(drops.clone()));

        flow.begin().map(|_| ()).unwrap();
        flow.stage(LoadingStage::Recommending);
        assert!(flow.fail());

        assert_eq!(flow.state(), FlowState::Upload);
        assert!(flow.selected().is_some());
        assert!(flow.results().is_none());
        assert_eq!(drops.get(), 0);
    }

    #[test]
    fn payloads_are_never_half_populated() {
        let mut flow = Flow::new();
        flow.select(Handle(Rc::new(Cell::new(0))));
        flow.begin().map(|_| ()).unwrap();

        // Loading: neither payload visible.
        assert!(flow.results().is_none());

        flow.complete(prediction(0.92), recommendation());
        assert!(flow.results().is_some());

        flow.reset();
        assert!(flow.results().is_none());
        assert_eq!(flow.state(), FlowState::Upload);
    }

    #[test]
    fn selection_is_rejected_while_loading() {
        let mut flow = Flow::new();
        flow.select(Handle(Rc::new(Cell::new(0))));
        flow.begin().map(|_| ()).unwrap();

        assert!(!flow.select(Handle(Rc::new(Cell::new(0)))));
        assert!(!flow.remove_selection());
    }

    #[test]
    fn stage_changes_are_ignored_outside_loading() {
        let mut flow: Flow<Handle> = Flow::new();
        assert!(!flow.stage(LoadingStage::Analyzing));
        assert!(!flow.complete(prediction(0.5), recommendation()));
        assert!(!flow.fail());
    }

    #[test]
    fn confidence_buckets_match_badge_thresholds() {
        assert_eq!(
            ConfidenceLevel::from_confidence(0.92),
            ConfidenceLevel::High
        );
        assert_eq!(ConfidenceLevel::from_confidence(0.8), ConfidenceLevel::High);
        assert_eq!(
            ConfidenceLevel::from_confidence(0.65),
            ConfidenceLevel::Medium
        );
        assert_eq!(
            ConfidenceLevel::from_confidence(0.6),
            ConfidenceLevel::Medium
        );
        assert_eq!(ConfidenceLevel::from_confidence(0.4), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_confidence(0.92).label(), "High Confidence");
        assert_eq!(ConfidenceLevel::from_confidence(0.65).label(), "Medium Confidence");
        assert_eq!(ConfidenceLevel::from_confidence(0.4).label(), "Low Confidence");
    }

    #[test]
    fn confidence_percent_rounds_to_nearest_integer() {
        assert_eq!(confidence_percent(0.92), 92);
        assert_eq!(confidence_percent(0.925), 93);
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(1.0), 100);
    }
}
