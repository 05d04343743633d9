use serde::{Deserialize, Serialize};

/// One classifier guess for an uploaded image.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    pub class_name: String,
    pub confidence: f64,
}

/// Response body of `POST {base}/predict`. The service orders
/// `predictions` by descending confidence; the list may be empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResponse {
    pub filename: String,
    pub predictions: Vec<Prediction>,
}

impl PredictionResponse {
    /// Highest-confidence prediction, if the service returned any.
    pub fn top(&self) -> Option<&Prediction> {
        self.predictions.first()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChemicalSolution {
    pub pesticide: String,
    pub dosage: String,
    pub notes: String,
}

/// Response body of `POST {base}/recommend`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecommendationResponse {
    pub pest_name: String,
    pub pest_info: String,
    pub ipm_solutions: Vec<String>,
    pub chemical_solutions: Vec<ChemicalSolution>,
    pub prevention_tips: Vec<String>,
}

/// Request body of `POST {base}/recommend`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecommendRequest {
    pub pest_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_response_deserializes_service_payload() {
        let body = r#"{
            "filename": "aphid.jpg",
            "predictions": [
                { "class_name": "aphid", "confidence": 0.92 },
                { "class_name": "thrips", "confidence": 0.05 }
            ]
        }"#;

        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.filename, "aphid.jpg");
        assert_eq!(response.predictions.len(), 2);
        assert_eq!(response.top().unwrap().class_name, "aphid");
        assert!((response.top().unwrap().confidence - 0.92).abs() < 1e-9);
    }

    #[test]
    fn prediction_response_tolerates_empty_predictions() {
        let body = r#"{ "filename": "blur.jpg", "predictions": [] }"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        assert!(response.top().is_none());
    }

    #[test]
    fn recommendation_response_deserializes_service_payload() {
        let body = r#"{
            "pest_name": "Aphid",
            "pest_info": "Small sap-sucking insects.",
            "ipm_solutions": ["Introduce ladybugs."],
            "chemical_solutions": [
                { "pesticide": "Imidacloprid", "dosage": "0.5 ml/L", "notes": "Avoid during bloom." }
            ],
            "prevention_tips": ["Inspect new plants before transplanting."]
        }"#;

        let response: RecommendationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.pest_name, "Aphid");
        assert_eq!(response.ipm_solutions.len(), 1);
        assert_eq!(response.chemical_solutions[0].pesticide, "Imidacloprid");
        assert_eq!(response.prevention_tips.len(), 1);
    }

    #[test]
    fn recommend_request_serializes_pest_name_field() {
        let request = RecommendRequest {
            pest_name: "Aphid".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"pest_name":"Aphid"}"#);
    }
}
