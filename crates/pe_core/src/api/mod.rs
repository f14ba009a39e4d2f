//! JSON API for tracking pipelines and overlay renderers.

pub mod json_api;

pub use json_api::{
    analyze_possession_json, analyze_request, AnalysisRequest, AnalysisResponse, NO_HOLDER_CODE,
};
