//! Request/response contract with the model: schema, parsing, and the analyzer.

pub mod analyzer;
pub mod error;
pub mod parser;
pub mod schema;

pub use analyzer::WebsiteAnalyzer;
pub use error::AnalysisError;
pub use schema::{AnalysisResult, Category, Recommendation};
