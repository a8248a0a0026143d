//! sitelens - AI website analysis from the terminal
//!
//! Sends a website URL to a generative model with a fixed prompt and renders
//! the returned recommendations in four categories: user experience, web
//! design, SEO, and product attractiveness. Gemini is the default provider;
//! OpenAI and OpenAI-compatible servers are also supported.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod llm;
pub mod ui;
pub mod util;
