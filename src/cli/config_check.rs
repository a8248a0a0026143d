use anyhow::Result;
use std::env;

use crate::config::{Config, Provider};

struct CheckResult {
    passed: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl CheckResult {
    fn new() -> Self {
        Self {
            passed: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn pass(&mut self, msg: impl Into<String>) {
        self.passed.push(msg.into());
    }

    fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }
}

pub fn run(config_path: Option<String>) -> Result<()> {
    let results = collect(config_path);
    print_results(&results);
    // Problems are reported in the summary, not as a second error line
    Ok(())
}

fn collect(config_path: Option<String>) -> CheckResult {
    let mut results = CheckResult::new();

    let source = config_source(config_path.as_deref());
    let config = match Config::load_with_path(config_path) {
        Ok(config) => {
            results.pass(format!("Config loaded from {}", source));
            config
        }
        Err(e) => {
            results.error(format!("Failed to load config: {:#}", e));
            return results;
        }
    };

    results.pass(format!(
        "LLM provider: {} (model: {})",
        config.llm.provider, config.llm.model
    ));

    check_api_key(
        config.llm.api_key_env_name(),
        &config.llm.provider,
        &mut results,
    );

    if config.llm.provider == Provider::OpenAICompatible && config.llm.base_url.is_none() {
        results.warn(
            "openai-compatible provider without base_url, will use http://localhost:11434/v1",
        );
    }

    let temperature = config.analysis.temperature;
    if (0.0..=2.0).contains(&temperature) {
        results.pass(format!("Temperature: {}", temperature));
    } else {
        results.warn(format!(
            "Temperature {} is outside the usual 0.0-2.0 range",
            temperature
        ));
    }

    if !config.analysis.json_output {
        results.warn("JSON response mode disabled; replies may need fence stripping");
    }

    results.pass(format!(
        "Recommendation validation: {}",
        if config.analysis.strict_recommendations {
            "strict"
        } else {
            "lenient"
        }
    ));

    if config.prompts.custom.is_some() {
        results.pass("Custom prompt instructions configured");
    }

    results
}

fn config_source(explicit: Option<&str>) -> String {
    if let Some(path) = explicit {
        return path.to_string();
    }
    Config::search_paths()
        .into_iter()
        .find(|p| p.is_file())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string())
}

fn check_api_key(env_var: &str, provider: &Provider, results: &mut CheckResult) {
    if env_var.eq_ignore_ascii_case("none") {
        results.pass("API key: not needed");
        return;
    }

    let optional = !provider.requires_api_key();
    match env::var(env_var) {
        Ok(v) if !v.trim().is_empty() => {
            results.pass(format!("API key: {} is set", env_var));
        }
        Ok(_) if optional => {
            results.warn(format!(
                "API key: {} is set but empty (OK for local models)",
                env_var
            ));
        }
        Ok(_) => {
            results.error(format!("API key: {} is set but empty", env_var));
        }
        Err(_) if optional => {
            results.warn(format!(
                "API key: {} is not set (OK for local models)",
                env_var
            ));
        }
        Err(_) => {
            results.error(format!("API key: {} is not set", env_var));
        }
    }
}

fn print_results(results: &CheckResult) {
    println!();
    for msg in &results.passed {
        println!("  \u{2713} {}", msg);
    }
    for msg in &results.warnings {
        println!("  ! {}", msg);
    }
    for msg in &results.errors {
        println!("  \u{2717} {}", msg);
    }
    println!();
    println!(
        "{} passed, {} warnings, {} errors",
        results.passed.len(),
        results.warnings.len(),
        results.errors.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_check_result_counts() {
        let mut r = CheckResult::new();
        r.pass("ok");
        r.warn("hmm");
        r.error("bad");
        assert_eq!(r.passed, vec!["ok"]);
        assert_eq!(r.warnings.len(), 1);
        assert_eq!(r.errors.len(), 1);
    }

    #[test]
    fn test_check_api_key_none() {
        let mut r = CheckResult::new();
        check_api_key("none", &Provider::Gemini, &mut r);
        assert!(r.passed[0].contains("not needed"));
    }

    #[test]
    #[serial]
    fn test_check_api_key_set() {
        env::set_var("SITELENS_TEST_CHECK_KEY", "abc123");
        let mut r = CheckResult::new();
        check_api_key("SITELENS_TEST_CHECK_KEY", &Provider::Gemini, &mut r);
        assert!(r.passed[0].contains("SITELENS_TEST_CHECK_KEY is set"));
        env::remove_var("SITELENS_TEST_CHECK_KEY");
    }

    #[test]
    #[serial]
    fn test_check_api_key_empty_is_error_for_gemini() {
        env::set_var("SITELENS_TEST_CHECK_EMPTY", "  ");
        let mut r = CheckResult::new();
        check_api_key("SITELENS_TEST_CHECK_EMPTY", &Provider::Gemini, &mut r);
        assert_eq!(r.errors.len(), 1);
        assert!(r.errors[0].contains("set but empty"));
        env::remove_var("SITELENS_TEST_CHECK_EMPTY");
    }

    #[test]
    fn test_check_api_key_missing_is_warning_for_local() {
        let mut r = CheckResult::new();
        check_api_key(
            "SITELENS_NONEXISTENT_KEY_999",
            &Provider::OpenAICompatible,
            &mut r,
        );
        assert_eq!(r.warnings.len(), 1);
        assert!(r.errors.is_empty());
    }

    #[test]
    #[serial]
    fn test_collect_from_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[llm]
provider = "openai-compatible"
model = "llama3"
api_key_env = "none"

[analysis]
temperature = 3.5
strict_recommendations = true
"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let r = collect(Some(path.clone()));

        assert!(r.passed[0].contains(&path));
        let provider_line = "LLM provider: openai-compatible (model: llama3)";
        assert!(r.passed.iter().any(|m| m == provider_line));
        assert!(r.passed.iter().any(|m| m.contains("strict")));
        assert!(r.warnings.iter().any(|m| m.contains("base_url")));
        assert!(r.warnings.iter().any(|m| m.contains("3.5")));
        assert!(r.errors.is_empty());
    }

    #[test]
    fn test_collect_reports_load_failure() {
        let r = collect(Some("/nonexistent/sitelens.toml".to_string()));
        assert!(r.passed.is_empty());
        assert_eq!(r.errors.len(), 1);
        assert!(r.errors[0].contains("Failed to load config"));
    }
}
