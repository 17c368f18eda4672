/// Fixture loader
///
/// Parse cases list any subset of the `ParsedUrl` fields; fields left out
/// are not checked. Modify cases describe each query edit as `"keep"`,
/// `"clear"` or an object of keys to set (`null` deletes the key).
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum ParseCase {
    UrlCase {
        input: String,
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        protocol: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        origin: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        hostname: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        pathname: Option<String>,
        #[serde(default)]
        search: Option<String>,
        #[serde(default)]
        query: Option<Map<String, Value>>,
        #[serde(default)]
        hash: Option<String>,
        #[serde(default, rename = "hashPathname")]
        hash_pathname: Option<String>,
        #[serde(default, rename = "hashSearch")]
        hash_search: Option<String>,
        #[serde(default, rename = "hashQuery")]
        hash_query: Option<Map<String, Value>>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum EditSpec {
    /// `"keep"` or `"clear"`
    Action(String),
    Merge(Map<String, Value>),
}

impl Default for EditSpec {
    fn default() -> Self {
        Self::Action("keep".to_string())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum ModifyCase {
    EditCase {
        input: String,
        #[serde(default)]
        query: EditSpec,
        #[serde(default, rename = "hashQuery")]
        hash_query: EditSpec,
        expected: String,
    },
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub case_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total() as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Fixture cases: {} passed, {} failed ({:.1}% pass rate)",
            self.passed,
            self.failed,
            self.pass_rate()
        )
    }

    pub fn print_failures(&self) {
        for failure in &self.failures {
            println!("  Case #{}: {}", failure.case_num, failure.field);
            println!("    Input: {}", failure.input);
            println!("    Expected: {}", failure.expected);
            println!("    Actual: {}", failure.actual);
        }
    }
}

pub fn load_parse_cases(json: &str) -> Result<Vec<ParseCase>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_modify_cases(json: &str) -> Result<Vec<ModifyCase>, serde_json::Error> {
    serde_json::from_str(json)
}
