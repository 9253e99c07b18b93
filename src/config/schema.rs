use serde::{Deserialize, Serialize};

use crate::scoring::HoleStrokeAllocation;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Course handicap used for players whose card entry has none
    #[serde(default)]
    pub handicap: Option<f64>,

    #[serde(default)]
    pub courses: Vec<CourseConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CourseConfig {
    pub name: String,
    pub holes: Vec<HoleStrokeAllocation>,
}

impl Config {
    /// Look up a course by name (case-insensitive)
    pub fn course(&self, name: &str) -> Option<&CourseConfig> {
        self.courses
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}
