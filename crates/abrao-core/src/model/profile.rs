//! Unified researcher profile (`GET /orcid/{id}/all`)

use serde::{Deserialize, Serialize};

use super::work::Work;

/// Everything the dashboard renders about one researcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub personal: PersonalInfo,
    #[serde(default)]
    pub works: Vec<Work>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub employments: Vec<Affiliation>,
    #[serde(default)]
    pub educations: Vec<Affiliation>,
}

/// Personal section of a profile. Absent lists arrive as missing keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub other_names: Vec<String>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub external_ids: Vec<ExternalId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalId {
    #[serde(rename = "type")]
    pub id_type: String,
    pub value: String,
}

impl std::fmt::Display for ExternalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id_type, self.value)
    }
}

/// Employment or education entry.
///
/// For education, `role_title` carries the degree and `department` the area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub role_title: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Affiliation {
    /// `"2015-3 – atual"` style period label.
    pub fn period(&self) -> String {
        let start = self.start_date.as_deref().unwrap_or("?");
        let end = self.end_date.as_deref().unwrap_or("atual");
        format!("{} – {}", start, end)
    }

    /// Role and department joined for one-line display.
    pub fn headline(&self) -> String {
        [self.role_title.as_deref(), self.department.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Profile {
    pub fn display_name(&self) -> &str {
        if self.personal.full_name.is_empty() {
            "Autor sem nome"
        } else {
            &self.personal.full_name
        }
    }
}
