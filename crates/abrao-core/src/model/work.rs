//! Publication records

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single publication attributed to a researcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub year: PublicationYear,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub container: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    /// Citation count, present on citation-ranked and OpenAlex-backed lists
    #[serde(default, alias = "cited_by_count")]
    pub citations: Option<u64>,
}

fn default_title() -> String {
    "Sem título".to_string()
}

impl Work {
    pub fn new(title: impl Into<String>, year: PublicationYear) -> Self {
        Self {
            title: title.into(),
            year,
            kind: None,
            container: None,
            doi: None,
            url: None,
            path: None,
            citations: None,
        }
    }

    /// DOI with surrounding whitespace removed, if the work has a usable one.
    pub fn doi(&self) -> Option<&str> {
        self.doi.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }
}

/// Publication year as sent by the backend.
///
/// ORCID summaries carry the year as a string (`"2020"`), OpenAlex as a
/// number, and missing dates as a placeholder like `"----"`. Both numeric
/// forms normalise to `Known`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PublicationYear {
    Known(i32),
    #[default]
    Unknown,
}

impl PublicationYear {
    pub fn value(&self) -> Option<i32> {
        match self {
            PublicationYear::Known(year) => Some(*year),
            PublicationYear::Unknown => None,
        }
    }

    /// Year-filter comparison. The filter is the select box value, so
    /// `"2020"` matches a year sent as either `2020` or `"2020"`.
    pub fn matches(&self, filter: &str) -> bool {
        match (self, filter.trim().parse::<i32>()) {
            (PublicationYear::Known(year), Ok(wanted)) => *year == wanted,
            _ => false,
        }
    }

    /// Newest first, unknown years last.
    pub fn cmp_desc(&self, other: &Self) -> Ordering {
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl From<i32> for PublicationYear {
    fn from(year: i32) -> Self {
        PublicationYear::Known(year)
    }
}

impl fmt::Display for PublicationYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicationYear::Known(year) => write!(f, "{}", year),
            PublicationYear::Unknown => write!(f, "----"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for PublicationYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawYear>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawYear::Number(n)) if n > 0 => i32::try_from(n)
                .map(PublicationYear::Known)
                .unwrap_or(PublicationYear::Unknown),
            Some(RawYear::Text(text)) => match text.trim().parse::<i32>() {
                Ok(year) if year > 0 => PublicationYear::Known(year),
                _ => PublicationYear::Unknown,
            },
            _ => PublicationYear::Unknown,
        })
    }
}

impl Serialize for PublicationYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PublicationYear::Known(year) => serializer.serialize_i32(*year),
            PublicationYear::Unknown => serializer.serialize_none(),
        }
    }
}

/// Detailed record for the work modal (`GET /works/publication/{doi}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationDetail {
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub publication_year: PublicationYear,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub cited_by_count: Option<u64>,
    #[serde(default)]
    pub authorships: Vec<Authorship>,
    #[serde(default)]
    pub container: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Set when the ORCID record disagrees with OpenAlex on the year
    #[serde(default)]
    pub orcid_publication_year: PublicationYear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorship {
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_orcid: Option<String>,
}

impl fmt::Display for Authorship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.author_name.as_deref().unwrap_or("Autor desconhecido");
        match &self.author_orcid {
            Some(orcid) => write!(f, "{} ({})", name, orcid),
            None => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_of(json: &str) -> PublicationYear {
        let work: Work = serde_json::from_str(json).unwrap();
        work.year
    }

    #[test]
    fn test_year_coercion_both_ways() {
        assert_eq!(year_of(r#"{"title":"a","year":2020}"#), PublicationYear::Known(2020));
        assert_eq!(year_of(r#"{"title":"a","year":"2020"}"#), PublicationYear::Known(2020));
        assert_eq!(year_of(r#"{"title":"a","year":"----"}"#), PublicationYear::Unknown);
        assert_eq!(year_of(r#"{"title":"a","year":0}"#), PublicationYear::Unknown);
        assert_eq!(year_of(r#"{"title":"a","year":null}"#), PublicationYear::Unknown);
        assert_eq!(year_of(r#"{"title":"a"}"#), PublicationYear::Unknown);
    }

    #[test]
    fn test_year_filter_match() {
        assert!(PublicationYear::Known(2020).matches("2020"));
        assert!(PublicationYear::Known(2020).matches(" 2020 "));
        assert!(!PublicationYear::Known(2021).matches("2020"));
        assert!(!PublicationYear::Unknown.matches("2020"));
        assert!(!PublicationYear::Known(2020).matches("----"));
    }

    #[test]
    fn test_citation_count_aliases() {
        let ranked: Work =
            serde_json::from_str(r#"{"title":"a","year":"2019","cited_by_count":12}"#).unwrap();
        assert_eq!(ranked.citations, Some(12));
        let openalex: Work =
            serde_json::from_str(r#"{"title":"b","year":2019,"citations":3}"#).unwrap();
        assert_eq!(openalex.citations, Some(3));
    }

    #[test]
    fn test_missing_title_defaults() {
        let work: Work = serde_json::from_str(r#"{"year":"2019"}"#).unwrap();
        assert_eq!(work.title, "Sem título");
    }

    #[test]
    fn test_blank_doi_is_none() {
        let mut work = Work::new("x", PublicationYear::Unknown);
        work.doi = Some("  ".into());
        assert_eq!(work.doi(), None);
        work.doi = Some(" 10.1/abc ".into());
        assert_eq!(work.doi(), Some("10.1/abc"));
    }

    #[test]
    fn test_publication_detail_parse() {
        let detail: PublicationDetail = serde_json::from_str(
            r#"{
                "doi": "10.5555/12345678",
                "id": "https://openalex.org/W1",
                "title": "Cracked pots",
                "publication_year": 2020,
                "type": "article",
                "cited_by_count": 7,
                "authorships": [
                    {"author_name": "Josiah Carberry", "author_orcid": "https://orcid.org/0000-0002-1825-0097"},
                    {"author_name": null, "author_orcid": null}
                ],
                "orcid_publication_year": "2019"
            }"#,
        )
        .unwrap();
        assert_eq!(detail.publication_year, PublicationYear::Known(2020));
        assert_eq!(detail.orcid_publication_year, PublicationYear::Known(2019));
        assert_eq!(
            detail.authorships[0].to_string(),
            "Josiah Carberry (https://orcid.org/0000-0002-1825-0097)"
        );
        assert_eq!(detail.authorships[1].to_string(), "Autor desconhecido");
    }
}
