//! Client-side work list filtering
//!
//! The work lists are small (one researcher), so everything here is a plain
//! pass over a slice.

use crate::model::Work;

/// Ordering selected in the "Ordenar por" control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// `""`: newest first, computed locally
    #[default]
    Recent,
    /// `"desc"`: the server's citation ranking
    MostCited,
}

impl SortOrder {
    /// Map the select value. Anything but `"desc"` means `Recent`.
    pub fn from_value(value: &str) -> Self {
        if value == "desc" {
            SortOrder::MostCited
        } else {
            SortOrder::Recent
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            SortOrder::Recent => "",
            SortOrder::MostCited => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Recent => "Mais recentes",
            SortOrder::MostCited => "Mais citadas",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Recent => SortOrder::MostCited,
            SortOrder::MostCited => SortOrder::Recent,
        }
    }
}

/// Title substring and year filters applied on top of the displayed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkFilter {
    pub title: String,
    /// Empty means all years
    pub year: String,
}

impl WorkFilter {
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.year.trim().is_empty()
    }

    pub fn matches(&self, work: &Work) -> bool {
        let title = self.title.trim().to_lowercase();
        let year = self.year.trim();
        (title.is_empty() || work.title.to_lowercase().contains(&title))
            && (year.is_empty() || work.year.matches(year))
    }

    pub fn apply(&self, works: &[Work]) -> Vec<Work> {
        works.iter().filter(|w| self.matches(w)).cloned().collect()
    }
}

/// Stable sort, newest first, unknown years last.
pub fn sort_by_year_desc(works: &mut [Work]) {
    works.sort_by(|a, b| a.year.cmp_desc(&b.year));
}

/// Distinct known years, newest first, for the year selector.
pub fn available_years(works: &[Work]) -> Vec<i32> {
    let mut years: Vec<i32> = works.iter().filter_map(|w| w.year.value()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PublicationYear;

    fn works() -> Vec<Work> {
        vec![
            Work::new("Deep Learning for Pottery", PublicationYear::Known(2019)),
            Work::new("Cracked pots", PublicationYear::Known(2021)),
            Work::new("Untitled draft", PublicationYear::Unknown),
            Work::new("Pottery and the mind", PublicationYear::Known(2020)),
            Work::new("Second 2020 paper", PublicationYear::Known(2020)),
        ]
    }

    #[test]
    fn test_sort_order_values() {
        assert_eq!(SortOrder::from_value("desc"), SortOrder::MostCited);
        assert_eq!(SortOrder::from_value(""), SortOrder::Recent);
        assert_eq!(SortOrder::from_value("asc"), SortOrder::Recent);
        assert_eq!(SortOrder::MostCited.value(), "desc");
        assert_eq!(SortOrder::Recent.toggled(), SortOrder::MostCited);
    }

    #[test]
    fn test_year_filter_exact_subset() {
        let filter = WorkFilter {
            year: "2020".into(),
            ..Default::default()
        };
        let kept = filter.apply(&works());
        let titles: Vec<&str> = kept.iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, vec!["Pottery and the mind", "Second 2020 paper"]);
    }

    #[test]
    fn test_title_filter_case_insensitive() {
        let filter = WorkFilter {
            title: "POTTERY".into(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&works()).len(), 2);
    }

    #[test]
    fn test_filters_combine() {
        let filter = WorkFilter {
            title: "pottery".into(),
            year: "2019".into(),
        };
        let kept = filter.apply(&works());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Deep Learning for Pottery");
    }

    #[test]
    fn test_sort_newest_first_unknown_last() {
        let mut list = works();
        sort_by_year_desc(&mut list);
        let years: Vec<String> = list.iter().map(|w| w.year.to_string()).collect();
        assert_eq!(years, vec!["2021", "2020", "2020", "2019", "----"]);
        // stable: the two 2020 works keep their relative order
        assert_eq!(list[1].title, "Pottery and the mind");
    }

    #[test]
    fn test_available_years() {
        assert_eq!(available_years(&works()), vec![2021, 2020, 2019]);
    }
}
