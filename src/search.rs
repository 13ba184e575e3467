use crate::error::ClientError;
use crate::location::{Location, PAGE_SIZES, QueryState};

/// Which search field has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Year,
}

/// The name/year search form.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub name: String,
    pub year: String,
    pub focus: FormField,
}

impl SearchForm {
    /// Prefill the fields from the address bar.
    pub fn from_location(location: &Location) -> Self {
        Self {
            name: location.get("name").unwrap_or_default().to_string(),
            year: location.get("year").unwrap_or_default().to_string(),
            focus: FormField::Name,
        }
    }

    pub fn switch_field(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Year,
            FormField::Year => FormField::Name,
        };
    }

    pub fn push(&mut self, c: char) {
        match self.focus {
            FormField::Name => self.name.push(c),
            FormField::Year => self.year.push(c),
        }
    }

    pub fn pop(&mut self) {
        match self.focus {
            FormField::Name => self.name.pop(),
            FormField::Year => self.year.pop(),
        };
    }

    /// Build the query for a submission.
    ///
    /// `name` is always present (possibly empty); `year` only when the
    /// trimmed field is non-empty.
    pub fn to_query(&self, limit: u32) -> Result<QueryState, ClientError> {
        let year = self.year.trim();
        let year = if year.is_empty() {
            None
        } else {
            Some(
                year.parse::<i32>()
                    .map_err(|_| ClientError::InvalidYear(year.to_string()))?,
            )
        };
        Ok(QueryState {
            name: Some(self.name.trim().to_string()),
            year,
            limit,
        })
    }

    /// Submit: replace the address-bar query and return the new state.
    pub fn submit(&self, location: &mut Location, limit: u32) -> Result<QueryState, ClientError> {
        let query = self.to_query(limit)?;
        location.replace_query(&query);
        Ok(query)
    }
}

/// Address of the full-page search for `query`.
pub fn search_path(query: &QueryState) -> String {
    format!("/search?{}", query.to_query_string())
}

/// The page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeSelector {
    index: usize,
}

impl PageSizeSelector {
    /// Select `limit`, or the closest offered size at or above it.
    pub fn new(limit: u32) -> Self {
        let index = PAGE_SIZES
            .iter()
            .position(|s| *s >= limit)
            .unwrap_or(PAGE_SIZES.len() - 1);
        Self { index }
    }

    pub fn value(&self) -> u32 {
        PAGE_SIZES[self.index]
    }

    /// Move by `delta` steps. Returns whether the value changed.
    pub fn step(&mut self, delta: isize) -> bool {
        let next = self
            .index
            .saturating_add_signed(delta)
            .min(PAGE_SIZES.len() - 1);
        let changed = next != self.index;
        self.index = next;
        changed
    }

    /// Merge the selected size into the address bar and read the result.
    pub fn apply(&self, location: &mut Location, default_limit: u32) -> QueryState {
        location.set("limit", &self.value().to_string());
        location.query_state(default_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, year: &str) -> SearchForm {
        SearchForm {
            name: name.to_string(),
            year: year.to_string(),
            focus: FormField::Name,
        }
    }

    #[test]
    fn test_submit_builds_query_and_address() {
        let mut location = Location::parse("/?limit=20").unwrap();
        let query = form("  Matrix ", " 1999 ").submit(&mut location, 10).unwrap();
        assert_eq!(query.to_query_string(), "name=Matrix&year=1999&limit=10");
        assert_eq!(location.to_string(), "/?name=Matrix&year=1999&limit=10");
    }

    #[test]
    fn test_empty_name_is_still_sent() {
        let query = form("", "").to_query(10).unwrap();
        assert_eq!(query.name.as_deref(), Some(""));
        assert_eq!(query.year, None);
        assert_eq!(query.to_query_string(), "name=&limit=10");
    }

    #[test]
    fn test_bad_year_is_rejected_without_touching_address() {
        let mut location = Location::parse("/?name=Heat").unwrap();
        let err = form("Heat", "nineteen").submit(&mut location, 10).unwrap_err();
        assert!(matches!(err, ClientError::InvalidYear(_)));
        assert_eq!(location.to_string(), "/?name=Heat");
    }

    #[test]
    fn test_editing_follows_focus() {
        let mut form = SearchForm::default();
        form.push('a');
        form.switch_field();
        form.push('1');
        form.push('9');
        form.pop();
        assert_eq!(form.name, "a");
        assert_eq!(form.year, "1");
    }

    #[test]
    fn test_prefill_from_location() {
        let location = Location::parse("/?name=Alien&year=1979").unwrap();
        let form = SearchForm::from_location(&location);
        assert_eq!(form.name, "Alien");
        assert_eq!(form.year, "1979");
    }

    #[test]
    fn test_search_path() {
        let query = QueryState {
            name: Some("Heat".to_string()),
            year: None,
            limit: 10,
        };
        assert_eq!(search_path(&query), "/search?name=Heat&limit=10");
    }

    #[test]
    fn test_page_size_selector() {
        let mut selector = PageSizeSelector::new(10);
        assert_eq!(selector.value(), 10);
        assert!(selector.step(1));
        assert_eq!(selector.value(), 20);
        assert!(selector.step(10));
        assert_eq!(selector.value(), 100);
        assert!(!selector.step(1));
        assert_eq!(selector.value(), 100);
        assert!(selector.step(-10));
        assert_eq!(selector.value(), 5);
        assert_eq!(PageSizeSelector::new(1000).value(), 100);
        assert_eq!(PageSizeSelector::new(7).value(), 10);
    }

    #[test]
    fn test_page_size_merges_into_address() {
        let mut location = Location::parse("/?name=Heat&year=1995&limit=10").unwrap();
        let mut selector = PageSizeSelector::new(10);
        selector.step(2);
        let query = selector.apply(&mut location, 10);
        assert_eq!(location.to_string(), "/?name=Heat&year=1995&limit=50");
        assert_eq!(query.name.as_deref(), Some("Heat"));
        assert_eq!(query.year, Some(1995));
        assert_eq!(query.limit, 50);
    }
}
