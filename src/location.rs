use std::fmt;

use url::Url;
use url::form_urlencoded;

use crate::error::ClientError;
use crate::model::PageContext;

/// Page sizes offered by the size selector.
pub const PAGE_SIZES: [u32; 5] = [5, 10, 20, 50, 100];

/// Filter and pagination parameters sent to the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub limit: u32,
}

impl QueryState {
    pub fn new(limit: u32) -> Self {
        Self {
            name: None,
            year: None,
            limit,
        }
    }

    /// Form-urlencoded `name`, `year`, `limit`, skipping absent fields.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(name) = &self.name {
            serializer.append_pair("name", name);
        }
        if let Some(year) = self.year {
            serializer.append_pair("year", &year.to_string());
        }
        serializer.append_pair("limit", &self.limit.to_string());
        serializer.finish()
    }
}

/// The in-app address bar: a path plus an ordered query string.
///
/// Unknown parameters are kept so a page-size change does not drop them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    params: Vec<(String, String)>,
}

impl Location {
    /// Parse a relative address such as `/search?name=Heat&limit=20`.
    pub fn parse(input: &str) -> Result<Self, ClientError> {
        let base = Url::parse("http://recofilm.local/")?;
        let url = base.join(input)?;
        Ok(Self {
            path: url.path().to_string(),
            params: url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        })
    }

    pub fn for_context(context: PageContext) -> Self {
        Self {
            path: context.path().to_string(),
            params: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn context(&self) -> PageContext {
        PageContext::from_path(self.path())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a parameter in place, dropping duplicates; append when absent.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut seen = false;
        self.params.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *v = value.to_string();
            true
        });
        if !seen {
            self.params.push((key.to_string(), value.to_string()));
        }
    }

    /// Replace the whole query string without touching the path.
    pub fn replace_query(&mut self, query: &QueryState) {
        self.params = form_urlencoded::parse(query.to_query_string().as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
    }

    /// Navigate to another page, keeping only the page size.
    pub fn navigate(&mut self, context: PageContext) {
        let limit = self.get("limit").map(str::to_string);
        *self = Self::for_context(context);
        if let Some(limit) = limit {
            self.set("limit", &limit);
        }
    }

    /// Read the query state this address describes.
    ///
    /// A `year` or `limit` that does not parse is treated as absent.
    pub fn query_state(&self, default_limit: u32) -> QueryState {
        QueryState {
            name: self.get("name").map(str::to_string),
            year: self.get("year").and_then(|y| y.trim().parse().ok()),
            limit: self
                .get("limit")
                .and_then(|l| l.parse().ok())
                .filter(|l| *l > 0)
                .unwrap_or(default_limit),
        }
    }

    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = self.query_string();
        if query.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}?{}", self.path, query)
        }
    }
}
