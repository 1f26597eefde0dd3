//! Search filter built from an inquiry request

use breed_inquiry_types::runtime::BreedInquiryRequest;

/// Request-scoped search constraints
///
/// Empty strings and empty lists are normalized away on construction, so a
/// dimension is either constrained or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    keyword: Option<String>,
    ids: Vec<String>,
    short_names: Vec<String>,
}

impl SearchFilter {
    /// Create an empty filter matching every row
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        self.keyword = (!keyword.is_empty()).then_some(keyword);
        self
    }

    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_short_names<I, S>(mut self, short_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.short_names = short_names.into_iter().map(Into::into).collect();
        self
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn short_names(&self) -> &[String] {
        &self.short_names
    }

    /// Number of constrained dimensions (0 to 3)
    pub fn dimension_count(&self) -> usize {
        usize::from(self.keyword.is_some())
            + usize::from(!self.ids.is_empty())
            + usize::from(!self.short_names.is_empty())
    }

    /// True when no dimension is constrained
    pub fn is_unconstrained(&self) -> bool {
        self.dimension_count() == 0
    }
}

impl From<BreedInquiryRequest> for SearchFilter {
    fn from(request: BreedInquiryRequest) -> Self {
        SearchFilter::new()
            .with_keyword(request.keyword.unwrap_or_default())
            .with_ids(request.ids.unwrap_or_default())
            .with_short_names(request.shortnames.unwrap_or_default())
    }
}
