//! Patient search parameters and query-string encoding

/// Query parameters for a Patient search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub count: Option<u32>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Individual name terms, split on runs of whitespace
    pub fn name_terms(&self) -> Vec<&str> {
        self.name
            .as_deref()
            .map(|name| name.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Ordered query pairs: every name term, then telecom, then _count
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = self
            .name_terms()
            .into_iter()
            .map(|term| ("name", term.to_string()))
            .collect();

        if let Some(phone) = self.phone.as_deref().filter(|p| !p.is_empty()) {
            pairs.push(("telecom", format!("phone|{}", phone)));
        }

        // Zero is not a usable page size, treat it as unset
        if let Some(count) = self.count.filter(|c| *c > 0) {
            pairs.push(("_count", count.to_string()));
        }

        pairs
    }

    /// Form-urlencoded query string, empty when no pairs exist
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// Full search URL against `server_url`
    pub fn search_url(&self, server_url: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            format!("{}/Patient", server_url)
        } else {
            format!("{}/Patient?{}", server_url, query)
        }
    }
}
