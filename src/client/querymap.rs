use crate::utils::{is_urlencoded, urlencode};

/// Ordered query parameters of a request.
#[derive(Default, Clone, Debug)]
pub struct QueryMap(Vec<(String, String)>);

impl QueryMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.0.push((key, value))
    }

    pub fn merge(&mut self, querys: Self) {
        self.0.extend(querys.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// get query string.
    /// the empty keys will be skipped.
    /// key and value will be uri encode.
    #[inline]
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .filter(|(k, _)| !k.is_empty())
            .map(|(k, v)| {
                let k = if !is_urlencoded(k) {
                    urlencode(k)
                } else {
                    k.to_owned()
                };
                let v = if !is_urlencoded(v) {
                    urlencode(v)
                } else {
                    v.to_owned()
                };
                if v.is_empty() {
                    k
                } else {
                    format!("{k}={v}")
                }
            })
            .collect::<Vec<String>>()
            .join("&")
    }
}

impl From<QueryMap> for String {
    fn from(querys: QueryMap) -> String {
        querys.to_query_string()
    }
}
