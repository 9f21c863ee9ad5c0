use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators understood by the filter segment of the API
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
}

impl Operator {
    /// Operator as it appears in the path
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for the `order` parameter
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Value of the `order` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Single `field<op>value` condition
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

impl Filter {
    /// Creates a filter
    pub fn new(field: &str, operator: Operator, value: &str) -> Self {
        Filter {
            field: field.to_string(),
            operator,
            value: value.to_string(),
        }
    }

    /// Renders the filter with the value percent-encoded
    pub fn render(&self) -> String {
        format!(
            "{}{}{}",
            self.field,
            self.operator,
            urlencoding::encode(&self.value)
        )
    }
}

/// Builder for `/resource[/filters][?params]` request paths
///
/// Query parameters are rendered in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPath {
    resource: String,
    filters: Vec<Filter>,
    params: Vec<(String, String)>,
}

impl QueryPath {
    /// Starts a path for the given resource (`customers`, `loans`, ...)
    pub fn new(resource: &str) -> Self {
        QueryPath {
            resource: resource.trim_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Adds a filter condition, conditions are joined with `&`
    pub fn filter(mut self, field: &str, operator: Operator, value: &str) -> Self {
        self.filters.push(Filter::new(field, operator, value));
        self
    }

    /// Shorthand for an equality filter
    pub fn equals(self, field: &str, value: &str) -> Self {
        self.filter(field, Operator::Eq, value)
    }

    /// Adds the `page` parameter
    pub fn page(mut self, page: u32) -> Self {
        self.params.push(("page".to_string(), page.to_string()));
        self
    }

    /// Adds the `page_size` parameter
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.params
            .push(("page_size".to_string(), page_size.to_string()));
        self
    }

    /// Shorthand for `page` followed by `page_size`
    pub fn paged(self, page: u32, page_size: u32) -> Self {
        self.page(page).page_size(page_size)
    }

    /// Adds the `sort` and `order` parameters
    pub fn sort(mut self, column: &str, order: SortOrder) -> Self {
        self.params.push(("sort".to_string(), column.to_string()));
        self.params
            .push(("order".to_string(), order.as_str().to_string()));
        self
    }

    /// Filters added so far
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Renders the path and query string
    pub fn render(&self) -> String {
        let mut path = format!("/{}", self.resource);
        if !self.filters.is_empty() {
            let filters: Vec<String> = self.filters.iter().map(Filter::render).collect();
            path.push('/');
            path.push_str(&filters.join("&"));
        }
        if !self.params.is_empty() {
            let params: Vec<String> = self
                .params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            path.push('?');
            path.push_str(&params.join("&"));
        }
        path
    }
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Named request issued by the runner
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    /// Label used for the console heading and the output file name
    pub label: String,
    /// Step heading printed before the request
    pub description: String,
    /// Path and query string appended to the base URL
    pub path: String,
}

impl QueryDescriptor {
    /// Creates a descriptor from a rendered path
    pub fn new(label: &str, description: &str, path: impl Into<String>) -> Self {
        QueryDescriptor {
            label: label.to_string(),
            description: description.to_string(),
            path: path.into(),
        }
    }

    /// Creates a descriptor from a path builder
    pub fn from_path(label: &str, description: &str, path: &QueryPath) -> Self {
        QueryDescriptor::new(label, description, path.render())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::types::descriptor::{Operator, QueryDescriptor, QueryPath, SortOrder};

    #[test]
    fn bare_resource() {
        assert_eq!(QueryPath::new("health").render(), "/health");
    }

    #[test]
    fn params_keep_insertion_order() {
        let path = QueryPath::new("loans")
            .paged(1, 10)
            .sort("debt_amount", SortOrder::Desc);
        assert_eq!(
            path.render(),
            "/loans?page=1&page_size=10&sort=debt_amount&order=desc"
        );
        let path = QueryPath::new("loans")
            .sort("debt_amount", SortOrder::Desc)
            .paged(1, 10);
        assert_eq!(
            path.render(),
            "/loans?sort=debt_amount&order=desc&page=1&page_size=10"
        );
    }

    #[test]
    fn chained_filters() {
        let path = QueryPath::new("customers")
            .filter("customer_id", Operator::GtEq, "100")
            .filter("customer_id", Operator::LtEq, "200")
            .paged(1, 10);
        assert_eq!(
            path.render(),
            "/customers/customer_id>=100&customer_id<=200?page=1&page_size=10"
        );
        assert_eq!(path.filters().len(), 2);
    }

    #[test]
    fn filter_value_is_encoded() {
        let path = QueryPath::new("customers").equals("full_name", "John Smith");
        assert_eq!(path.render(), "/customers/full_name=John%20Smith");
        let path = QueryPath::new("loans").equals("contract_number", "LOAN-00000001");
        assert_eq!(path.render(), "/loans/contract_number=LOAN-00000001");
    }

    #[test]
    fn not_equal_operator() {
        let path = QueryPath::new("loans").filter("loan_status", Operator::NotEq, "closed");
        assert_eq!(path.to_string(), "/loans/loan_status!=closed");
    }

    #[test]
    fn descriptor_from_path() {
        let d = QueryDescriptor::from_path(
            "1_health_check",
            "Health Check",
            &QueryPath::new("/health/"),
        );
        assert_eq!(d.path, "/health");
        assert_eq!(d.label, "1_health_check");
    }
}
