use crate::api::types::descriptor::{Operator, QueryDescriptor, QueryPath, SortOrder};
use std::fmt;
use std::str::FromStr;

/// Named, ordered list of queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Suite {
    /// Customers and loans walkthrough
    #[default]
    Banking,
    /// Users and sample data tables
    Sample,
}

impl Suite {
    /// Queries of this suite, in execution order
    pub fn queries(&self) -> Vec<QueryDescriptor> {
        match self {
            Suite::Banking => banking_queries(),
            Suite::Sample => sample_queries(),
        }
    }

    /// Title printed in the run banner
    pub fn title(&self) -> &'static str {
        match self {
            Suite::Banking => "🏦 Testing Rust PostgreSQL API - Banking Database",
            Suite::Sample => "🧪 Testing Rust PostgreSQL API - Sample Tables",
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Suite::Banking => f.write_str("banking"),
            Suite::Sample => f.write_str("sample"),
        }
    }
}

impl FromStr for Suite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "banking" => Ok(Suite::Banking),
            "sample" => Ok(Suite::Sample),
            other => Err(format!("unknown suite '{}', use banking or sample", other)),
        }
    }
}

fn query(label: &str, description: &str, path: QueryPath) -> QueryDescriptor {
    QueryDescriptor::from_path(label, description, &path)
}

/// The customers and loans walkthrough
pub fn banking_queries() -> Vec<QueryDescriptor> {
    vec![
        query("1_health_check", "Health Check", QueryPath::new("health")),
        query(
            "2_customers_page_1",
            "Get first page of customers (10 per page)",
            QueryPath::new("customers").paged(1, 10),
        ),
        query(
            "3_customers_usa",
            "Get customers from USA",
            QueryPath::new("customers").equals("country", "USA").paged(1, 10),
        ),
        query(
            "4_customer_by_name",
            "Get customer by full_name='John Smith'",
            QueryPath::new("customers").equals("full_name", "John Smith"),
        ),
        query(
            "5_customers_born_after_1990",
            "Get customers born after 1990-01-01",
            QueryPath::new("customers")
                .filter("birth_date", Operator::Gt, "1990-01-01")
                .sort("birth_date", SortOrder::Desc)
                .paged(1, 10),
        ),
        query(
            "6_loans_page_1",
            "Get first page of loans (10 per page)",
            QueryPath::new("loans")
                .paged(1, 10)
                .sort("debt_amount", SortOrder::Desc),
        ),
        query(
            "7_loans_high_debt",
            "Get loans with debt_amount > 30000",
            QueryPath::new("loans")
                .filter("debt_amount", Operator::Gt, "30000")
                .sort("debt_amount", SortOrder::Desc)
                .paged(1, 10),
        ),
        query(
            "8_loans_overdue",
            "Get loans with overdue_debt_amount > 0",
            QueryPath::new("loans")
                .filter("overdue_debt_amount", Operator::Gt, "0")
                .paged(1, 20),
        ),
        query(
            "9_loans_active",
            "Get active loans",
            QueryPath::new("loans").equals("loan_status", "active").paged(1, 15),
        ),
        query(
            "10_loans_customer_10",
            "Get loans for customer_id = 10",
            QueryPath::new("loans").equals("customer_id", "10"),
        ),
        query(
            "11_loans_recent_active",
            "Get active loans reported after 2024-01-01",
            QueryPath::new("loans")
                .filter("report_date", Operator::Gt, "2024-01-01")
                .equals("loan_status", "active")
                .paged(1, 10),
        ),
        query(
            "12_loans_mortgage",
            "Get mortgage loans",
            QueryPath::new("loans").equals("loan_type", "Mortgage").paged(1, 10),
        ),
        query(
            "13_loans_high_risk",
            "Complex: Debt > 20000 AND overdue > 1000",
            QueryPath::new("loans")
                .filter("debt_amount", Operator::Gt, "20000")
                .filter("overdue_debt_amount", Operator::Gt, "1000")
                .sort("overdue_debt_amount", SortOrder::Desc)
                .paged(1, 10),
        ),
        query(
            "14_customers_germany",
            "Get customers from Germany with pagination",
            QueryPath::new("customers")
                .equals("country", "Germany")
                .paged(1, 20)
                .sort("birth_date", SortOrder::Asc),
        ),
        query(
            "15_customers_id_range",
            "Get customers with customer_id >= 100 and <= 200",
            QueryPath::new("customers")
                .filter("customer_id", Operator::GtEq, "100")
                .filter("customer_id", Operator::LtEq, "200")
                .paged(1, 10),
        ),
        query(
            "16_loan_debt_history",
            "Get specific loan by contract number (shows debt over time)",
            QueryPath::new("loans")
                .equals("contract_number", "LOAN-00000001")
                .sort("report_date", SortOrder::Asc),
        ),
        query(
            "17_loan_debt_progression",
            "Another contract's debt progression",
            QueryPath::new("loans")
                .equals("contract_number", "LOAN-00000050")
                .sort("report_date", SortOrder::Asc),
        ),
    ]
}

/// Walkthrough of the `users` and `sample_data` tables
pub fn sample_queries() -> Vec<QueryDescriptor> {
    vec![
        query("1_health_check", "Health Check", QueryPath::new("health")),
        query(
            "2_users_page_1",
            "Get first page of users (10 per page)",
            QueryPath::new("users").paged(1, 10),
        ),
        query(
            "3_sample_data_page_1",
            "Get first page of sample data (10 per page)",
            QueryPath::new("sample_data").paged(1, 10),
        ),
        query(
            "4_sample_data_sorted",
            "Get sample data sorted by id descending",
            QueryPath::new("sample_data")
                .sort("id", SortOrder::Desc)
                .paged(1, 10),
        ),
        query(
            "5_sample_data_id_gt_5",
            "Get sample data with id > 5",
            QueryPath::new("sample_data")
                .filter("id", Operator::Gt, "5")
                .paged(1, 10),
        ),
    ]
}

/// Reference of the filters, pagination and sorting the API accepts
pub const USAGE_SUMMARY: &str = "\
Customers Table:
  - Filter by country: /customers/country=USA
  - Filter by full_name: /customers/full_name=John%20Smith
  - Filter by birth_date: /customers/birth_date>1990-01-01
  - Filter by status: /customers/status=active
  - Sort by any column: ?sort=birth_date&order=desc

Loans Table:
  - Filter by customer: /loans/customer_id=10
  - Filter by debt: /loans/debt_amount>30000
  - Filter by overdue: /loans/overdue_debt_amount>0
  - Filter by status: /loans/loan_status=active
  - Filter by type: /loans/loan_type=Mortgage
  - Filter by date: /loans/report_date>2024-01-01
  - Multiple filters: /loans/debt_amount>20000&loan_status=active

Pagination: ?page=1&page_size=10
Sorting: ?sort=column_name&order=asc/desc

💡 Tip: URL encode spaces in values (use %20 or +)
   Example: /customers/full_name=John%20Smith";
