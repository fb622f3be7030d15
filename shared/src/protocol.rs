use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =========================================================
// Endpoint Definitions
// =========================================================

/// Every backend operation the client performs, with the method and path it maps to.
///
/// Identifiers are interpolated into the path verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    ListClients,
    GetClient { id: &'a str },
    CreateClient,
    UpdateClient { id: &'a str },
    ListClientCredits { client_id: &'a str },

    ListCredits,
    GetCredit { id: &'a str },
    CreateCredit,
    UpdateCredit { id: &'a str },
    DeleteCredit { id: &'a str },
    RegisterPayment { credit_id: &'a str },
    AddInstallments { credit_id: &'a str },
    EditPayment { credit_id: &'a str, index: usize },
    DeletePayment { credit_id: &'a str, index: usize },
    AddProducts { credit_id: &'a str },

    Agenda,
    ReportSummary,
    CompletedSales,
}

impl Endpoint<'_> {
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::CreateClient
            | Endpoint::CreateCredit
            | Endpoint::RegisterPayment { .. }
            | Endpoint::AddInstallments { .. }
            | Endpoint::AddProducts { .. } => HttpMethod::Post,
            Endpoint::UpdateClient { .. }
            | Endpoint::UpdateCredit { .. }
            | Endpoint::EditPayment { .. } => HttpMethod::Put,
            Endpoint::DeleteCredit { .. } | Endpoint::DeletePayment { .. } => HttpMethod::Delete,
            _ => HttpMethod::Get,
        }
    }

    /// Path relative to the API base address.
    pub fn path(&self) -> String {
        match self {
            Endpoint::ListClients | Endpoint::CreateClient => "/clients".to_string(),
            Endpoint::GetClient { id } | Endpoint::UpdateClient { id } => format!("/clients/{id}"),
            Endpoint::ListClientCredits { client_id } => format!("/clients/{client_id}/credits"),
            Endpoint::ListCredits | Endpoint::CreateCredit => "/credits".to_string(),
            Endpoint::GetCredit { id }
            | Endpoint::UpdateCredit { id }
            | Endpoint::DeleteCredit { id } => format!("/credits/{id}"),
            Endpoint::RegisterPayment { credit_id } => format!("/credits/{credit_id}/payments"),
            Endpoint::AddInstallments { credit_id } => {
                format!("/credits/{credit_id}/add-installments")
            }
            Endpoint::EditPayment { credit_id, index }
            | Endpoint::DeletePayment { credit_id, index } => {
                format!("/credits/{credit_id}/payments/{index}")
            }
            Endpoint::AddProducts { credit_id } => format!("/credits/{credit_id}/add-products"),
            Endpoint::Agenda => "/agenda".to_string(),
            Endpoint::ReportSummary => "/reports/summary".to_string(),
            Endpoint::CompletedSales => "/reports/completed-sales".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_table_matches_backend_routes() {
        let table = [
            (Endpoint::ListClients, "GET", "/clients"),
            (Endpoint::GetClient { id: "c1" }, "GET", "/clients/c1"),
            (Endpoint::CreateClient, "POST", "/clients"),
            (Endpoint::UpdateClient { id: "c1" }, "PUT", "/clients/c1"),
            (
                Endpoint::ListClientCredits { client_id: "c1" },
                "GET",
                "/clients/c1/credits",
            ),
            (Endpoint::ListCredits, "GET", "/credits"),
            (Endpoint::GetCredit { id: "7" }, "GET", "/credits/7"),
            (Endpoint::CreateCredit, "POST", "/credits"),
            (Endpoint::UpdateCredit { id: "7" }, "PUT", "/credits/7"),
            (Endpoint::DeleteCredit { id: "7" }, "DELETE", "/credits/7"),
            (
                Endpoint::RegisterPayment { credit_id: "7" },
                "POST",
                "/credits/7/payments",
            ),
            (
                Endpoint::AddInstallments { credit_id: "7" },
                "POST",
                "/credits/7/add-installments",
            ),
            (
                Endpoint::EditPayment {
                    credit_id: "7",
                    index: 2,
                },
                "PUT",
                "/credits/7/payments/2",
            ),
            (
                Endpoint::DeletePayment {
                    credit_id: "7",
                    index: 0,
                },
                "DELETE",
                "/credits/7/payments/0",
            ),
            (
                Endpoint::AddProducts { credit_id: "7" },
                "POST",
                "/credits/7/add-products",
            ),
            (Endpoint::Agenda, "GET", "/agenda"),
            (Endpoint::ReportSummary, "GET", "/reports/summary"),
            (Endpoint::CompletedSales, "GET", "/reports/completed-sales"),
        ];

        for (endpoint, method, path) in table {
            assert_eq!(endpoint.method().as_str(), method, "{endpoint:?}");
            assert_eq!(endpoint.path(), path, "{endpoint:?}");
        }
    }
}
