use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
pub const TOKEN_STORAGE_KEY: &str = "authToken";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

// =========================================================
// 请求负载 (Request Payloads)
// =========================================================

/// 客户资料，原样转发给后端
pub type ClientData = serde_json::Value;

/// 信贷资料，原样转发给后端
pub type CreditData = serde_json::Value;

/// 追加到信贷的商品，原样转发给后端
pub type ProductsData = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddInstallmentsRequest {
    pub additional_installments: u32,
}

/// 已完成销售报表的查询区间
///
/// 两端都可省略，省略的一端不会出现在查询字符串中。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedSalesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl CompletedSalesQuery {
    pub fn between(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }

    /// 转换为查询参数键值对
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        [("startDate", self.start_date), ("endDate", self.end_date)]
            .into_iter()
            .filter_map(|(key, date)| {
                date.map(|d| (key.to_string(), d.format(QUERY_DATE_FORMAT).to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn installments_use_camel_case_on_the_wire() {
        let body = serde_json::to_value(AddInstallmentsRequest {
            additional_installments: 3,
        })
        .unwrap();
        assert_eq!(body, json!({ "additionalInstallments": 3 }));
    }

    #[test]
    fn sales_query_emits_iso_dates() {
        let query = CompletedSalesQuery::between(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("startDate".to_string(), "2024-01-01".to_string()),
                ("endDate".to_string(), "2024-01-31".to_string()),
            ]
        );
    }

    #[test]
    fn sales_query_skips_missing_bounds() {
        let query = CompletedSalesQuery {
            start_date: None,
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30),
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![("endDate".to_string(), "2024-06-30".to_string())]
        );
        assert!(CompletedSalesQuery::default().to_query_pairs().is_empty());
    }
}
