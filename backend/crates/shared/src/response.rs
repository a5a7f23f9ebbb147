//! Response envelope - Success wire format
//!
//! Defines the `{"status": "success", ...}` envelope that every handler
//! returns. The error counterpart lives in [`crate::error`] and serializes
//! as `{"status": "error", "message": ...}`.

use serde::Serialize;

/// 成功レスポンスのエンベロープ
///
/// ペイロードはトップレベルにフラット展開されます。
///
/// ## Examples
/// ```rust
/// use kernel::response::success;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Payload {
///     user: String,
/// }
///
/// let body = serde_json::to_value(success(Payload { user: "alice".into() })).unwrap();
/// assert_eq!(body["status"], "success");
/// assert_eq!(body["user"], "alice");
/// ```
#[derive(Debug, Serialize)]
pub struct Success<T> {
    /// 常に `"success"`
    pub status: &'static str,
    /// ペイロード（トップレベルに展開）
    #[serde(flatten)]
    pub data: T,
}

/// ペイロードを持たない成功レスポンスのボディ
///
/// `{"status": "success"}` のみを返すエンドポイント（logout / refresh 等）用。
#[derive(Debug, Serialize)]
pub struct NoData {}

/// ペイロード付きの成功エンベロープを構築
#[inline]
pub fn success<T: Serialize>(data: T) -> Success<T> {
    Success {
        status: "success",
        data,
    }
}

/// ペイロードなしの成功エンベロープを構築
#[inline]
pub fn success_empty() -> Success<NoData> {
    success(NoData {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        count: u32,
    }

    #[test]
    fn test_success_flattens_payload() {
        let body = serde_json::to_value(success(Sample { count: 3 })).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["count"], 3);
    }

    #[test]
    fn test_success_empty_has_only_status() {
        let body = serde_json::to_value(success_empty()).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "success" }));
    }
}
