//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// エラー種別の列挙体
///
/// 両サービスが返しうる HTTP ステータスだけを定義します。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Conflict;
/// assert_eq!(kind.status_code(), 409);
/// assert_eq!(kind.as_str(), "Conflict");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - 入力検証エラー
    BadRequest,
    /// 401 - 署名検証失敗 / トークン不正
    Unauthorized,
    /// 404 - ユーザーが存在しない
    NotFound,
    /// 409 - 一意制約違反
    Conflict,
    /// 500 - 永続化の失敗など
    InternalServerError,
    /// 502 - 上流の user API に到達できない
    BadGateway,
    /// 503 - データベース接続不可
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::InternalServerError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// HTTP ステータスの理由フレーズ
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// ステータスコードから種別を逆引き
    ///
    /// 上流サービスのレスポンスを分類するために使います。
    /// 未知のコードは 4xx なら `BadRequest`、それ以外は `InternalServerError`。
    pub const fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            502 => ErrorKind::BadGateway,
            503 => ErrorKind::ServiceUnavailable,
            400..=499 => ErrorKind::BadRequest,
            _ => ErrorKind::InternalServerError,
        }
    }

    /// 5xx 系かどうか（ログに記録すべきエラー）
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx 系かどうか
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
        assert_eq!(ErrorKind::BadGateway.status_code(), 502);
        assert_eq!(ErrorKind::ServiceUnavailable.status_code(), 503);
    }

    #[test]
    fn test_from_status() {
        assert_eq!(ErrorKind::from_status(409), ErrorKind::Conflict);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(422), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::InternalServerError);
        assert_eq!(ErrorKind::from_status(504), ErrorKind::InternalServerError);
    }

    #[test]
    fn test_server_and_client_errors() {
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(ErrorKind::BadGateway.is_server_error());
        assert!(!ErrorKind::Conflict.is_server_error());
        assert!(ErrorKind::Unauthorized.is_client_error());
        assert!(!ErrorKind::ServiceUnavailable.is_client_error());
    }
}
