use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`receipt-ai config --set-api-key YOUR_KEY` で設定してください")]
    MissingApiKey,

    #[error("画像URLが空です")]
    EmptyImageUrl,

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("出力がトークン上限で途切れました (max_tokens={0})")]
    Truncated(u32),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Common(#[from] receipt_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, ReceiptAiError>;
