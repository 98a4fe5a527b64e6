use serde::{Deserialize, Serialize};
use thiserror::Error;
use units_core::{Category, Conversion, ConversionError};

/// Body sent when a reply cannot be encoded at all.
pub const SERIALIZATION_FALLBACK: &str = r#"{"error": "Internal server error marshalling JSON"}"#;

/// Where a request came from; decides the wording of input errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Source { Query, Json, Cli }

impl Source {
    fn missing_fields(self) -> &'static str {
        match self {
            Source::Query => "query parameters: 'value', 'from', or 'to'",
            Source::Json => "fields in JSON payload: 'value', 'unitFrom', or 'unitTo'",
            Source::Cli => "arguments: --value, --from, or --to",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON payload in request body: {0}")]
    MalformedPayload(String),

    #[error("Missing required {}", .0.missing_fields())]
    MissingField(Source),

    #[error("Invalid value provided: '{0}' is not a number")]
    InvalidNumber(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Only GET and POST methods are supported")]
    MethodNotAllowed,

    /// Reply encoding failed; the detail is only logged.
    #[error("Internal server error marshalling JSON")]
    Serialization(String),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::MethodNotAllowed => 405,
            ApiError::Serialization(_) => 500,
            _ => 400,
        }
    }

    /// `{"error": "..."}`, or the fixed fallback body for encoding failures.
    pub fn to_json(&self) -> Vec<u8> {
        if let ApiError::Serialization(_) = self {
            return SERIALIZATION_FALLBACK.as_bytes().to_vec();
        }
        serde_json::to_vec(&ErrorBody { error: self.to_string() })
            .unwrap_or_else(|_| SERIALIZATION_FALLBACK.as_bytes().to_vec())
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorBody { pub error: String }

/// GET parameters, all optional until validated.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ConvertQuery {
    pub value: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl ConvertQuery {
    /// Collect decoded query pairs. A repeated key keeps its first value;
    /// unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut q = Self::default();
        for (key, val) in pairs {
            let slot = match key.as_str() {
                "value" => &mut q.value,
                "from" => &mut q.from,
                "to" => &mut q.to,
                _ => continue,
            };
            slot.get_or_insert(val);
        }
        q
    }
}

/// POST body. Absent or null fields fall back to `0` / `""`.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConvertPayload {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit_from: Option<String>,
    #[serde(default)]
    pub unit_to: Option<String>,
}

/// A validated request: finite value, non-empty lower-cased units.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertRequest { pub value: f64, pub from: String, pub to: String }

impl ConvertRequest {
    pub fn new(value: f64, from: &str, to: &str, source: Source) -> Result<Self, ApiError> {
        let from = from.to_lowercase();
        let to = to.to_lowercase();
        if from.is_empty() || to.is_empty() {
            return Err(ApiError::MissingField(source));
        }
        if !value.is_finite() {
            return Err(ApiError::InvalidNumber(value.to_string()));
        }
        Ok(Self { value, from, to })
    }

    pub fn from_query(q: ConvertQuery) -> Result<Self, ApiError> {
        let raw = q.value.unwrap_or_default();
        let from = q.from.unwrap_or_default();
        let to = q.to.unwrap_or_default();
        if raw.is_empty() || from.is_empty() || to.is_empty() {
            return Err(ApiError::MissingField(Source::Query));
        }
        let value = match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return Err(ApiError::InvalidNumber(raw)),
        };
        Self::new(value, &from, &to, Source::Query)
    }

    pub fn from_json(body: &[u8]) -> Result<Self, ApiError> {
        Self::parse_json(body, Source::Json)
    }

    /// Decode the first JSON value in `body`; anything after it is ignored.
    /// A `null` body reads as an empty payload.
    pub fn parse_json(body: &[u8], source: Source) -> Result<Self, ApiError> {
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<ConvertPayload>>()
            .next()
            // empty body: let the plain parser produce the EOF error
            .unwrap_or_else(|| serde_json::from_slice(body));
        let p = first
            .map_err(|e| ApiError::MalformedPayload(e.to_string()))?
            .unwrap_or_default();
        Self::new(
            p.value.unwrap_or_default(),
            p.unit_from.as_deref().unwrap_or_default(),
            p.unit_to.as_deref().unwrap_or_default(),
            source,
        )
    }
}

/// Success body of `/api/v1/convert`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub original_value: f64,
    pub from_unit: String,
    #[serde(rename = "result")]
    pub target_value: f64,
    pub to_unit: String,
    pub conversion_type: Category,
}

impl From<Conversion> for ConvertResponse {
    fn from(c: Conversion) -> Self {
        Self {
            original_value: c.original_value,
            from_unit: c.from_unit,
            target_value: c.target_value,
            to_unit: c.to_unit,
            conversion_type: c.category,
        }
    }
}

impl ConvertResponse {
    /// Encode as JSON. Non-finite numbers have no JSON form and fail here
    /// instead of being written as `null`.
    pub fn to_json(&self) -> Result<Vec<u8>, ApiError> {
        if !self.original_value.is_finite() || !self.target_value.is_finite() {
            return Err(ApiError::Serialization(format!(
                "non-finite result {} for {} {} -> {}",
                self.target_value, self.original_value, self.from_unit, self.to_unit
            )));
        }
        serde_json::to_vec(self).map_err(|e| ApiError::Serialization(e.to_string()))
    }
}

/// Status code plus encoded JSON body, ready for any transport.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply { pub status: u16, pub body: Vec<u8> }

impl Reply {
    pub fn error(err: &ApiError) -> Self {
        Reply { status: err.status(), body: err.to_json() }
    }
}

impl From<Result<ConvertResponse, ApiError>> for Reply {
    fn from(res: Result<ConvertResponse, ApiError>) -> Self {
        match res.and_then(|r| r.to_json()) {
            Ok(body) => Reply { status: 200, body },
            Err(err) => {
                if err.status() >= 500 {
                    tracing::error!(error = ?err, "convert failed");
                } else {
                    tracing::warn!(error = %err, "convert rejected");
                }
                Reply::error(&err)
            }
        }
    }
}

/// Classify the units and convert.
pub fn handle_convert(req: ConvertRequest) -> Result<ConvertResponse, ApiError> {
    let conv = units_core::convert(req.value, &req.from, &req.to)?;
    tracing::debug!(
        value = conv.original_value,
        from = %conv.from_unit,
        to = %conv.to_unit,
        result = conv.target_value,
        category = %conv.category,
        "converted"
    );
    Ok(conv.into())
}
