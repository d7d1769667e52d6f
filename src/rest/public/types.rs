//! Request parameter types for the CoinCap endpoints.
//!
//! Every field defaults to absent. Absent fields are never sent.

use serde::Serialize;

/// Time bucket size accepted by the history and candles endpoints.
///
/// CoinCap does not accept every bucket on both endpoints; the variant docs
/// note where the remote API restricts one. The client sends the value as is
/// and a rejected bucket comes back through the normal error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    /// 1 minute
    Minute1,
    /// 5 minutes
    Minute5,
    /// 15 minutes
    Minute15,
    /// 30 minutes
    Minute30,
    /// 1 hour
    Hour1,
    /// 2 hours
    Hour2,
    /// 4 hours (CoinCap accepts it on candles only)
    Hour4,
    /// 6 hours (CoinCap accepts it on history only)
    Hour6,
    /// 8 hours (CoinCap accepts it on candles only)
    Hour8,
    /// 12 hours
    Hour12,
    /// 1 day
    Day1,
    /// 1 week (CoinCap accepts it on candles only)
    Week1,
}

impl Interval {
    /// The wire representation, e.g. `"h1"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "m1",
            Self::Minute5 => "m5",
            Self::Minute15 => "m15",
            Self::Minute30 => "m30",
            Self::Hour1 => "h1",
            Self::Hour2 => "h2",
            Self::Hour4 => "h4",
            Self::Hour6 => "h6",
            Self::Hour8 => "h8",
            Self::Hour12 => "h12",
            Self::Day1 => "d1",
            Self::Week1 => "w1",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.as_str().to_string()
    }
}

/// Parameters for listing assets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetsRequest {
    /// Search by asset id or symbol.
    pub search: Option<String>,
    /// Restrict to these asset ids.
    pub ids: Option<Vec<String>>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl AssetsRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search by asset id or symbol.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restrict to the given asset ids.
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the result offset.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Parameters for an asset's price history.
#[derive(Debug, Clone, Serialize)]
pub struct AssetHistoryRequest {
    /// Bucket size (required by CoinCap).
    pub interval: String,
    /// Start of the range, UNIX milliseconds.
    pub start: Option<i64>,
    /// End of the range, UNIX milliseconds.
    pub end: Option<i64>,
}

impl AssetHistoryRequest {
    /// Create a request for the given interval.
    pub fn new(interval: impl Into<String>) -> Self {
        Self {
            interval: interval.into(),
            start: None,
            end: None,
        }
    }

    /// Set the range start (UNIX milliseconds).
    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the range end (UNIX milliseconds).
    pub fn end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }
}

/// Parameters for the markets trading an asset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetMarketsRequest {
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl AssetMarketsRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the result offset.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Parameters for listing markets.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketsRequest {
    /// Exchange id, e.g. `"binance"`.
    pub exchange_id: Option<String>,
    /// Base asset symbol, e.g. `"BTC"`.
    pub base_symbol: Option<String>,
    /// Quote asset symbol.
    pub quote_symbol: Option<String>,
    /// Base asset id, e.g. `"bitcoin"`.
    pub base_id: Option<String>,
    /// Quote asset id.
    pub quote_id: Option<String>,
    /// Symbol of an asset on either side of the pair.
    pub asset_symbol: Option<String>,
    /// Id of an asset on either side of the pair.
    pub asset_id: Option<String>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl MarketsRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by exchange id.
    pub fn exchange_id(mut self, exchange_id: impl Into<String>) -> Self {
        self.exchange_id = Some(exchange_id.into());
        self
    }

    /// Filter by base symbol.
    pub fn base_symbol(mut self, base_symbol: impl Into<String>) -> Self {
        self.base_symbol = Some(base_symbol.into());
        self
    }

    /// Filter by quote symbol.
    pub fn quote_symbol(mut self, quote_symbol: impl Into<String>) -> Self {
        self.quote_symbol = Some(quote_symbol.into());
        self
    }

    /// Filter by base asset id.
    pub fn base_id(mut self, base_id: impl Into<String>) -> Self {
        self.base_id = Some(base_id.into());
        self
    }

    /// Filter by quote asset id.
    pub fn quote_id(mut self, quote_id: impl Into<String>) -> Self {
        self.quote_id = Some(quote_id.into());
        self
    }

    /// Filter by an asset symbol on either side.
    pub fn asset_symbol(mut self, asset_symbol: impl Into<String>) -> Self {
        self.asset_symbol = Some(asset_symbol.into());
        self
    }

    /// Filter by an asset id on either side.
    pub fn asset_id(mut self, asset_id: impl Into<String>) -> Self {
        self.asset_id = Some(asset_id.into());
        self
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the result offset.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Parameters for candle (OHLCV) data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlesRequest {
    /// Exchange id.
    pub exchange: String,
    /// Bucket size.
    pub interval: String,
    /// Base asset id.
    pub base_id: String,
    /// Quote asset id.
    pub quote_id: String,
    /// Start of the range, UNIX milliseconds.
    pub start: Option<i64>,
    /// End of the range, UNIX milliseconds.
    pub end: Option<i64>,
}

impl CandlesRequest {
    /// Create a request for a pair on an exchange.
    pub fn new(
        exchange: impl Into<String>,
        interval: impl Into<String>,
        base_id: impl Into<String>,
        quote_id: impl Into<String>,
    ) -> Self {
        Self {
            exchange: exchange.into(),
            interval: interval.into(),
            base_id: base_id.into(),
            quote_id: quote_id.into(),
            start: None,
            end: None,
        }
    }

    /// Set the range start (UNIX milliseconds).
    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the range end (UNIX milliseconds).
    pub fn end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }
}
