//! Flat request parameter record shared by the exchange and quotation APIs

use crate::params::{CanonicalParams, EncodeParams};

/// Request parameters
///
/// One flat record covers every endpoint. Unset fields keep their zero value
/// and are left out of the encoded request.
///
/// # Example
///
/// ```
/// use upbit_types::{EncodeParams, OrderBy, RequestParams};
///
/// let params = RequestParams::new()
///     .market("KRW-BTC")
///     .limit(50)
///     .order_by(OrderBy::Asc);
///
/// assert_eq!(params.encode_params().query_string(), "limit=50&market=KRW-BTC&order_by=asc");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    pub market: String,
    pub markets: String,
    pub state: String,
    pub page: i64,
    pub limit: i64,
    pub order_by: String,
    pub uuid: String,
    pub identifier: String,
    pub side: String,
    pub volume: String,
    pub price: String,
    pub ord_type: String,
    pub smp_type: String,
    pub currency: String,
    pub txid: String,
    pub amount: String,
    pub to: String,
    pub count: i64,
    pub cursor: String,
    pub days_ago: i64,
    pub unit: i64,
    pub converting_price_unit: String,
    pub is_details: bool,
}

macro_rules! string_setters {
    ($($field:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Set `", stringify!($field), "`")]
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.$field = value.into();
                self
            }
        )+
    };
}

macro_rules! int_setters {
    ($($field:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Set `", stringify!($field), "`")]
            pub fn $field(mut self, value: i64) -> Self {
                self.$field = value;
                self
            }
        )+
    };
}

impl RequestParams {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    string_setters!(
        market,
        markets,
        state,
        order_by,
        uuid,
        identifier,
        side,
        volume,
        price,
        ord_type,
        smp_type,
        currency,
        txid,
        amount,
        to,
        cursor,
        converting_price_unit,
    );

    int_setters!(page, limit, count, days_ago, unit);

    /// Set `is_details`
    pub fn is_details(mut self, value: bool) -> Self {
        self.is_details = value;
        self
    }
}

impl EncodeParams for RequestParams {
    fn encode_params(&self) -> CanonicalParams {
        CanonicalParams::new()
            .with("market", &self.market)
            .with("markets", &self.markets)
            .with("state", &self.state)
            .with("page", self.page)
            .with("limit", self.limit)
            .with("order_by", &self.order_by)
            .with("uuid", &self.uuid)
            .with("identifier", &self.identifier)
            .with("side", &self.side)
            .with("volume", &self.volume)
            .with("price", &self.price)
            .with("ord_type", &self.ord_type)
            .with("smp_type", &self.smp_type)
            .with("currency", &self.currency)
            .with("txid", &self.txid)
            .with("amount", &self.amount)
            .with("to", &self.to)
            .with("count", self.count)
            .with("cursor", &self.cursor)
            .with("daysAgo", self.days_ago)
            .with("unit", self.unit)
            .with("convertingPriceUnit", &self.converting_price_unit)
            .with("isDetails", self.is_details)
    }
}
