use poem_openapi::Object;

use business::domain::cart::summary::{CartLine, CartSummary};

#[derive(Debug, Clone, Object)]
pub struct CartQuantityResponse {
    pub item_id: String,
    /// Quantity after the change, 0 once the item left the cart
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub item_id: String,
    pub quantity: u32,
    /// Missing when the item is no longer in the catalog
    #[oai(skip_serializing_if_is_none)]
    pub unit_price: Option<f64>,
    pub line_total: f64,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            item_id: line.item_id.to_string(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            line_total: line.line_total,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub session_id: String,
    /// Cart lines ordered by item id
    pub lines: Vec<CartLineResponse>,
    pub total_quantity: u64,
    pub total_amount: f64,
}

impl CartResponse {
    pub fn from_summary(session_id: String, summary: CartSummary) -> Self {
        Self {
            session_id,
            lines: summary.lines.into_iter().map(Into::into).collect(),
            total_quantity: summary.total_quantity,
            total_amount: summary.total_amount,
        }
    }
}
