use std::num::NonZeroU32;

use url::Url;

use crate::domain::cart::model::CartEntry;
use crate::domain::food_item::model::FoodItem;
use crate::domain::shared::value_objects::ItemId;

use super::errors::StorefrontError;

/// Star-rating image shown next to every item name.
pub const RATING_ASSET: &str = "rating_starts";

const IMAGES_DIR: &str = "images";

/// Public base URL that item images are served under (`{base}/images/{image}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBaseUrl(Url);

impl AssetBaseUrl {
    pub fn parse(raw: &str) -> Result<Self, StorefrontError> {
        let mut url = Url::parse(raw).map_err(|_| StorefrontError::InvalidBaseUrl)?;
        if url.cannot_be_a_base() {
            return Err(StorefrontError::InvalidBaseUrl);
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self(url))
    }

    /// Appends `images/{image}` to the base path. The image is always a single
    /// percent-encoded segment, so it can never replace the host or climb out
    /// of the images directory.
    pub fn image_url(&self, image: &str) -> Result<String, StorefrontError> {
        let mut url = self.0.clone();
        url.path_segments_mut()
            .map_err(|_| StorefrontError::InvalidImageReference)?
            .pop_if_empty()
            .push(IMAGES_DIR)
            .push(image);
        Ok(url.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Which control the item card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartControl {
    /// Item not in the cart: a single add button.
    Add { label: String },
    /// Item in the cart: decrement, quantity, increment.
    Stepper { quantity: NonZeroU32 },
}

/// Everything a storefront card needs to render one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price_label: String,
    pub image_url: String,
    pub rating_asset: &'static str,
    pub control: CartControl,
}

impl ItemView {
    pub fn render(
        item: &FoodItem,
        entry: CartEntry,
        base_url: &AssetBaseUrl,
    ) -> Result<Self, StorefrontError> {
        let control = match entry {
            CartEntry::Absent => CartControl::Add {
                label: format!("Add {} to cart", item.name),
            },
            CartEntry::Present(quantity) => CartControl::Stepper { quantity },
        };

        Ok(Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price_label: price_label(item.price),
            image_url: base_url.image_url(&item.image)?,
            rating_asset: RATING_ASSET,
            control,
        })
    }
}

/// `$` followed by the shortest decimal form of the price (`9.5` → `$9.5`, `12` → `$12`).
///
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent form
/// with an explicit sign on positive exponents (`1e+21`, `1e-7`), the way
/// browsers print numbers.
pub fn price_label(price: f64) -> String {
    let magnitude = price.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        let formatted = format!("{price:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("${mantissa}e+{exponent}")
            }
            _ => format!("${formatted}"),
        };
    }
    format!("${price}")
}
