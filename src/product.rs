//! Coffee catalog element type.
//!
//! [`Product`] is the validated record the set was built to hold: a priced,
//! weighed, and rated coffee entry. The container stores it opaquely and only
//! ever asks for [`PartialEq`], so everything here (validation, derived
//! measures, rendering) is the element's own contract, and its errors
//! propagate unchanged through the set.

use core::fmt;

use thiserror::Error;

/// Errors produced when constructing or updating a [`Product`].
///
/// These are deterministic validation failures; the set never produces or
/// wraps them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductError {
    /// The product name was empty or all whitespace.
    #[error("product name cannot be empty")]
    EmptyName,

    /// The price was not a positive, finite amount.
    #[error("price must be a positive finite amount, got {0}")]
    InvalidPrice(f64),

    /// A weight or volume was negative or not finite.
    #[error("{field} must be a non-negative finite number, got {value}")]
    InvalidMeasure {
        /// Which measure was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The quality rating was above the 0-10 scale.
    #[error("quality rating must be at most 10, got {0}")]
    RatingOutOfRange(u8),

    /// Price per kilogram is undefined for a weightless product.
    #[error("gross weight is zero, price per kilogram is undefined")]
    ZeroGrossWeight,
}

/// Physical form a coffee product is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grind {
    /// Unground roasted beans.
    WholeBean,
    /// Pre-ground coffee.
    Ground,
}

impl fmt::Display for Grind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grind::WholeBean => f.write_str("whole bean"),
            Grind::Ground => f.write_str("ground"),
        }
    }
}

/// A validated coffee catalog entry.
///
/// All fields are validated on construction and on every setter, so a
/// `Product` value is well-formed by construction: non-empty name, positive
/// finite price, non-negative finite measures, rating on the 0-10 scale.
///
/// Equality is value equality over every field. That is what feeds
/// [`LinkedSet`](crate::LinkedSet)'s duplicate detection: two separately
/// constructed products with identical fields are the same entry. `Eq` cannot
/// be implemented (the measures are `f64`), and the container never asks for
/// it; validation keeps `NaN` out, so the partial cases of `PartialEq` are
/// unreachable for well-formed values.
///
/// # Examples
///
/// ```
/// use chain_set::{Grind, Product};
///
/// let espresso = Product::new("Espresso", Grind::Ground, 15.0, 0.2, 0.05, 0.1, 0.02, 8)?;
/// assert_eq!(espresso.gross_weight(), 0.25);
/// assert_eq!(espresso.price_per_kilogram()?, 60.0);
/// # Ok::<(), chain_set::ProductError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    grind: Grind,
    price: f64,
    net_weight: f64,
    packaging_weight: f64,
    net_volume: f64,
    packaging_volume: f64,
    rating: u8,
}

impl Product {
    /// Builds a validated product.
    ///
    /// Weights are kilograms, volumes are liters, the rating is on a 0-10
    /// scale. Returns the first validation failure, checked in declaration
    /// order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        grind: Grind,
        price: f64,
        net_weight: f64,
        packaging_weight: f64,
        net_volume: f64,
        packaging_volume: f64,
        rating: u8,
    ) -> Result<Self, ProductError> {
        Ok(Product {
            name: check_name(name.into())?,
            grind,
            price: check_price(price)?,
            net_weight: check_measure("net weight", net_weight)?,
            packaging_weight: check_measure("packaging weight", packaging_weight)?,
            net_volume: check_measure("net volume", net_volume)?,
            packaging_volume: check_measure("packaging volume", packaging_volume)?,
            rating: check_rating(rating)?,
        })
    }

    /// The product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The physical form the product is sold in.
    pub fn grind(&self) -> Grind {
        self.grind
    }

    /// The price in currency units.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// The weight of the coffee content, in kilograms.
    pub fn net_weight(&self) -> f64 {
        self.net_weight
    }

    /// The weight of the packaging, in kilograms.
    pub fn packaging_weight(&self) -> f64 {
        self.packaging_weight
    }

    /// The volume of the coffee content, in liters.
    pub fn net_volume(&self) -> f64 {
        self.net_volume
    }

    /// The volume of the packaging, in liters.
    pub fn packaging_volume(&self) -> f64 {
        self.packaging_volume
    }

    /// The quality rating, between 0 and 10.
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Combined weight of content and packaging, in kilograms.
    pub fn gross_weight(&self) -> f64 {
        self.net_weight + self.packaging_weight
    }

    /// Combined volume of content and packaging, in liters.
    pub fn gross_volume(&self) -> f64 {
        self.net_volume + self.packaging_volume
    }

    /// Price divided by gross weight.
    ///
    /// Errors with [`ProductError::ZeroGrossWeight`] when both weights are
    /// zero, since the ratio is undefined.
    pub fn price_per_kilogram(&self) -> Result<f64, ProductError> {
        let gross = self.gross_weight();
        if gross == 0.0 {
            return Err(ProductError::ZeroGrossWeight);
        }
        Ok(self.price / gross)
    }

    /// Renames the product. Rejects empty or all-whitespace names.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        self.name = check_name(name.into())?;
        Ok(())
    }

    /// Changes the physical form.
    pub fn set_grind(&mut self, grind: Grind) {
        self.grind = grind;
    }

    /// Reprices the product. Rejects non-positive or non-finite amounts.
    pub fn set_price(&mut self, price: f64) -> Result<(), ProductError> {
        self.price = check_price(price)?;
        Ok(())
    }

    /// Updates the content weight, in kilograms.
    pub fn set_net_weight(&mut self, weight: f64) -> Result<(), ProductError> {
        self.net_weight = check_measure("net weight", weight)?;
        Ok(())
    }

    /// Updates the packaging weight, in kilograms.
    pub fn set_packaging_weight(&mut self, weight: f64) -> Result<(), ProductError> {
        self.packaging_weight = check_measure("packaging weight", weight)?;
        Ok(())
    }

    /// Updates the content volume, in liters.
    pub fn set_net_volume(&mut self, volume: f64) -> Result<(), ProductError> {
        self.net_volume = check_measure("net volume", volume)?;
        Ok(())
    }

    /// Updates the packaging volume, in liters.
    pub fn set_packaging_volume(&mut self, volume: f64) -> Result<(), ProductError> {
        self.packaging_volume = check_measure("packaging volume", volume)?;
        Ok(())
    }

    /// Updates the quality rating. Rejects ratings above 10.
    pub fn set_rating(&mut self, rating: u8) -> Result<(), ProductError> {
        self.rating = check_rating(rating)?;
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Grind: {}", self.grind)?;
        writeln!(f, "Price: ${:.2}", self.price)?;
        writeln!(f, "Net Weight: {:.2} kg", self.net_weight)?;
        writeln!(f, "Packaging Weight: {:.2} kg", self.packaging_weight)?;
        writeln!(f, "Gross Weight: {:.2} kg", self.gross_weight())?;
        writeln!(f, "Net Volume: {:.2} L", self.net_volume)?;
        writeln!(f, "Packaging Volume: {:.2} L", self.packaging_volume)?;
        writeln!(f, "Gross Volume: {:.2} L", self.gross_volume())?;
        writeln!(f, "Quality Rating: {}/10", self.rating)?;
        match self.price_per_kilogram() {
            Ok(ratio) => write!(f, "Price/Weight: ${ratio:.2} per kg"),
            Err(_) => write!(f, "Price/Weight: n/a"),
        }
    }
}

fn check_name(name: String) -> Result<String, ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::EmptyName);
    }
    Ok(name)
}

fn check_price(price: f64) -> Result<f64, ProductError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(price)
}

fn check_measure(field: &'static str, value: f64) -> Result<f64, ProductError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ProductError::InvalidMeasure { field, value });
    }
    Ok(value)
}

fn check_rating(rating: u8) -> Result<u8, ProductError> {
    if rating > 10 {
        return Err(ProductError::RatingOutOfRange(rating));
    }
    Ok(rating)
}
