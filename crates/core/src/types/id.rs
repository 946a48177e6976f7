//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, `AsRef<str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use threadline_core::define_id;
/// define_id!(WishlistId);
/// define_id!(StoreId);
///
/// let wishlist = WishlistId::new("w-1");
/// let store = StoreId::new("w-1");
///
/// // These are different types, so this won't compile:
/// // let _: WishlistId = store;
/// assert_eq!(wishlist.as_str(), store.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the ID is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(LineId);

impl LineId {
    /// Separator between the product and its variant discriminators.
    pub const VARIANT_SEPARATOR: char = '|';

    /// Build the line ID for a product variant.
    ///
    /// Size and colour are folded into the ID so that two variants of the same
    /// product never share a cart line. A product with no variant options keeps
    /// its bare product ID.
    ///
    /// ```rust
    /// # use threadline_core::{LineId, ProductId};
    /// let tee = ProductId::new("linen-tee");
    /// assert_eq!(LineId::for_variant(&tee, None, None).as_str(), "linen-tee");
    /// assert_eq!(LineId::for_variant(&tee, Some("M"), None).as_str(), "linen-tee|M|");
    /// assert_eq!(
    ///     LineId::for_variant(&tee, Some("M"), Some("sand")).as_str(),
    ///     "linen-tee|M|sand"
    /// );
    /// ```
    #[must_use]
    pub fn for_variant(product: &ProductId, size: Option<&str>, color: Option<&str>) -> Self {
        if size.is_none() && color.is_none() {
            return Self(product.as_str().to_owned());
        }
        let sep = Self::VARIANT_SEPARATOR;
        Self(format!(
            "{product}{sep}{}{sep}{}",
            size.unwrap_or_default(),
            color.unwrap_or_default()
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_produce_distinct_line_ids() {
        let product = ProductId::new("wrap-dress");
        let small_red = LineId::for_variant(&product, Some("S"), Some("red"));
        let small_blue = LineId::for_variant(&product, Some("S"), Some("blue"));
        let bare = LineId::for_variant(&product, None, None);

        assert_ne!(small_red, small_blue);
        assert_ne!(small_red, bare);
        assert_eq!(bare.as_str(), "wrap-dress");
    }

    #[test]
    fn test_colour_only_variant_keeps_position() {
        let product = ProductId::new("scarf");
        let id = LineId::for_variant(&product, None, Some("ochre"));
        assert_eq!(id.as_str(), "scarf||ochre");
    }

    #[test]
    fn test_serde_transparent() {
        let id = LineId::new("A");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"A\"");

        let parsed: LineId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_display_and_conversions() {
        let id = ProductId::from("boots");
        assert_eq!(format!("{id}"), "boots");
        assert!(!id.is_empty());
        assert_eq!(String::from(id), "boots");
        assert!(LineId::new("").is_empty());
    }
}
