use core::fmt;

/// Declares a compact, copyable catalog key.
///
/// Ids come from the data set and are stored verbatim; they are not indices.
macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(u32);

        impl $name {
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

catalog_id!(
    /// Product category key (pumps, hydraulics, ...).
    CategoryId
);
catalog_id!(
    /// Application sub-type key, scoped to a category.
    ApplicationTypeId
);
catalog_id!(
    /// Catalog product key.
    ProductId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_raw() {
        for raw in [0_u32, 1, 4, 16, 10_000] {
            assert_eq!(CategoryId::new(raw).get(), raw);
            assert_eq!(ProductId::from(raw).get(), raw);
        }
    }

    #[test]
    fn debug_names_the_key_kind() {
        assert_eq!(format!("{:?}", ApplicationTypeId::new(3)), "ApplicationTypeId(3)");
        assert_eq!(ApplicationTypeId::new(3).to_string(), "3");
    }
}
