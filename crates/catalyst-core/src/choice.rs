//! Closed value sets for the enumerated record fields.
//!
//! Every enumerated field (status, priority, category, mood, ...) is a
//! plain Rust enum generated by [`closed_enum!`]. The macro keeps the
//! allowed-value list in one place and gives each enum the same
//! case-insensitive parser and the same error message shape:
//!
//! ```text
//! Invalid status 'hired'. Must be one of: applied, screening, ...
//! ```

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($field:literal) {
            $(
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every allowed value, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Comma-separated list of allowed values.
            pub fn allowed() -> String {
                Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::CatalystError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == needle)
                    .ok_or_else(|| {
                        $crate::error::CatalystError::Invalid(format!(
                            "Invalid {} '{}'. Must be one of: {}",
                            $field,
                            needle,
                            Self::allowed()
                        ))
                    })
            }
        }
    };
}

pub(crate) use closed_enum;
