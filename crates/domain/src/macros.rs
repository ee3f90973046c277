//! Macro for implementing string conversions on open tag enums
//!
//! The system of record writes lifecycle tags as free text. Domain enums
//! model the tags the engine cares about as closed variants and keep every
//! other value in an `Other(String)` variant so nothing is lost when a record
//! is serialized back.
//!
//! # Example
//!
//! ```rust
//! use kanban_domain::impl_tag_conversions;
//!
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! pub enum Priority {
//!     Urgent,
//!     Other(String),
//! }
//!
//! impl_tag_conversions!(Priority {
//!     Urgent => "URGENT",
//! });
//!
//! assert_eq!(Priority::from("URGENT"), Priority::Urgent);
//! assert_eq!(Priority::from("urgent"), Priority::Other("urgent".into()));
//! ```

/// Implements `as_str`, `Display`, `From<&str>`, `From<String>` and
/// `From<Enum> for String` for an enum with unit variants plus an
/// `Other(String)` fallback.
///
/// Parsing is exact and case-sensitive: only the listed strings map to the
/// named variants, anything else (including different casing or stray
/// whitespace) becomes `Other` with the raw value preserved.
#[macro_export]
macro_rules! impl_tag_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Raw tag as written by the system of record.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $str,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $enum_name {
            fn from(raw: &str) -> Self {
                $(if raw == $str {
                    return Self::$variant;
                })+
                Self::Other(raw.to_string())
            }
        }

        impl From<String> for $enum_name {
            fn from(raw: String) -> Self {
                $(if raw == $str {
                    return Self::$variant;
                })+
                Self::Other(raw)
            }
        }

        impl From<$enum_name> for String {
            fn from(tag: $enum_name) -> Self {
                match tag {
                    $($enum_name::$variant => $str.to_string(),)+
                    $enum_name::Other(raw) => raw,
                }
            }
        }
    };
}
