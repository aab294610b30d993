//! Helper macro generating port error enums with one constructor per variant.
//!
//! Each variant gets a `thiserror` message and a snake-case constructor that
//! accepts `impl Into<_>` for every field, so adapters can write
//! `UserSourceError::transport(err.to_string())` or pass a `&str` directly.
//! Attributes on fields, doc comments included, are kept on the variant.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build the [`Self::", stringify!($variant), "`] variant.")]
            #[must_use]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Build the [`Self::", stringify!($variant), "`] variant.")]
            #[must_use]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( {
                    $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
                } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $( $(#[$field_meta])* $field : $ty ),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor and message coverage for generated port errors.

    define_port_error! {
        pub enum SamplePortError {
            Unavailable => "source unavailable",
            Failed { message: String } => "failed: {message}",
            Rejected { status: u16, message: String } => "rejected ({status}): {message}",
            Annotated {
                /// Documented field.
                detail: String,
            } => "annotated: {detail}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(SamplePortError::unavailable(), SamplePortError::Unavailable);
        assert_eq!(
            SamplePortError::unavailable().to_string(),
            "source unavailable"
        );
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::failed("connection reset");
        assert_eq!(err.to_string(), "failed: connection reset");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = SamplePortError::rejected(503_u16, "maintenance");
        assert!(matches!(
            err,
            SamplePortError::Rejected { status: 503, .. }
        ));
        assert_eq!(err.to_string(), "rejected (503): maintenance");
    }

    #[test]
    fn field_attributes_are_accepted() {
        let err = SamplePortError::annotated("with docs");
        assert_eq!(err.to_string(), "annotated: with docs");
    }
}
