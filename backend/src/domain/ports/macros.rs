//! `define_port_error!` generates port error enums with snake_case
//! constructors that accept `impl Into<T>` for every field.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
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
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
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
    use crate::domain::ports::{MessageRepositoryError, NotificationError};

    #[test]
    fn string_fields_accept_str() {
        let err = MessageRepositoryError::connection("refused");
        assert_eq!(
            err.to_string(),
            "message repository connection failed: refused"
        );
    }

    #[test]
    fn string_fields_accept_owned_strings() {
        let err = NotificationError::transport(String::from("timeout"));
        assert_eq!(
            err,
            NotificationError::Transport {
                message: "timeout".to_owned()
            }
        );
    }

    #[test]
    fn mixed_fields_follow_declaration_order() {
        let err = NotificationError::rejected(422_u16, "bad sender");
        assert_eq!(
            err,
            NotificationError::Rejected {
                status: 422,
                message: "bad sender".to_owned()
            }
        );
        assert_eq!(
            err.to_string(),
            "notification rejected with status 422: bad sender"
        );
    }
}
