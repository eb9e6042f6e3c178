//! Macros for ergonomic state machine construction.

/// Generate a `State` trait implementation for simple enums.
///
/// Also emits a `VARIANTS` constant listing every variant in declaration
/// order, which is the natural way to declare the closed state set on a
/// builder.
///
/// # Example
///
/// ```
/// use mainspring::core::State;
/// use mainspring::state_enum;
///
/// state_enum! {
///     pub enum WorkflowState {
///         Start,
///         Processing,
///         Done,
///     }
/// }
///
/// assert_eq!(WorkflowState::Processing.name(), "Processing");
/// assert_eq!(WorkflowState::VARIANTS.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl $name {
            /// All declared variants, in declaration order.
            $vis const VARIANTS: &'static [Self] = &[$(Self::$variant),*];
        }
    };
}
