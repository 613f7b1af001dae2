/// Generates the accessors that exist once per side of an `Either`:
/// `is_<side>` and `<side>`, which extracts the payload as an `Option`.
///
/// Expanded inside an `impl<L, R> Either<L, R>` block.
#[macro_export]
macro_rules! define_side_accessors {
    ($side:ident, $variant:ident, $other:ident, $payload:ty) => {
        ::paste::paste! {
            #[doc = "Returns `true` if this is a `" $variant "` value."]
            #[must_use]
            pub fn [<is_ $side>](&self) -> bool {
                match self {
                    Either::$variant(_) => true,
                    Either::$other(_) => false,
                }
            }

            #[doc = "Returns the `" $variant "` payload, or `None` for `" $other "`."]
            #[must_use]
            pub fn $side(self) -> Option<$payload> {
                match self {
                    Either::$variant(value) => Some(value),
                    Either::$other(_) => None,
                }
            }
        }
    };
}
