//! Emulation of higher-kinded types through generic associated types.

/// A type constructor of kind `* -> *`, emulated with a GAT.
///
/// `Self::Inner` is the element type of this concrete instantiation and
/// `Self::WithType<B>` is the same constructor applied to `B`. Together they
/// let the other typeclass traits talk about "the same container with a
/// different element" without true higher-kinded polymorphism.
///
/// # Examples
///
/// ```rust
/// use funrs::typeclass::TypeConstructor;
/// use funrs::union::Option;
///
/// fn element_type_name<F: TypeConstructor>() -> &'static str {
///     core::any::type_name::<F::Inner>()
/// }
///
/// assert_eq!(element_type_name::<Option<i32>>(), "i32");
/// ```
pub trait TypeConstructor {
    /// The element type `A` in `F<A>`.
    type Inner;

    /// The same constructor applied to another element type: `F<B>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
