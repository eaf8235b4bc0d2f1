//! Flattening helpers for sequenced values.
//!
//! `Append` and `Prepend` grow a tuple by one element at either end so that
//! sequencing three or more parsers gives `(A, B, C)` rather than
//! `((A, B), C)` or `(A, (B, C))`.

/// Adds a value to the back of a tuple.
pub trait Append<U> {
    type Output;

    fn append(self, value: U) -> Self::Output;
}

/// Adds a value to the front of a tuple.
pub trait Prepend<U> {
    type Output;

    fn prepend(self, value: U) -> Self::Output;
}

macro_rules! impl_tuple_ops {
    ($($ty:ident $name:ident),+) => {
        impl<$($ty,)+ U> Append<U> for ($($ty,)+) {
            type Output = ($($ty,)+ U,);

            fn append(self, value: U) -> Self::Output {
                let ($($name,)+) = self;
                ($($name,)+ value,)
            }
        }

        impl<$($ty,)+ U> Prepend<U> for ($($ty,)+) {
            type Output = (U, $($ty,)+);

            fn prepend(self, value: U) -> Self::Output {
                let ($($name,)+) = self;
                (value, $($name,)+)
            }
        }
    };
}

impl_tuple_ops!(A a);
impl_tuple_ops!(A a, B b);
impl_tuple_ops!(A a, B b, C c);
impl_tuple_ops!(A a, B b, C c, D d);
impl_tuple_ops!(A a, B b, C c, D d, E e);
impl_tuple_ops!(A a, B b, C c, D d, E e, F f);
impl_tuple_ops!(A a, B b, C c, D d, E e, F f, G g);
