use crate::Entity;
use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    rc::Rc,
    sync::Arc,
};

/// Runtime shape of a value handed to the registry.
pub enum Shape<'a> {
    Struct(&'a dyn Entity),
    Pointer(&'a dyn Reflect),
    Map,
    Slice,
    Scalar,
}

/// Exposes the [`Shape`] of a value.
///
/// Structs get it from `#[derive(Entity)]`, pointers, collections and scalars are covered here.
pub trait Reflect {
    fn shape(&self) -> Shape<'_>;
}

macro_rules! impl_reflect_pointer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $ty {
                fn shape(&self) -> Shape<'_> {
                    let inner: &T = self;
                    Shape::Pointer(inner)
                }
            }
        )+
    };
}
impl_reflect_pointer!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

macro_rules! impl_reflect_shape {
    ($shape:ident, $($ty:ty),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::$shape
                }
            }
        )+
    };
}
impl_reflect_shape!(
    Scalar, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64, String
);

impl<T> Reflect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Slice
    }
}

impl<T> Reflect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Slice
    }
}

impl<T, const N: usize> Reflect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Slice
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map
    }
}

impl<K, V> Reflect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map
    }
}
