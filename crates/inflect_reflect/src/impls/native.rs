use crate::derive::impl_reflect_opaque;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::Reflect;

impl_reflect_opaque!(bool(clone, partial_eq, debug));
impl_reflect_opaque!(char(clone, partial_eq, debug));
impl_reflect_opaque!(u8(clone, partial_eq, debug));
impl_reflect_opaque!(u16(clone, partial_eq, debug));
impl_reflect_opaque!(u32(clone, partial_eq, debug));
impl_reflect_opaque!(u64(clone, partial_eq, debug));
impl_reflect_opaque!(u128(clone, partial_eq, debug));
impl_reflect_opaque!(usize(clone, partial_eq, debug));
impl_reflect_opaque!(i8(clone, partial_eq, debug));
impl_reflect_opaque!(i16(clone, partial_eq, debug));
impl_reflect_opaque!(i32(clone, partial_eq, debug));
impl_reflect_opaque!(i64(clone, partial_eq, debug));
impl_reflect_opaque!(i128(clone, partial_eq, debug));
impl_reflect_opaque!(isize(clone, partial_eq, debug));
impl_reflect_opaque!(f32(clone, partial_eq, debug));
impl_reflect_opaque!(f64(clone, partial_eq, debug));

impl_reflect_opaque!(::alloc::string::String(clone, partial_eq, debug));
impl_reflect_opaque!(::core::time::Duration(clone, partial_eq, debug));
impl_reflect_opaque!(::std::time::SystemTime(clone, partial_eq, debug));

impl TypePath for &'static str {
    #[inline]
    fn type_path() -> &'static str {
        "&str"
    }
    #[inline]
    fn type_name() -> &'static str {
        "&str"
    }
    #[inline]
    fn type_ident() -> &'static str {
        "&str"
    }
}

impl Typed for &'static str {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for &'static str {
    crate::impls::impl_simple_type_reflect!(Opaque);
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use core::time::Duration;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath};

    #[test]
    fn primitive_paths_have_no_module() {
        assert_eq!(u64::type_path(), "u64");
        assert_eq!(u64::module_path(), None);
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(Duration::type_name(), "Duration");
        assert_eq!(<&'static str>::type_path(), "&str");
    }

    #[test]
    fn opaque_values_compare_and_print() {
        let a: &dyn Reflect = &1.5_f64;
        assert_eq!(a.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(a.reflect_partial_eq(&1.5_f64), Some(true));
        assert_eq!(a.reflect_partial_eq(&1.5_f32), Some(false));
        assert_eq!(format!("{a:?}"), "1.5");

        let s: &dyn Reflect = &"abc";
        assert_eq!(format!("{s:?}"), "\"abc\"");
    }

    #[test]
    fn set_replaces_only_same_type() {
        let mut value = String::from("a");
        assert!(value.set(String::from("b").into_boxed_reflect()).is_ok());
        assert_eq!(value, "b");
        assert!(value.set(3_u8.into_boxed_reflect()).is_err());
        assert_eq!(value, "b");
    }
}
