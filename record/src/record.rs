//! The `Record` trait and the `record!` descriptor macro.

use cellmap_core::Slot;

/// A declared field: its path inside the record and its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name, dotted for fields of embedded records (`address.city`).
    pub path: String,
    /// Raw tag, e.g. `"cf1:name"` or `",rowkey"`.
    pub tag: &'static str,
}

impl FieldDecl {
    pub fn new(path: impl Into<String>, tag: &'static str) -> Self {
        Self {
            path: path.into(),
            tag,
        }
    }

    /// Prefix the declarations of an embedded record with the embedding field.
    pub fn nested(field: &str, inner: Vec<FieldDecl>) -> Vec<FieldDecl> {
        inner
            .into_iter()
            .map(|decl| FieldDecl {
                path: format!("{}.{}", field, decl.path),
                tag: decl.tag,
            })
            .collect()
    }
}

/// A record whose fields map onto row coordinates.
///
/// `fields` is the static descriptor table of the type and `slots` projects an
/// instance onto it. Both must list the same fields in the same order, with
/// embedded records flattened in place. Use [`record!`](crate::record) to
/// generate a consistent implementation.
pub trait Record: 'static {
    /// Declared fields in declaration order.
    fn fields() -> Vec<FieldDecl>;

    /// Mutable slots for every declared field, in the order of [`Record::fields`].
    fn slots(&mut self) -> Vec<Slot<'_>>;
}

/// Implement [`Record`] for a struct from a field table.
///
/// Each entry binds a field either to a tag literal or, with `embed Type`, to an
/// embedded record whose fields join the parent's table.
///
/// ```ignore
/// record!(Person {
///     key => ",rowkey",
///     name => "p:name",
///     age => "p:age",
///     address => embed Address,
/// });
/// ```
#[macro_export]
macro_rules! record {
    (@decls $decls:ident; ) => {};
    (@decls $decls:ident; $field:ident => embed $ty:ty $(, $($rest:tt)*)?) => {
        $decls.extend($crate::FieldDecl::nested(
            stringify!($field),
            <$ty as $crate::Record>::fields(),
        ));
        $crate::record!(@decls $decls; $($($rest)*)?);
    };
    (@decls $decls:ident; $field:ident => $tag:literal $(, $($rest:tt)*)?) => {
        $decls.push($crate::FieldDecl::new(stringify!($field), $tag));
        $crate::record!(@decls $decls; $($($rest)*)?);
    };

    (@slots $this:ident, $slots:ident; ) => {};
    (@slots $this:ident, $slots:ident; $field:ident => embed $ty:ty $(, $($rest:tt)*)?) => {
        $slots.extend(<$ty as $crate::Record>::slots(&mut $this.$field));
        $crate::record!(@slots $this, $slots; $($($rest)*)?);
    };
    (@slots $this:ident, $slots:ident; $field:ident => $tag:literal $(, $($rest:tt)*)?) => {
        $slots.push($crate::Slot::from(&mut $this.$field));
        $crate::record!(@slots $this, $slots; $($($rest)*)?);
    };

    ($name:ty { $($body:tt)* }) => {
        impl $crate::Record for $name {
            fn fields() -> ::std::vec::Vec<$crate::FieldDecl> {
                let mut decls = ::std::vec::Vec::new();
                $crate::record!(@decls decls; $($body)*);
                decls
            }

            fn slots(&mut self) -> ::std::vec::Vec<$crate::Slot<'_>> {
                let mut slots = ::std::vec::Vec::new();
                $crate::record!(@slots self, slots; $($body)*);
                slots
            }
        }
    };
}
