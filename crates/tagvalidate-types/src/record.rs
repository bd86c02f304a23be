use crate::tag::StructTag;
use crate::value::Value;

/// A structured value with named fields.
///
/// This is the capability view validation needs from a record: for each
/// field, its name, visibility, struct tag and current value. Implement it by
/// hand, declare the type with [`record!`](crate::record!), or pair a JSON value
/// with a schema through [`DynamicRecord`](crate::DynamicRecord).
pub trait Record {
    /// Returns the fields of this record in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// One field of a [`Record`].
#[derive(Debug)]
pub struct Field<'a> {
    /// Field name as declared.
    pub name: &'a str,
    /// Whether the field is visible outside its declaring module.
    pub exported: bool,
    /// Metadata attached to the field.
    pub tag: StructTag<'a>,
    /// Current value of the field.
    pub value: Value<'a>,
}

impl<'a> Field<'a> {
    /// Creates an exported field with an empty tag.
    pub fn new(name: &'a str, value: Value<'a>) -> Self {
        Self {
            name,
            exported: true,
            tag: StructTag::default(),
            value,
        }
    }

    /// Sets the struct tag.
    #[must_use]
    pub fn with_tag(mut self, tag: &'a str) -> Self {
        self.tag = StructTag::new(tag);
        self
    }

    /// Marks the field as private.
    #[must_use]
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

/// Declares a struct and implements [`Record`] and [`Reflect`](crate::Reflect)
/// for it.
///
/// Each field may be followed by `=> "tag"` holding its struct tag. A field
/// with any visibility qualifier is exported; a field without one is private.
/// Generic structs are not supported; implement [`Record`] by hand for those.
///
/// Rules only run on fields whose type reflects as an integer or a string. A
/// directive on a `usize`, `u64`, `Option<_>` or container field is accepted
/// and silently has no effect; see [`Reflect`](crate::Reflect) for the exact
/// mapping. Use `i64` or a narrower integer for fields that need `min`, `max`
/// or `in`.
///
/// ```
/// tagvalidate_types::record! {
///     #[derive(Debug, Clone)]
///     pub struct User {
///         pub name: String => r#"validate:"min:1;max:32""#,
///         pub age: i64 => r#"validate:"min:18""#,
///         notes: String,
///     }
/// }
///
/// use tagvalidate_types::Record;
///
/// let user = User { name: "ana".into(), age: 30, notes: String::new() };
/// let fields = user.fields();
/// assert_eq!(fields[1].tag.get("validate"), "min:18");
/// assert!(!fields[2].exported);
/// ```
#[macro_export]
macro_rules! record {
    (@tag) => {
        ""
    };
    (@tag $tag:literal) => {
        $tag
    };
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fattr:meta])*
                $fvis:vis $field:ident : $fty:ty $(=> $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        $vis struct $name {
            $(
                $(#[$fattr])*
                $fvis $field: $fty,
            )*
        }

        impl $crate::Record for $name {
            fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field {
                            name: ::core::stringify!($field),
                            exported: !::core::stringify!($fvis).is_empty(),
                            tag: $crate::StructTag::new($crate::record!(@tag $($tag)?)),
                            value: $crate::Reflect::reflect(&self.$field),
                        },
                    )*
                ]
            }
        }

        impl $crate::Reflect for $name {
            fn reflect(&self) -> $crate::Value<'_> {
                $crate::Value::record(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Field, Kind, Record, Reflect, Value};

    crate::record! {
        struct Inner {
            pub code: i32 => r#"validate:"in:1,2""#,
        }
    }

    crate::record! {
        #[derive(Debug)]
        struct Outer {
            pub(crate) title: String => r#"validate:"len:5" json:"title""#,
            hidden: i64 => r#"validate:"min:1""#,
            pub flags: Vec<u8>,
        }
    }

    struct Manual {
        count: i64,
    }

    impl Record for Manual {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new("count", self.count.reflect()).with_tag(r#"validate:"max:3""#),
                Field::new("secret", Value::Unsupported).private(),
            ]
        }
    }

    #[test]
    fn macro_lists_fields_in_declaration_order_with_visibility() {
        let outer = Outer {
            title: "hello".into(),
            hidden: 4,
            flags: vec![1],
        };
        let fields = outer.fields();
        let names: Vec<_> = fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["title", "hidden", "flags"]);

        assert!(fields[0].exported);
        assert!(!fields[1].exported);
        assert!(fields[2].exported);

        assert_eq!(fields[0].tag.get("json"), "title");
        assert_eq!(fields[1].tag.get("validate"), "min:1");
        assert!(fields[2].tag.is_empty());

        assert_eq!(fields[0].value.as_str(), Some("hello"));
        assert_eq!(fields[1].value.as_int(), Some(4));
        assert_eq!(fields[2].value.kind(), Kind::Unsupported);
    }

    #[test]
    fn macro_records_reflect_as_nested_structs() {
        let inner = Inner { code: 2 };
        let value = inner.reflect();
        assert_eq!(value.kind(), Kind::Struct);

        let record = value.as_record().expect("inner should reflect as a record");
        let fields = record.fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].value.as_int(), Some(2));
        assert_eq!(format!("{value:?}"), "Struct([\"code\"])");
    }

    #[test]
    fn manual_records_use_field_builders() {
        let manual = Manual { count: 1 };
        let fields = manual.fields();
        assert!(fields[0].exported);
        assert_eq!(fields[0].tag.get("validate"), "max:3");
        assert!(!fields[1].exported);
        assert_eq!(fields[1].value.kind(), Kind::Unsupported);
    }
}
