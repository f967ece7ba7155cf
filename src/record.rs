//! Record descriptors for decode targets.
//!
//! A decode target describes its fields once through a [`Schema`]: an
//! ordered list of field names, optional column tags, kinds and setter
//! closures. The [`impl_record!`](crate::impl_record) macro writes the
//! schema for plain structs; [`SchemaBuilder`] covers everything else.

use crate::registry::{FieldType, Kind, Value};
use std::fmt;

/// Setter writing a converted value into one field of `T`
pub type Setter<T> = Box<dyn Fn(&mut T, Value) -> Result<(), Value> + Send + Sync>;

/// Setter storing a field's empty value
type EmptySetter<T> = Box<dyn Fn(&mut T) + Send + Sync>;

/// A type that lines can be decoded into
pub trait Record: Sized + 'static {
    /// Field descriptors, in declaration order
    fn schema() -> &'static Schema<Self>;
}

/// One declared field of a record
pub struct FieldDescriptor<T> {
    name: &'static str,
    tag: Option<&'static str>,
    kind: Kind,
    setter: Option<Setter<T>>,
    empty: Option<EmptySetter<T>>,
}

impl<T> FieldDescriptor<T> {
    /// Declared field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Explicit column name override
    pub fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether the decoder may write this field
    pub fn is_settable(&self) -> bool {
        self.setter.is_some()
    }

    /// Write a value into the target, handing it back if it does not fit
    pub(crate) fn set(&self, target: &mut T, value: Value) -> Result<(), Value> {
        match &self.setter {
            Some(setter) => setter(target, value),
            None => Err(value),
        }
    }

    /// Store the field's empty value; `false` when the field has none
    pub(crate) fn set_empty(&self, target: &mut T) -> bool {
        match &self.empty {
            Some(empty) => {
                empty(target);
                true
            }
            None => false,
        }
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("kind", &self.kind)
            .field("settable", &self.is_settable())
            .finish()
    }
}

/// Ordered field descriptors of a record type
pub struct Schema<T> {
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: 'static> Schema<T> {
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder { fields: Vec::new() }
    }
}

impl<T> Schema<T> {
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Look up a field by its declared name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.fields).finish()
    }
}

/// Builder collecting field descriptors in declaration order
pub struct SchemaBuilder<T> {
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: 'static> SchemaBuilder<T> {
    /// Add a field matched by its name
    pub fn field<F>(self, name: &'static str, accessor: fn(&mut T) -> &mut F) -> Self
    where
        F: FieldType + 'static,
    {
        self.field_with_tag(name, None, accessor)
    }

    /// Add a field bound to an explicit column name
    pub fn tagged<F>(self, name: &'static str, tag: &'static str, accessor: fn(&mut T) -> &mut F) -> Self
    where
        F: FieldType + 'static,
    {
        self.field_with_tag(name, Some(tag), accessor)
    }

    /// Add a field with an optional column override
    pub fn field_with_tag<F>(
        mut self,
        name: &'static str,
        tag: Option<&'static str>,
        accessor: fn(&mut T) -> &mut F,
    ) -> Self
    where
        F: FieldType + 'static,
    {
        let setter: Setter<T> = Box::new(move |target: &mut T, value: Value| {
            *accessor(target) = F::from_value(value)?;
            Ok(())
        });

        let empty = F::empty().map(|_| -> EmptySetter<T> {
            Box::new(move |target: &mut T| {
                if let Some(value) = F::empty() {
                    *accessor(target) = value;
                }
            })
        });

        self.fields.push(FieldDescriptor {
            name,
            tag,
            kind: F::KIND,
            setter: Some(setter),
            empty,
        });
        self
    }

    /// Declare a field the decoder must never write
    pub fn read_only(mut self, name: &'static str, kind: Kind) -> Self {
        self.fields.push(FieldDescriptor {
            name,
            tag: None,
            kind,
            setter: None,
            empty: None,
        });
        self
    }

    pub fn build(self) -> Schema<T> {
        Schema {
            fields: self.fields,
        }
    }
}

/// Implement [`Record`] for a struct by listing its fields
///
/// Each entry is `field: Type`, optionally preceded by
/// `#[column = "name"]` to bind it to a differently named column.
///
/// ```rust
/// #[derive(Debug, Default)]
/// struct Visit {
///     user: String,
///     hits: u32,
/// }
///
/// fln::impl_record!(Visit {
///     #[column = "user_name"]
///     user: String,
///     hits: u32,
/// });
///
/// let decoder = fln::Decoder::from_header("user_name,hits", ",").unwrap();
/// let visit: Visit = decoder.decode_new("ana,3").unwrap();
/// assert_eq!(visit.user, "ana");
/// assert_eq!(visit.hits, 3);
/// ```
#[macro_export]
macro_rules! impl_record {
    (@tag $tag:literal) => {
        ::std::option::Option::Some($tag)
    };
    (@tag) => {
        ::std::option::Option::None
    };
    ($record:ty { $( $(#[column = $tag:literal])? $field:ident : $ty:ty ),* $(,)? }) => {
        impl $crate::Record for $record {
            fn schema() -> &'static $crate::Schema<Self> {
                static SCHEMA: ::std::sync::OnceLock<$crate::Schema<$record>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::Schema::<$record>::builder()
                        $(
                            .field_with_tag::<$ty>(
                                ::std::stringify!($field),
                                $crate::impl_record!(@tag $($tag)?),
                                |record: &mut $record| &mut record.$field,
                            )
                        )*
                        .build()
                })
            }
        }
    };
}
