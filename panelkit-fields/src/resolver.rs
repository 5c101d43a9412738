//! Value resolution against arbitrary domain objects.
//!
//! A field description does not know the shape of the objects it reads
//! from. Objects expose themselves through [`FieldSource`]; the description
//! builds an ordered list of [`ValueResolver`]s and the first one that
//! produces a value wins.

use std::collections::HashMap;
use std::fmt;

use crate::value::{OptionMap, Value};

/// An object a field value can be read from.
pub trait FieldSource {
    /// Invoke the zero-argument accessor `method`.
    ///
    /// Returns `None` when the object has no such accessor. An accessor that
    /// exists and yields nothing returns `Some(Value::Null)`.
    fn call(&self, method: &str) -> Option<Value>;

    /// Read the directly accessible property `name`, `None` when absent.
    fn property(&self, name: &str) -> Option<Value>;
}

/// One strategy for reading a value off a [`FieldSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueResolver {
    Method(String),
    Property(String),
}

impl ValueResolver {
    /// Try this strategy. A property holding `Null` counts as unset.
    pub fn resolve(&self, source: &dyn FieldSource) -> Option<Value> {
        match self {
            ValueResolver::Method(name) => source.call(name),
            ValueResolver::Property(name) => source.property(name).filter(|v| !v.is_null()),
        }
    }
}

impl fmt::Display for ValueResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueResolver::Method(name) => write!(f, "{name}()"),
            ValueResolver::Property(name) => write!(f, "->{name}"),
        }
    }
}

/// Run `resolvers` in order and return the first value produced.
pub fn resolve_first(resolvers: &[ValueResolver], source: &dyn FieldSource) -> Option<Value> {
    resolvers.iter().find_map(|r| r.resolve(source))
}

/// Mapping keys are properties; values have no accessors.
impl FieldSource for Value {
    fn call(&self, _method: &str) -> Option<Value> {
        None
    }

    fn property(&self, name: &str) -> Option<Value> {
        self.as_mapping().and_then(|m| m.property(name))
    }
}

impl FieldSource for OptionMap {
    fn call(&self, _method: &str) -> Option<Value> {
        None
    }

    fn property(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

type Accessor<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;

/// A table of named accessors that adapts a plain Rust type into a
/// [`FieldSource`].
///
/// ```
/// use panelkit_fields::{Accessors, FieldSource, Value};
///
/// struct User {
///     first_name: String,
///     active: bool,
/// }
///
/// let accessors = Accessors::new()
///     .method("getFirstName", |u: &User| Value::from(u.first_name.as_str()))
///     .method("isActive", |u: &User| Value::from(u.active));
///
/// let user = User { first_name: "Ada".into(), active: true };
/// let source = accessors.bind(&user);
/// assert_eq!(source.call("getFirstName"), Some(Value::from("Ada")));
/// assert_eq!(source.call("getLastName"), None);
/// ```
pub struct Accessors<T> {
    methods: HashMap<String, Accessor<T>>,
    properties: HashMap<String, Accessor<T>>,
}

impl<T> Accessors<T> {
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
            properties: HashMap::new(),
        }
    }

    /// Register an accessor method.
    pub fn method<F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Box::new(accessor));
        self
    }

    /// Register a directly readable property.
    pub fn property<F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        self.properties.insert(name.into(), Box::new(accessor));
        self
    }

    /// Pair the table with a target object.
    pub fn bind<'a>(&'a self, target: &'a T) -> Bound<'a, T> {
        Bound {
            accessors: self,
            target,
        }
    }
}

impl<T> Default for Accessors<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An [`Accessors`] table bound to one object.
pub struct Bound<'a, T> {
    accessors: &'a Accessors<T>,
    target: &'a T,
}

impl<T> FieldSource for Bound<'_, T> {
    fn call(&self, method: &str) -> Option<Value> {
        self.accessors.methods.get(method).map(|f| f(self.target))
    }

    fn property(&self, name: &str) -> Option<Value> {
        self.accessors.properties.get(name).map(|f| f(self.target))
    }
}
