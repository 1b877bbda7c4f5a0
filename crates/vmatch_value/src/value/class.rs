//! Classes and class instances.

use std::fmt;
use std::sync::Arc;

use super::ObjectValue;

/// Shared handle to a class. Class identity is the allocation, not the name.
pub type ClassRef = Arc<Class>;

/// A named class with an optional parent class.
///
/// Instances created from a class are instances of it and of every ancestor.
pub struct Class {
    name: String,
    parent: Option<ClassRef>,
}

impl Class {
    /// Create a root class.
    pub fn new(name: impl Into<String>) -> ClassRef {
        Arc::new(Class {
            name: name.into(),
            parent: None,
        })
    }

    /// Create a class deriving from `parent`.
    pub fn extending(name: impl Into<String>, parent: &ClassRef) -> ClassRef {
        Arc::new(Class {
            name: name.into(),
            parent: Some(Arc::clone(parent)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&ClassRef> {
        self.parent.as_ref()
    }

    /// Whether `self` is `ancestor` or derives from it.
    pub fn derives_from(&self, ancestor: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if std::ptr::eq(class, ancestor) {
                return true;
            }
            current = class.parent.as_deref();
        }
        false
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parent {
            Some(parent) => write!(f, "class {} extends {}", self.name, parent.name),
            None => write!(f, "class {}", self.name),
        }
    }
}

/// An instance of a class: the class handle plus its own fields.
#[derive(Clone, Debug)]
pub struct InstanceValue {
    pub class: ClassRef,
    pub fields: ObjectValue,
}

impl PartialEq for InstanceValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.class, &other.class) && self.fields == other.fields
    }
}
