use once_cell::sync::Lazy;
use std::sync::Arc;

/// The canonical `true`. Boolean results always share this allocation, so
/// `Arc::ptr_eq` is a valid equality test for booleans.
pub static TRUE: Lazy<Arc<Object>> = Lazy::new(|| Arc::new(Object::Boolean(true)));
/// The canonical `false`.
pub static FALSE: Lazy<Arc<Object>> = Lazy::new(|| Arc::new(Object::Boolean(false)));
/// The canonical null value.
pub static NULL: Lazy<Arc<Object>> = Lazy::new(|| Arc::new(Object::Null));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    INTEGER,
    BOOLEAN,
    NULL,
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Object {
    pub fn kind(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::INTEGER,
            Self::Boolean(_) => ObjectType::BOOLEAN,
            Self::Null => ObjectType::NULL,
        }
    }
}

impl std::fmt::Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Boolean(value) => write!(f, "{}", value),
            Self::Null => write!(f, "null"),
        }
    }
}

pub fn native_bool_to_object(value: bool) -> Arc<Object> {
    if value {
        Arc::clone(&*TRUE)
    } else {
        Arc::clone(&*FALSE)
    }
}
