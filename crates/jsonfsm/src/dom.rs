use alloc::{string::String, vec::Vec};

use log::trace;

use crate::{
    sax::SaxContext,
    value::{Array, Map, Value},
};

#[derive(Debug)]
enum Container {
    Object(Map),
    Array(Array),
}

/// An open container and the member name it will be attached under.
#[derive(Debug)]
struct Frame {
    name: String,
    container: Container,
}

/// Builds a [`Value`] from parse events.
///
/// Containers are assembled bottom-up: each open container lives on a stack
/// until its closing event, when it is attached to its parent (or becomes
/// the result).
///
/// ```
/// use jsonfsm::{DomBuilder, Grammar, ParserOptions};
///
/// let mut builder = DomBuilder::new();
/// Grammar::rfc7159()
///     .parse(r#"[1, {"k": null}]"#, &mut builder, ParserOptions::default())
///     .unwrap();
/// assert_eq!(builder.finish().to_string(), r#"[1,{"k":null}]"#);
/// ```
#[derive(Debug, Default)]
pub struct DomBuilder {
    stack: Vec<Frame>,
    root: Option<Value>,
}

impl DomBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value built so far; `Null` if no value was completed.
    #[must_use]
    pub fn finish(self) -> Value {
        self.root.unwrap_or_default()
    }

    fn attach(&mut self, name: &str, v: Value) -> bool {
        match self.stack.last_mut() {
            Some(Frame {
                container: Container::Object(o),
                ..
            }) => {
                o.insert(String::from(name), v);
            }
            Some(Frame {
                container: Container::Array(a),
                ..
            }) => a.push(v),
            None if self.root.is_none() => self.root = Some(v),
            // A second top-level value.
            None => return false,
        }
        true
    }

    fn open(&mut self, name: &str, container: Container) -> bool {
        if self.stack.is_empty() && self.root.is_some() {
            return false;
        }
        trace!("open {container:?} {name:?} at depth {}", self.stack.len());
        self.stack.push(Frame {
            name: String::from(name),
            container,
        });
        true
    }

    fn close(&mut self) -> bool {
        let Some(Frame { name, container }) = self.stack.pop() else {
            panic!("container closed with no container open");
        };
        trace!("close {name:?} at depth {}", self.stack.len());
        let v = match container {
            Container::Object(o) => Value::Object(o),
            Container::Array(a) => Value::Array(a),
        };
        self.attach(&name, v)
    }
}

impl SaxContext for DomBuilder {
    fn on_begin_object(&mut self, name: &str) -> bool {
        self.open(name, Container::Object(Map::new()))
    }

    fn on_end_object(&mut self, _name: &str) -> bool {
        self.close()
    }

    fn on_begin_array(&mut self, name: &str) -> bool {
        self.open(name, Container::Array(Array::new()))
    }

    fn on_end_array(&mut self, _name: &str) -> bool {
        self.close()
    }

    fn on_null_value(&mut self, name: &str) -> bool {
        self.attach(name, Value::Null)
    }

    fn on_boolean_value(&mut self, name: &str, value: bool) -> bool {
        self.attach(name, Value::Boolean(value))
    }

    fn on_integer_value(&mut self, name: &str, value: i64) -> bool {
        self.attach(name, Value::Integer(value))
    }

    fn on_uinteger_value(&mut self, name: &str, value: u64) -> bool {
        self.attach(name, Value::UInteger(value))
    }

    fn on_real_value(&mut self, name: &str, value: f64) -> bool {
        self.attach(name, Value::Real(value))
    }

    fn on_string_value(&mut self, name: &str, value: &str) -> bool {
        self.attach(name, Value::String(String::from(value)))
    }
}
